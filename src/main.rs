//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatstats::cli::{Args, OutputFormat, setup_logging};
use chatstats::core::output::{to_json, write_frequencies_csv, write_timeline_csv};
use chatstats::core::{ChatAnalyzer, ChatReport, FrequencyEntry, UserStats, chat_name_from_export};
use chatstats::{ChatstatsError, TranscriptParser};

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level.as_deref());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let start = Instant::now();

    let parser = TranscriptParser::with_config(args.parse_config());
    let messages = parser.parse_file(&args.input)?;
    info!(
        messages = messages.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "parsed transcript"
    );

    let name = args
        .name
        .clone()
        .or_else(|| {
            args.input
                .file_name()
                .and_then(|f| f.to_str())
                .and_then(chat_name_from_export)
        })
        .unwrap_or_else(|| chatstats::core::DEFAULT_CHAT_NAME.to_string());
    let analyzer = ChatAnalyzer::new(messages).with_name(name);
    let report = analyzer.report(&args.report_config());

    if let Some(ref path) = args.timeline_csv {
        write_timeline_csv(&report.timeline, path)?;
        info!(path = %path.display(), "wrote timeline");
    }

    if let Some(ref path) = args.words_csv {
        let words: Vec<FrequencyEntry> = analyzer
            .word_frequencies()
            .ranked()
            .into_iter()
            .map(|(word, count)| FrequencyEntry {
                key: word.clone(),
                count,
            })
            .collect();
        write_frequencies_csv(&words, path)?;
        info!(path = %path.display(), "wrote word table");
    }

    if let Some(ref contact) = args.user {
        let stats = analyzer.per_user_summary(contact)?;
        match args.format {
            OutputFormat::Text => print_user(stats),
            OutputFormat::Json => {
                let user = report
                    .users
                    .iter()
                    .find(|u| &u.contact == contact)
                    .ok_or_else(|| ChatstatsError::not_found(contact.as_str()))?;
                println!("{}", to_json(user)?);
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }

    Ok(())
}

fn print_report(report: &ChatReport) {
    println!("📊 {}", report.name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("💬 Messages:  {}", report.total_messages);
    println!("📝 Words:     {}", report.total_words);
    println!("🔤 Letters:   {}", report.total_letters);
    println!("📎 Media:     {}", report.total_media);
    println!("🗑️  Deleted:   {}", report.total_deleted);
    println!("😀 Emoji:     {}", report.total_emojis);

    println!();
    if let (Some(first), Some(last)) = (&report.first_message, &report.last_message) {
        println!("📅 From {} to {} ({} days)", first, last, report.total_days);
    }
    match report.average_messages_per_day {
        Some(avg) => println!("   Average:   {} messages/day", avg),
        None => println!("   Average:   n/a"),
    }

    if let Some(ref date) = report.most_active_date {
        println!("   Busiest day:   {} ({} messages)", date.key, date.count);
    }
    if let Some(ref day) = report.most_active_weekday {
        println!("   Busiest weekday: {} ({} messages)", day.key, day.count);
    }
    if let Some(ref hour) = report.most_active_hour {
        println!("   Busiest hour:  {}:00 ({} messages)", hour.key, hour.count);
    }
    if let Some(ref contact) = report.most_frequent_contact {
        println!("   Most active:   {} ({} messages)", contact.key, contact.count);
    }
    if let Some(ref longest) = report.longest_message {
        println!("   Longest message: {} ({} words)", longest.key, longest.count);
    }

    if !report.top_words.is_empty() {
        println!();
        println!("🔠 Top words:");
        for entry in &report.top_words {
            println!("   {:<20} {}", entry.key, entry.count);
        }
    }

    if !report.top_emojis.is_empty() {
        println!();
        println!("🎉 Top emoji:");
        let line: Vec<String> = report
            .top_emojis
            .iter()
            .map(|e| format!("{} {}", e.key, e.count))
            .collect();
        println!("   {}", line.join("  "));
    }

    if !report.users.is_empty() {
        println!();
        println!("👥 Contacts:");
        for user in &report.users {
            let wpm = user
                .words_per_message
                .map_or_else(|| "n/a".to_string(), |r| r.to_string());
            println!(
                "   {:<20} {} messages, {} media, {} words/message",
                user.contact, user.messages, user.media, wpm
            );
        }
    }
}

fn print_user(stats: &UserStats) {
    let ratio = |r: chatstats::Result<chatstats::core::Ratio>| {
        r.map_or_else(|_| "n/a".to_string(), |r| r.to_string())
    };

    println!("👤 {}", stats.contact);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("💬 Messages:  {}", stats.messages);
    println!("📎 Media:     {}", stats.media);
    println!("🗑️  Deleted:   {}", stats.deleted);
    println!("📝 Words:     {}", stats.words);
    println!("🔤 Letters:   {}", stats.letters);
    println!("😀 Emoji:     {}", stats.emoji_count);
    if let Some((ref emoji, count)) = stats.favorite_emoji {
        println!("❤️  Favorite:  {} ({} times)", emoji, count);
    }
    println!("   Words/message:  {}", ratio(stats.words_per_message()));
    println!("   Letters/word:   {}", ratio(stats.letters_per_word()));
}
