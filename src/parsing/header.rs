//! Header line recognition.
//!
//! Exporter versions and locales disagree on the punctuation around the
//! timestamp, so a line is tested against a small ordered table of layouts
//! and the first match wins:
//!
//! | Layout | Example |
//! |--------|---------|
//! | [`Dash`](HeaderLayout::Dash) | `29/09/2019, 12:56 am - Alice: hello` |
//! | [`Bracket`](HeaderLayout::Bracket) | `[29/09/19, 12:56:02 PM] Alice: hello` |
//!
//! A line matching no layout is continuation text, never an error.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::DateOrder;

/// Known header layouts, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// `D/M/Y, H:MM[:SS][ AM|PM] - rest`
    Dash,
    /// `[D/M/Y, H:MM[:SS][ AM|PM]] rest`
    Bracket,
}

impl HeaderLayout {
    /// Returns the regex pattern for this layout.
    ///
    /// Every pattern captures `date`, `time` and `rest` (contact and body).
    pub fn pattern(self) -> &'static str {
        match self {
            // 29/09/2019, 12:56 am - Alice: hello
            HeaderLayout::Dash => {
                r"^(?P<date>\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:[\s\x{202F}\x{A0}]?[AaPp]\.?[Mm]\.?)?)\s[-\x{2013}]\s(?P<rest>.*)$"
            }
            // [29/09/19, 12:56:02 PM] Alice: hello
            HeaderLayout::Bracket => {
                r"^\x{200E}?\[(?P<date>\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}),?\s(?P<time>\d{1,2}:\d{2}(?::\d{2})?(?:[\s\x{202F}\x{A0}]?[AaPp]\.?[Mm]\.?)?)\]\s?(?P<rest>.*)$"
            }
        }
    }

    /// Returns all layouts in matching order.
    pub fn all() -> &'static [HeaderLayout] {
        &[HeaderLayout::Dash, HeaderLayout::Bracket]
    }
}

/// The raw fields of a matched header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader<'a> {
    /// Layout that matched
    pub layout: HeaderLayout,
    /// Date text, e.g. `29/09/2019`
    pub date: &'a str,
    /// Time text, e.g. `12:56 am`
    pub time: &'a str,
    /// Everything after the timestamp: `Contact: body` or a system notice
    pub rest: &'a str,
}

static MATCHERS: LazyLock<Vec<(HeaderLayout, Regex)>> = LazyLock::new(|| {
    HeaderLayout::all()
        .iter()
        .map(|&layout| {
            let regex = Regex::new(layout.pattern()).expect("header patterns are valid");
            (layout, regex)
        })
        .collect()
});

/// Matches a line against every known layout, first match wins.
pub fn match_header(line: &str) -> Option<RawHeader<'_>> {
    MATCHERS.iter().find_map(|(layout, regex)| {
        let caps = regex.captures(line)?;
        Some(RawHeader {
            layout: *layout,
            date: caps.name("date")?.as_str(),
            time: caps.name("time")?.as_str(),
            rest: caps.name("rest").map_or("", |m| m.as_str()),
        })
    })
}

/// Splits the text after the timestamp into contact and body.
///
/// Returns `None` when the contact separator is missing or the contact is
/// empty; such lines are platform notices ("Alice added Bob").
pub fn split_contact(rest: &str) -> Option<(&str, &str)> {
    let (contact, body) = rest.split_once(':')?;
    let contact = contact
        .trim()
        .trim_start_matches(['\u{200E}', '~', '\u{202F}', ' '])
        .trim();
    if contact.is_empty() {
        return None;
    }

    let body = body.trim_start_matches(' ').trim_start_matches('\u{200E}');
    Some((contact, body))
}

/// Parses header date and time text into a timestamp.
///
/// `order` must be resolved ([`DateOrder::Auto`] is read as day-first).
/// Returns `None` for values that are not a real calendar date or clock time.
pub fn parse_timestamp(date: &str, time: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let date = parse_date(date, order)?;
    let time = parse_time(time)?;
    Some(date.and_time(time))
}

fn date_components(date: &str) -> Option<(u32, u32, i32)> {
    let mut parts = date.split(['/', '.', '-']);
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    let year_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let year: i32 = year_str.parse().ok()?;
    let year = if year_str.len() <= 2 { 2000 + year } else { year };
    Some((first, second, year))
}

fn parse_date(date: &str, order: DateOrder) -> Option<NaiveDate> {
    let (first, second, year) = date_components(date)?;
    let (day, month) = match order {
        DateOrder::MonthFirst => (second, first),
        DateOrder::DayFirst | DateOrder::Auto => (first, second),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    let normalized = time
        .replace(['\u{202F}', '\u{A0}'], " ")
        .replace('.', "")
        .to_ascii_lowercase();
    let normalized = normalized.trim();

    let (clock, meridiem) = if let Some(clock) = normalized.strip_suffix("am") {
        (clock.trim_end(), Some("AM"))
    } else if let Some(clock) = normalized.strip_suffix("pm") {
        (clock.trim_end(), Some("PM"))
    } else {
        (normalized, None)
    };

    let (candidate, formats): (String, &[&str]) = match meridiem {
        Some(m) => (format!("{clock} {m}"), &["%I:%M:%S %p", "%I:%M %p"]),
        None => (clock.to_string(), &["%H:%M:%S", "%H:%M"]),
    };

    formats
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(&candidate, f).ok())
}

/// Detects the day/month order from the dates of header lines.
///
/// The first header whose first component exceeds 12 decides day-first;
/// the first whose second component exceeds 12 decides month-first.
/// Returns `None` when every date is ambiguous.
pub fn detect_date_order<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<DateOrder> {
    lines.into_iter().find_map(|line| {
        let header = match_header(line)?;
        let (first, second, _) = date_components(header.date)?;
        if first > 12 && second <= 12 {
            Some(DateOrder::DayFirst)
        } else if second > 12 && first <= 12 {
            Some(DateOrder::MonthFirst)
        } else {
            None
        }
    })
}
