//! CSV output writer.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::core::report::FrequencyEntry;
use crate::error::{ChatstatsError, Result};

/// Writes the message timeline to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Messages`
/// - Encoding: UTF-8
pub fn write_timeline_csv(timeline: &[FrequencyEntry], output_path: impl AsRef<Path>) -> Result<()> {
    write_entries(timeline, ["Date", "Messages"], output_path.as_ref())
}

/// Writes a word or emoji frequency table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Token`, `Count`
/// - Encoding: UTF-8
pub fn write_frequencies_csv(
    entries: &[FrequencyEntry],
    output_path: impl AsRef<Path>,
) -> Result<()> {
    write_entries(entries, ["Token", "Count"], output_path.as_ref())
}

/// Converts frequency rows to a CSV string with the given column headers.
///
/// Same format as the file writers, returned as a `String`.
pub fn to_csv(entries: &[FrequencyEntry], header: [&str; 2]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, entries, header)?;
    // csv writes whatever UTF-8 it was given
    String::from_utf8(buffer).map_err(|e| ChatstatsError::encoding("CSV output", e.utf8_error()))
}

fn write_entries(entries: &[FrequencyEntry], header: [&str; 2], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| ChatstatsError::io_at(e, output_path))?;
    write_records(file, entries, header)
}

fn write_records<W: io::Write>(sink: W, entries: &[FrequencyEntry], header: [&str; 2]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(header)?;
    for entry in entries {
        writer.write_record([entry.key.as_str(), &entry.count.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn entries() -> Vec<FrequencyEntry> {
        vec![
            FrequencyEntry {
                key: "2019-09-29".into(),
                count: 3,
            },
            FrequencyEntry {
                key: "2019-09-30".into(),
                count: 1,
            },
        ]
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&entries(), ["Date", "Messages"]).unwrap();
        assert_eq!(csv, "Date;Messages\n2019-09-29;3\n2019-09-30;1\n");
    }

    #[test]
    fn test_to_csv_quotes_delimiter() {
        let rows = vec![FrequencyEntry {
            key: "a;b".into(),
            count: 1,
        }];
        let csv = to_csv(&rows, ["Token", "Count"]).unwrap();
        assert!(csv.contains("\"a;b\";1"));
    }

    #[test]
    fn test_write_timeline_csv() {
        let temp_file = NamedTempFile::new().unwrap();
        write_timeline_csv(&entries(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("Date;Messages"));
        assert!(content.contains("2019-09-29;3"));
    }

    #[test]
    fn test_write_frequencies_csv() {
        let rows = vec![FrequencyEntry {
            key: "😂".into(),
            count: 12,
        }];
        let temp_file = NamedTempFile::new().unwrap();
        write_frequencies_csv(&rows, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "Token;Count\n😂;12\n");
    }
}
