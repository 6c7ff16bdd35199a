//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::dictionary::Dictionary;
use crate::error::Result;

/// One processed name and its segmented form.
#[derive(Debug, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub syllables: String,
}

/// Statistics over a loaded word list.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub entries: usize,
    pub min_entry_chars: usize,
    pub max_entry_chars: usize,
    pub mean_entry_chars: f64,
}

/// Escape a string for embedding in a single-quoted SQL literal.
///
/// Every `'` is doubled; nothing else is touched.
pub fn sql_escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render a record as an `UPDATE` statement against the given table.
pub fn sql_update(record: &NameRecord, table: &str) -> String {
    format!(
        "UPDATE {} SET syllables = '{}' WHERE name = '{}';",
        table,
        sql_escape(&record.syllables),
        sql_escape(&record.name)
    )
}

/// Write one record in the selected format.
pub fn write_record<W: Write>(
    writer: &mut W,
    record: &NameRecord,
    format: &OutputFormat,
    table: &str,
) -> Result<()> {
    match format {
        OutputFormat::Sql => writeln!(writer, "{}", sql_update(record, table))?,
        OutputFormat::Plain => writeln!(writer, "{}", record.syllables)?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(record)?)?,
    }
    Ok(())
}

/// Compute entry-count and length statistics for a dictionary.
pub fn dictionary_stats(dictionary: &Dictionary) -> DictionaryStats {
    let lengths: Vec<usize> = dictionary.iter().map(|w| w.chars().count()).collect();
    let entries = lengths.len();

    DictionaryStats {
        entries,
        // Entries are ordered longest-first.
        max_entry_chars: lengths.first().copied().unwrap_or(0),
        min_entry_chars: lengths.last().copied().unwrap_or(0),
        mean_entry_chars: if entries == 0 {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / entries as f64
        },
    }
}

/// Write dictionary statistics in the selected format.
///
/// The SQL format has no meaningful rendering for statistics, so both `sql`
/// and `plain` print the human-readable form.
pub fn write_dictionary_stats<W: Write>(
    writer: &mut W,
    stats: &DictionaryStats,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(stats)?)?,
        OutputFormat::Sql | OutputFormat::Plain => {
            writeln!(writer, "Entries: {}", stats.entries)?;
            writeln!(writer, "Shortest entry: {} chars", stats.min_entry_chars)?;
            writeln!(writer, "Longest entry: {} chars", stats.max_entry_chars)?;
            writeln!(writer, "Mean entry length: {:.2} chars", stats.mean_entry_chars)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, syllables: &str) -> NameRecord {
        NameRecord {
            name: name.to_string(),
            syllables: syllables.to_string(),
        }
    }

    #[test]
    fn test_sql_escape() {
        assert_eq!(sql_escape("O'Brien"), "O''Brien");
        assert_eq!(sql_escape("''"), "''''");
        assert_eq!(sql_escape("plain"), "plain");
    }

    #[test]
    fn test_sql_update_statement() {
        let statement = sql_update(&record("O'Brien", "O'Bri_en"), "names");
        assert_eq!(
            statement,
            "UPDATE names SET syllables = 'O''Bri_en' WHERE name = 'O''Brien';"
        );
    }

    #[test]
    fn test_write_record_formats() {
        let record = record("Python", "Py_thon");

        let mut sql = Vec::new();
        write_record(&mut sql, &record, &OutputFormat::Sql, "names").unwrap();
        assert_eq!(
            String::from_utf8(sql).unwrap(),
            "UPDATE names SET syllables = 'Py_thon' WHERE name = 'Python';\n"
        );

        let mut plain = Vec::new();
        write_record(&mut plain, &record, &OutputFormat::Plain, "names").unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "Py_thon\n");

        let mut json = Vec::new();
        write_record(&mut json, &record, &OutputFormat::Json, "names").unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            "{\"name\":\"Python\",\"syllables\":\"Py_thon\"}\n"
        );
    }

    #[test]
    fn test_dictionary_stats() {
        let dictionary = Dictionary::from_words(vec!["cat", "fish", "catfish"]);
        let stats = dictionary_stats(&dictionary);

        assert_eq!(stats.entries, 3);
        assert_eq!(stats.min_entry_chars, 3);
        assert_eq!(stats.max_entry_chars, 7);
        assert!((stats.mean_entry_chars - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dictionary_stats() {
        let stats = dictionary_stats(&Dictionary::default());
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.min_entry_chars, 0);
        assert_eq!(stats.max_entry_chars, 0);
        assert_eq!(stats.mean_entry_chars, 0.0);
    }
}
