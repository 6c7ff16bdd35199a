//! Integration tests for the full segmentation pipeline

use std::io::Write;

use syllabize::cli::commands::should_skip;
use syllabize::cli::output::{NameRecord, sql_update};
use syllabize::dictionary::Dictionary;
use syllabize::error::Result;
use syllabize::transform::NameTransformer;
use tempfile::NamedTempFile;

fn word_list(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_file_backed_pipeline() -> Result<()> {
    let file = word_list(&["spring", "field", "wood", "ox"]);
    let dictionary = Dictionary::load_from_file(file.path())?;
    let transformer = NameTransformer::new(dictionary)?;

    assert_eq!(transformer.transform("Springfield")?, "Spring__field");
    assert_eq!(transformer.transform("Springwood")?, "Spring__wood");

    // "ox" fell below the length cutoff, so "Springox" cannot decompose.
    assert_eq!(transformer.transform("Springox")?, "Sprin_gox");

    Ok(())
}

#[test]
fn test_separator_idempotence() -> Result<()> {
    let dictionary = Dictionary::from_words(vec!["spring", "field"]);
    let transformer = NameTransformer::new(dictionary)?;

    // Only word characters change; every separator byte survives in place.
    let cases = [
        "St. Mary's-on-the-Hill",
        "  padded  ",
        "a,b;c",
        "...",
        "",
    ];

    for input in cases {
        let output = transformer.transform(input)?;
        let stripped: String = output.chars().filter(|c| *c != '_').collect();
        let unmarked: String = input.chars().filter(|c| *c != '_').collect();
        assert_eq!(stripped, unmarked, "separators changed for {input:?}");
    }

    Ok(())
}

#[test]
fn test_short_word_passthrough() -> Result<()> {
    // Both halves are dictionary members, but the whole stays at six
    // characters, so no compound decomposition is attempted.
    let dictionary = Dictionary::from_words(vec!["cat", "fis"]);
    let transformer = NameTransformer::new(dictionary)?;

    assert_eq!(transformer.transform("catfis")?, "cat_fis");
    Ok(())
}

#[test]
fn test_compound_greediness() -> Result<()> {
    let dictionary = Dictionary::from_words(vec!["cat", "fish", "catfish", "hook"]);
    let transformer = NameTransformer::new(dictionary)?;

    // The longest valid prefix wins, and recursion segments both halves.
    assert_eq!(transformer.transform("catfishhook")?, "cat__fish__hook");
    Ok(())
}

#[test]
fn test_digraph_protection() -> Result<()> {
    let transformer = NameTransformer::new(Dictionary::default())?;

    assert_eq!(transformer.transform("python")?, "py_thon");
    assert_eq!(transformer.transform("marshmallow")?, "marsh_mal_low");
    Ok(())
}

#[test]
fn test_silent_e_removal() -> Result<()> {
    let transformer = NameTransformer::new(Dictionary::default())?;

    assert_eq!(transformer.transform("table")?, "table");
    assert_eq!(transformer.transform("tablet")?, "tab_let");
    Ok(())
}

#[test]
fn test_gerund_demotion() -> Result<()> {
    let dictionary = Dictionary::from_words(vec!["spell", "ing"]);
    let transformer = NameTransformer::new(dictionary)?;

    assert_eq!(transformer.transform("Spelling's Cove")?, "Spell_ing's Cove");
    Ok(())
}

#[test]
fn test_sql_escaping_round_trip() -> Result<()> {
    let transformer = NameTransformer::new(Dictionary::default())?;

    let name = "O'Brien";
    let record = NameRecord {
        name: name.to_string(),
        syllables: transformer.transform(name)?,
    };
    let statement = sql_update(&record, "names");

    assert_eq!(
        statement,
        "UPDATE names SET syllables = 'O''Brien' WHERE name = 'O''Brien';"
    );
    Ok(())
}

#[test]
fn test_skip_rules() {
    let dictionary = Dictionary::from_words(vec!["forest"]);

    // Whole dictionary words need no segmentation; quoted lines and blank
    // lines are never processed.
    assert!(should_skip("forest", &dictionary));
    assert!(should_skip("FOREST", &dictionary));
    assert!(should_skip("\"header\"", &dictionary));
    assert!(should_skip("", &dictionary));

    assert!(!should_skip("forests", &dictionary));
}
