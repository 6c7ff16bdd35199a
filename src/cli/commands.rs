//! Command implementations for the Syllabize CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::transform::NameTransformer;

/// Execute a CLI command.
pub fn execute_command(args: SyllabizeArgs) -> Result<()> {
    match &args.command {
        Command::Segment(segment_args) => segment_batch(segment_args.clone(), &args),
        Command::Name(name_args) => segment_single(name_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Skip rules for batch input lines: blank lines, quoted lines, and names
/// the dictionary already knows as whole words.
pub fn should_skip(name: &str, dictionary: &Dictionary) -> bool {
    name.is_empty() || name.starts_with('"') || dictionary.contains(&name.to_lowercase())
}

/// Process a batch of names, one per line.
fn segment_batch(args: SegmentArgs, cli_args: &SyllabizeArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        eprintln!("Loading word list from: {}", args.dictionary.display());
    }

    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let transformer = NameTransformer::new(dictionary.clone())?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut processed = 0usize;
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let name = line.trim();

        if should_skip(name, &dictionary) {
            skipped += 1;
            continue;
        }

        let record = NameRecord {
            name: name.to_string(),
            syllables: transformer.transform(name)?,
        };
        write_record(&mut writer, &record, &cli_args.output_format, &args.table)?;
        processed += 1;
    }

    writer.flush()?;

    if cli_args.verbosity() > 1 {
        eprintln!("Processed {processed} names ({skipped} skipped)");
    }

    Ok(())
}

/// Segment a single name given on the command line.
///
/// The batch skip rules do not apply here; the name was asked for
/// explicitly.
fn segment_single(args: NameArgs, cli_args: &SyllabizeArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let transformer = NameTransformer::new(dictionary)?;

    let record = NameRecord {
        syllables: transformer.transform(&args.name)?,
        name: args.name,
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_record(&mut writer, &record, &cli_args.output_format, &args.table)
}

/// Show statistics about a word list.
fn show_stats(args: StatsArgs, cli_args: &SyllabizeArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let stats = dictionary_stats(&dictionary);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_dictionary_stats(&mut writer, &stats, &cli_args.output_format)
}
