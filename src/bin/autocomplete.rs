//! Interactive autocomplete client: build the dictionary once, then
//! answer one prefix per stdin line with the top k weighted matches.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use autocomplete::dictionary::Dictionary;
use autocomplete::Autocomplete;

#[derive(Parser)]
#[command(about = "Prefix autocomplete over a weighted dictionary file")]
struct Args {
    /// Dictionary file: an entry count line, then `weight<TAB>term` lines.
    dictionary: PathBuf,

    /// How many matches to print per query.
    #[arg(short, long, default_value_t = 10)]
    k: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (terms, weights) = Dictionary::read_all(&args.dictionary)
        .with_context(|| format!("could not load dictionary {}", args.dictionary.display()))?;
    let engine = Autocomplete::new(terms, weights).context("invalid dictionary contents")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().lines() {
        let prefix = line.context("could not read query")?;

        for term in engine.top_matches(&prefix, args.k) {
            writeln!(stdout, "{:14.1}  {}", engine.weight_of(&term), term)?;
        }
        stdout.flush()?;
    }

    Ok(())
}
