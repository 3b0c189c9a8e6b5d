//! Sort words by a custom alphabet.
//!
//! The first stdin line is the alphabet (a permutation of the symbols
//! the words use); every following line is a word. The words come back
//! out sorted by the given alphabet's order.

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;

use autocomplete::alphabet::Alphabet;
use autocomplete::trie::Trie;

#[derive(Parser)]
#[command(about = "Sort stdin words by the alphabet given on the first line")]
struct Args {}

fn main() -> Result<()> {
    Args::parse();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let alphabet = match lines.next() {
        Some(line) => Alphabet::new(&line.context("could not read the alphabet line")?)?,
        None => bail!("no alphabet given"),
    };

    let mut trie = Trie::new();
    let mut words = 0;
    for line in lines {
        let word = line.context("could not read a word line")?;
        if word.is_empty() {
            continue;
        }
        trie.insert(&word)?;
        words += 1;
    }

    if words == 0 {
        bail!("no words given");
    }

    for word in trie.alphabetize(&alphabet) {
        println!("{}", word);
    }

    Ok(())
}
