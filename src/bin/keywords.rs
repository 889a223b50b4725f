//! Extract the keywords of a text file: the most frequent words that are not
//! common English words.
//!
//! ```text
//! keywords <K> <INPUT> <STOPWORDS>
//! ```
//!
//! Words are counted case-insensitively, ignoring a single trailing
//! punctuation character. The `K` most frequent words are printed, followed by
//! those of the `K` that do not appear in the `STOPWORDS` list, in
//! alphabetical order.

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use avlmap::words::{
    count_file_frequencies, filter_keywords, load_stopword_file, top_k, Normalizer,
};
use clap::Parser;
use log::info;

#[derive(Debug, Parser)]
#[clap(name = "keywords", version, about)]
struct CliOpts {
    /// The number of most frequent words to select.
    k: usize,

    /// The text file to extract keywords from.
    input: PathBuf,

    /// A file of whitespace-separated common words to exclude.
    stopwords: PathBuf,

    /// Characters removed when found at the end of a word.
    #[clap(long, env = "KEYWORDS_PUNCTUATION", default_value = ".,;:\"'?!")]
    punctuation: String,

    /// Print the frequency of every word in the input, alphabetically.
    #[clap(long)]
    show_frequencies: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[clap(short, long)]
    verbose: bool,
}

/// Initialise the logger from the `RUST_LOG` environment variable, falling
/// back to `default_level` when it is not set.
fn initialize_logger(default_level: &str) {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let opts = CliOpts::parse();

    initialize_logger(if opts.verbose { "debug" } else { "info" });

    let normalizer = Normalizer::new(opts.punctuation.chars());

    let counts = count_file_frequencies(&opts.input, &normalizer)
        .with_context(|| format!("counting words in {}", opts.input.display()))?;
    let stopwords = load_stopword_file(&opts.stopwords)
        .with_context(|| format!("loading stopwords from {}", opts.stopwords.display()))?;

    info!(
        "read {} distinct words and {} stopwords",
        counts.len(),
        stopwords.len()
    );

    let mut out = BufWriter::new(io::stdout().lock());

    if opts.show_frequencies {
        writeln!(out, "Word frequencies:")?;
        for (word, count) in &counts {
            writeln!(out, "{word} {count}")?;
        }
        writeln!(out)?;
    }

    let top = top_k(&counts, opts.k);

    writeln!(out, "Top {} most frequent words:", opts.k)?;
    for (word, count) in &top {
        writeln!(out, "{word} {count}")?;
    }
    writeln!(out)?;

    let keywords = filter_keywords(top, &stopwords);

    writeln!(out, "Keywords:")?;
    for (word, count) in &keywords {
        writeln!(out, "{word} {count}")?;
    }

    out.flush()?;

    Ok(())
}
