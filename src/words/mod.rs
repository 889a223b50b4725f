//! Keyword extraction built on [`AvlMap`]: word frequency counting, top-k
//! selection by frequency and stopword filtering.
//!
//! ```
//! use avlmap::words::{count_frequencies, filter_keywords, load_stopwords, top_k, Normalizer};
//!
//! let text = "The tree, the map and the TREE!";
//! let counts = count_frequencies(text.as_bytes(), &Normalizer::default()).unwrap();
//! assert_eq!(counts.get("the"), Some(&3));
//! assert_eq!(counts.get("tree"), Some(&2));
//!
//! let top = top_k(&counts, 2);
//! assert_eq!(top, [("the".to_string(), 3), ("tree".to_string(), 2)]);
//!
//! let stopwords = load_stopwords("the and a".as_bytes()).unwrap();
//! let keywords = filter_keywords(top, &stopwords);
//! assert_eq!(keywords.traverse_in_order(), [("tree".to_string(), 2)]);
//! ```
//!
//! [`AvlMap`]: crate::AvlMap

use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use log::debug;

use crate::Error;

mod frequency;
mod normalize;
mod stopwords;
mod top_k;

pub use frequency::*;
pub use normalize::*;
pub use stopwords::*;
pub use top_k::*;

/// Call `f` with every whitespace-separated token in `reader`.
fn for_each_token<R, F>(reader: R, mut f: F) -> Result<(), Error>
where
    R: BufRead,
    F: FnMut(&str),
{
    for line in reader.lines() {
        line?.split_whitespace().for_each(&mut f);
    }

    Ok(())
}

/// Open the file at `path` for buffered reading.
fn open(path: &Path) -> Result<BufReader<File>, Error> {
    debug!("opening input file {}", path.display());

    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}
