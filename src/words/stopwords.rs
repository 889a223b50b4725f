use std::path::Path;

use log::debug;

use crate::{AvlMap, Error};

use super::{for_each_token, open};

/// Load a set of lowercased stopwords from the whitespace-separated words in
/// `reader`.
pub fn load_stopwords<R>(reader: R) -> Result<AvlMap<String, ()>, Error>
where
    R: std::io::BufRead,
{
    let mut words = AvlMap::new();

    for_each_token(reader, |token| {
        words.put(token.to_lowercase(), ());
    })?;

    debug!("loaded {} stopwords", words.len());

    Ok(words)
}

/// Load a set of lowercased stopwords from the file at `path`.
///
/// See [`load_stopwords()`].
pub fn load_stopword_file(path: impl AsRef<Path>) -> Result<AvlMap<String, ()>, Error> {
    load_stopwords(open(path.as_ref())?)
}

/// Collect the entries of `candidates` whose key does not appear in
/// `stopwords` into a new map.
pub fn filter_keywords<K, V, I>(candidates: I, stopwords: &AvlMap<K, ()>) -> AvlMap<K, V>
where
    K: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    candidates
        .into_iter()
        .filter(|(k, _v)| !stopwords.contains_key(k))
        .collect()
}
