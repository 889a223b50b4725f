use std::path::Path;

use log::{debug, trace};

use crate::{AvlMap, Error};

use super::{for_each_token, open, Normalizer};

/// Count the occurrences of each normalised word in `reader`.
///
/// Tokens that normalise to an empty word (such as a lone punctuation mark)
/// are skipped. Empty input produces an empty map.
pub fn count_frequencies<R>(reader: R, normalizer: &Normalizer) -> Result<AvlMap<String, u64>, Error>
where
    R: std::io::BufRead,
{
    let mut counts = AvlMap::new();

    for_each_token(reader, |token| {
        let word = normalizer.normalize(token);
        if word.is_empty() {
            trace!("skipping empty token {token:?}");
            return;
        }

        // Replacing the count of an existing word leaves the tree shape
        // untouched, only new words trigger a rebalance.
        let n = counts.get(word.as_str()).copied().unwrap_or(0);
        counts.put(word, n + 1);
    })?;

    debug!("counted {} distinct words", counts.len());

    Ok(counts)
}

/// Count the occurrences of each normalised word in the file at `path`.
///
/// See [`count_frequencies()`].
pub fn count_file_frequencies(
    path: impl AsRef<Path>,
    normalizer: &Normalizer,
) -> Result<AvlMap<String, u64>, Error> {
    count_frequencies(open(path.as_ref())?, normalizer)
}
