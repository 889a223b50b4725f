/// The punctuation stripped from the end of a word by the default
/// [`Normalizer`].
pub const DEFAULT_PUNCTUATION: &[char] = &['.', ',', ';', ':', '"', '\'', '?', '!'];

/// Normalises raw whitespace-separated tokens into comparable words.
///
/// A token is lowercased, and then a single trailing punctuation character
/// (if any) is removed. Leading punctuation and punctuation within the word is
/// retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    punctuation: Vec<char>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION.iter().copied())
    }
}

impl Normalizer {
    /// Construct a [`Normalizer`] that strips any of the given `punctuation`
    /// characters from the end of a token.
    pub fn new(punctuation: impl IntoIterator<Item = char>) -> Self {
        Self {
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// Normalise `token`, returning the (possibly empty) word.
    ///
    /// ```
    /// use avlmap::words::Normalizer;
    ///
    /// let n = Normalizer::default();
    ///
    /// assert_eq!(n.normalize("Tree,"), "tree");
    /// assert_eq!(n.normalize("\"quoted\""), "\"quoted");
    /// assert_eq!(n.normalize("!"), "");
    /// ```
    pub fn normalize(&self, token: &str) -> String {
        let mut word = token.to_lowercase();

        if word.ends_with(self.punctuation.as_slice()) {
            word.pop();
        }

        word
    }
}
