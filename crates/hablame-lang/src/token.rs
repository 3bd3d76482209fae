//! Word tokens and ordered token sequences.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// A single Spanish word or connector ("y", "de", "mil").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordToken(Cow<'static, str>);

impl WordToken {
    pub const fn from_static(word: &'static str) -> Self {
        Self(Cow::Borrowed(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for WordToken {
    fn from(word: &'static str) -> Self {
        Self::from_static(word)
    }
}

impl From<String> for WordToken {
    fn from(word: String) -> Self {
        Self(Cow::Owned(word))
    }
}

impl AsRef<str> for WordToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for WordToken {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered words of a sentence fragment. Word order is grammatical and is
/// preserved from assembly through display and playback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<WordToken>);

impl TokenSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, token: impl Into<WordToken>) {
        self.0.push(token.into());
    }

    /// Appends every token of `other`, keeping its order.
    pub fn extend_from(&mut self, other: TokenSequence) {
        self.0.extend(other.0);
    }

    /// Borrowed views of the words, in order.
    pub fn words(&self) -> Vec<&str> {
        self.0.iter().map(WordToken::as_str).collect()
    }
}

impl Deref for TokenSequence {
    type Target = [WordToken];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Into<WordToken>> FromIterator<T> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<WordToken>> Extend<T> for TokenSequence {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for TokenSequence {
    type Item = WordToken;
    type IntoIter = std::vec::IntoIter<WordToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a WordToken;
    type IntoIter = std::slice::Iter<'a, WordToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Space-joined display text.
impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}
