//! The word list collaborator: an ordered table of 2048 words and the
//! reverse index used to turn mnemonic words back into 11-bit values.
//!
//! Only the standard BIP39 English list is embedded. Other languages are
//! out of scope for this decoder, but [`WordList::new`] accepts any
//! 2048-entry table, so a caller with a different language's list can still
//! use the rest of the crate.

use std::collections::HashMap;

/// The standard BIP39 English word list, one word per line, in index order.
const ENGLISH: &str = include_str!("wordlist/english.txt");

/// An ordered 2048-word list plus the word-to-index map derived from it.
pub struct WordList {
    pub(crate) words: Vec<&'static str>,
    index: HashMap<&'static str, u16>,
}

impl WordList {
    /// Build a word list from exactly 2048 entries. Panics if `words` does
    /// not have exactly 2048 entries -- this is a collaborator contract, not
    /// a user-facing input, so a malformed table is a programming error.
    pub fn new(words: Vec<&'static str>) -> Self {
        assert_eq!(words.len(), 2048, "a BIP39 word list must have exactly 2048 entries");
        let index = words.iter().enumerate().map(|(i, &w)| (w, i as u16)).collect();
        WordList { words, index }
    }

    /// The index of `word` in the list, or `None` if it isn't present.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// The word at `index` (0..2048).
    pub fn word_at(&self, index: u16) -> &'static str {
        self.words[index as usize]
    }
}

impl Default for WordList {
    /// The embedded BIP39 English list.
    fn default() -> Self {
        WordList::new(ENGLISH.lines().collect())
    }
}
