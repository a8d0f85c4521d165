//! Greedy longest-match tokenizer over the vocabulary table.
//!
//! Whitespace (including the full-width space) separates tokens but is not required:
//! "月曜詳細" and "月曜 詳細" tokenize the same way. Any text that is not a vocabulary
//! entry fails the whole message; nothing is skipped.

use super::vocabulary::{Token, Vocabulary};
use thiserror::Error;

/// Unrecognized text remained after greedy matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized text at byte {offset}: {residue:?}")]
pub struct UnrecognizedInput {
    /// Byte offset of the residue in the original input.
    pub offset: usize,
    pub residue: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'v> {
    vocab: &'v Vocabulary,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl<'v> Tokenizer<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Split `input` into vocabulary tokens. Empty or whitespace-only input yields an empty sequence.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, UnrecognizedInput> {
        let mut tokens = Vec::new();
        let mut rest = input.trim();

        while !rest.is_empty() {
            let Some(token) = self.vocab.longest_prefix(rest) else {
                return Err(UnrecognizedInput {
                    offset: input.len() - rest.len() - trailing_ws(input),
                    residue: rest.to_string(),
                });
            };
            tokens.push(*token);
            rest = rest[token.text.len()..].trim();
        }

        Ok(tokens)
    }
}

fn trailing_ws(input: &str) -> usize {
    input.len() - input.trim_end().len()
}
