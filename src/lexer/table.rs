use indexmap::IndexMap;
use tracing::debug;

use crate::errors::errors::Error;

use super::{
    lexer::{scan, Scan},
    tokens::{Token, TokenKind},
};

/// Distinct token texts of one kind with their occurrence counts, in the
/// order each text was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    entries: IndexMap<String, usize>,
}

impl TokenCounts {
    pub fn record(&mut self, text: &str) {
        *self.entries.entry(text.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, text: &str) -> usize {
        self.entries.get(text).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(text, count)| (text.as_str(), *count))
    }

    /// Number of distinct texts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> usize {
        self.entries.values().sum()
    }
}

/// Per-kind occurrence counts of a whole source.
///
/// Every emitted kind owns a slot, so a kind with no tokens is present and
/// empty rather than missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    counts: [TokenCounts; 6],
    diagnostics: Vec<Error>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one token. Whitespace and comments have no slot and are ignored.
    pub fn record(&mut self, token: &Token) {
        if let Some(slot) = token.kind.index() {
            self.counts[slot].record(&token.value);
        }
    }

    pub fn get(&self, kind: TokenKind) -> Option<&TokenCounts> {
        kind.index().map(|slot| &self.counts[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, &TokenCounts)> {
        TokenKind::EMITTED.iter().copied().zip(self.counts.iter())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(TokenCounts::total).sum()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }
}

impl From<Scan> for TokenTable {
    fn from(scan: Scan) -> Self {
        let mut table = TokenTable::new();

        for token in &scan.tokens {
            table.record(token);
        }
        table.diagnostics = scan.diagnostics;

        table
    }
}

/// Scans `source` and tallies every emitted token by kind and text.
pub fn tokenize(source: &str) -> TokenTable {
    let table = TokenTable::from(scan(source));

    debug!(
        total = table.total(),
        diagnostics = table.diagnostics().len(),
        "tokenized source"
    );

    table
}
