//! Error types shared by the scanner and its input collaborators.
//!
//! Lexical errors (stray characters, unterminated comments and literals) are
//! collected as diagnostics while scanning continues. Input errors (nothing
//! selected, unreadable file) are returned before the scanner is invoked.

pub mod errors;
