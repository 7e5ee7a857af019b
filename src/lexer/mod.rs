//! Lexical analysis.
//!
//! This module turns source text into classified tokens. It handles:
//!
//! - The ordered grammar, compiled once into a single regex alternation
//! - Recognition of keywords, identifiers, operators, constants, literals and
//!   punctuators
//! - Skipping whitespace and comments
//! - Diagnostics for stray characters and unterminated comments or literals
//! - Per-kind occurrence counting

pub mod grammar;
pub mod lexer;
pub mod table;
pub mod tokens;
