use regex::Match;
use tracing::{debug, trace};

use crate::{errors::errors::Error, Position, Span, MK_TOKEN};

use super::{
    grammar::{RuleAction, GRAMMAR},
    tokens::{Token, TokenKind},
};

/// Output of [`scan`]: emitted tokens in source order and the lexical
/// diagnostics met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Error>,
}

impl Scan {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    diagnostics: Vec<Error>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            diagnostics: vec![],
            pos: 0,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_diagnostic(&mut self, error: Error) {
        trace!(%error, "lexical diagnostic");
        self.diagnostics.push(error);
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn apply(&mut self, action: RuleAction, matched: Match<'a>) {
        let span = Span {
            start: Position(matched.start()),
            end: Position(matched.end()),
        };

        match action {
            RuleAction::Emit(kind) => {
                self.push(MK_TOKEN!(kind, matched.as_str().to_string(), span));
            }
            RuleAction::Skip(kind) => {
                trace!(%kind, %span, "skipped");
            }
            RuleAction::Diagnose(fault) => {
                self.push_diagnostic(Error::new(fault.to_error_impl(matched.as_str()), span.start));
            }
        }

        self.pos = matched.end();
    }

    fn finish(self) -> Scan {
        Scan {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }
}

/// Splits `source` into classified tokens, dropping whitespace and comments.
///
/// Every match resumes where the previous one ended. Stray characters and
/// unterminated comments or literals never stop the scan, they are reported
/// in [`Scan::diagnostics`] instead.
pub fn scan(source: &str) -> Scan {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        // Searching from `pos` instead of slicing keeps `\b` aware of the
        // character before it.
        let Some(captures) = GRAMMAR.regex().captures_at(source, lex.pos) else {
            break;
        };
        let Some((rule, matched)) = GRAMMAR.classify(&captures) else {
            break;
        };

        lex.apply(rule.action, matched);
    }

    let scan = lex.finish();
    debug!(
        tokens = scan.tokens.len(),
        diagnostics = scan.diagnostics.len(),
        "scanned {} bytes",
        source.len()
    );

    scan
}
