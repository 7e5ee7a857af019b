use lazy_static::lazy_static;
use regex::{Captures, Match, Regex};

use crate::{errors::errors::ErrorImpl, MK_RULE};

use super::tokens::{TokenKind, KEYWORDS, OPERATORS, PUNCTUATORS};

lazy_static! {
    /// The one grammar shared by every scan. Built on first use, read-only after.
    pub static ref GRAMMAR: Grammar = Grammar::new();
}

/// Lexical problems the grammar recognises instead of letting input fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    UnterminatedComment,
    UnterminatedLiteral,
    Unrecognised,
}

impl Fault {
    pub fn to_error_impl(self, text: &str) -> ErrorImpl {
        match self {
            Fault::UnterminatedComment => ErrorImpl::UnterminatedComment,
            Fault::UnterminatedLiteral => ErrorImpl::UnterminatedLiteral,
            Fault::Unrecognised => ErrorImpl::UnrecognisedCharacter {
                character: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Emit(TokenKind),
    Skip(TokenKind),
    Diagnose(Fault),
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: String,
    pub action: RuleAction,
}

/// Ordered rules compiled into a single alternation of named groups.
///
/// The regex engine picks the leftmost match and, at that position, the first
/// alternative that matches, so rule order is priority order. The last rule
/// accepts any character, which makes every position of the input matchable.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
    regex: Regex,
}

impl Grammar {
    fn new() -> Grammar {
        let rules = rules();
        let alternation = rules
            .iter()
            .map(|rule| format!("(?P<{}>{})", rule.name, rule.pattern))
            .collect::<Vec<String>>()
            .join("|");

        Grammar {
            regex: Regex::new(&alternation).unwrap(),
            rules,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns the rule whose group produced `captures`, with the text it matched.
    pub fn classify<'h>(&self, captures: &Captures<'h>) -> Option<(&Rule, Match<'h>)> {
        self.rules
            .iter()
            .find_map(|rule| captures.name(rule.name).map(|matched| (rule, matched)))
    }
}

fn rules() -> Vec<Rule> {
    vec![
        MK_RULE!(
            "whitespace",
            r"[ \t\n\r\x0B\x0C]+",
            RuleAction::Skip(TokenKind::Whitespace)
        ),
        MK_RULE!(
            "comment",
            r"//.*|/\*[^*]*\*+(?:[^/*][^*]*\*+)*/",
            RuleAction::Skip(TokenKind::Comment)
        ),
        MK_RULE!(
            "unterminated_comment",
            r"/\*(?s:.*)",
            RuleAction::Diagnose(Fault::UnterminatedComment)
        ),
        MK_RULE!("keyword", keyword_pattern(), RuleAction::Emit(TokenKind::Keyword)),
        MK_RULE!(
            "identifier",
            r"[a-zA-Z_][a-zA-Z0-9_]*",
            RuleAction::Emit(TokenKind::Identifier)
        ),
        MK_RULE!("operator", operator_pattern(), RuleAction::Emit(TokenKind::Operator)),
        MK_RULE!(
            "constant",
            r"[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?",
            RuleAction::Emit(TokenKind::Constant)
        ),
        MK_RULE!(
            "literal",
            r#""[^"\\]*(?:\\(?s:.)[^"\\]*)*""#,
            RuleAction::Emit(TokenKind::Literal)
        ),
        MK_RULE!(
            "unterminated_literal",
            r#""(?s:.*)"#,
            RuleAction::Diagnose(Fault::UnterminatedLiteral)
        ),
        MK_RULE!(
            "punctuator",
            punctuator_pattern(),
            RuleAction::Emit(TokenKind::Punctuator)
        ),
        MK_RULE!("unrecognised", r"(?s:.)", RuleAction::Diagnose(Fault::Unrecognised)),
    ]
}

// Identifiers are ASCII, so the keyword boundary is too: `inté` starts
// with the keyword `int`.
fn keyword_pattern() -> String {
    format!(r"(?-u:\b)(?:{})(?-u:\b)", KEYWORDS.join("|"))
}

// Several operators are prefixes of others, so the longest spellings go first.
fn operator_pattern() -> String {
    let mut operators = OPERATORS.to_vec();
    operators.sort_by(|a, b| b.len().cmp(&a.len()));

    operators
        .iter()
        .map(|operator| regex::escape(operator))
        .collect::<Vec<String>>()
        .join("|")
}

fn punctuator_pattern() -> String {
    PUNCTUATORS
        .iter()
        .map(|punctuator| regex::escape(&punctuator.to_string()))
        .collect::<Vec<String>>()
        .join("|")
}
