//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a grammar rule

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Constant, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a grammar rule from a capture-group name, a regex fragment and
/// the action taken when that fragment wins.
///
/// # Example
///
/// ```ignore
/// MK_RULE!("identifier", "[a-zA-Z_][a-zA-Z0-9_]*", RuleAction::Emit(TokenKind::Identifier))
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($name:literal, $pattern:expr, $action:expr) => {
        Rule {
            name: $name,
            pattern: String::from($pattern),
            action: $action,
        }
    };
}
