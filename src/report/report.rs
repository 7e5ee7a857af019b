use std::io::{self, Write};

use crate::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::{lexer::Scan, table::TokenTable},
};

/// Consumer of a finished [`TokenTable`].
pub trait Reporter {
    fn report(&mut self, table: &TokenTable) -> io::Result<()>;
}

/// Writes the count table in the console format of [`format_table`].
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, table: &TokenTable) -> io::Result<()> {
        self.out.write_all(format_table(table).as_bytes())?;
        self.out.flush()
    }
}

/// One `LABEL: text[count], ...` line per non-empty kind, then the grand total.
pub fn format_table(table: &TokenTable) -> String {
    let mut out = String::new();

    for (kind, counts) in table.iter() {
        if counts.is_empty() {
            continue;
        }

        let formatted = counts
            .iter()
            .map(|(text, count)| format!("{}[{}]", text, count))
            .collect::<Vec<String>>()
            .join(", ");
        out.push_str(&format!("{}: {}\n", kind, formatted));
    }

    out.push_str(&format!("\nTotal tokens found: {}\n", table.total()));
    out
}

pub fn format_tokens(scan: &Scan) -> String {
    let mut out = String::new();

    for token in &scan.tokens {
        out.push_str(&format!("{}\n", token));
    }

    out
}

pub fn render_diagnostic(error: &Error, source: &str, name: &str) -> String {
    /*
        Error: name (tip)
        -> file.c
          |
        3 | int x = @;
          | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", name));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.len() - trimmed.len();

    (trimmed, removed)
}
