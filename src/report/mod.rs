//! Collaborators around the tokenizer: where source text comes from and how
//! results are printed.

pub mod report;
pub mod source;
