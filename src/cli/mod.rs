//! Command-line front end: argument parsing and one analysis run.

pub mod cli;
