/*!
# CLI module
Command line interface functionality for levenshtein-dag.
*/

/// The main CLI module that contains the top-level CLI parser, help text, and shared cost options
pub mod core;
/// The align CLI subcommand
pub mod align;
/// The graph CLI subcommand
pub mod graph;
