//! Truth tables for propositional formulas.
//!
//! ```
//! use truth_table::core::process_line;
//! use truth_table::core::render::to_latex;
//! use truth_table::parser::DEFAULT_OPTIONS;
//!
//! let table = process_line("p -> q", &DEFAULT_OPTIONS).unwrap();
//! assert_eq!(table.headers(), ["p", "q", r"p \rightarrow q"]);
//! assert!(to_latex(&table).starts_with(r"\begin{tabular}{ccc}"));
//! ```

pub use expr_parser as parser;
pub use truth_table_core as core;
