//! Truth tables of propositional formulas.
//!
//! A line goes through [`process_line`]: it is tokenized and parsed by
//! `expr-parser`, flattened, and evaluated under every assignment of its
//! variables. The resulting [`TruthTable`] has one column per variable and
//! one per distinct subexpression, and can be typeset with
//! [`render::to_latex`].

use log::debug;
use snafu::ResultExt;

use expr_parser::{parse_expr_with, Options};

pub mod collect;
pub mod error;
pub mod eval;
pub mod flatten;
pub mod render;
pub mod table;

pub use collect::{subexpressions, variables};
pub use error::{Error, EvalError, Result};
pub use eval::{eval, Env};
pub use flatten::flatten;
pub use table::{assignments, TruthTable};

use crate::error::SyntaxSnafu;

pub fn process_line(line: &str, options: &Options) -> Result<TruthTable> {
    let expr = parse_expr_with(line, options).context(SyntaxSnafu)?;
    let expr = flatten(expr);
    debug!("flatten = {:?}", expr);
    TruthTable::of(&expr)
}

#[cfg(test)]
mod tests {
    use expr_parser::{ParseError, DEFAULT_OPTIONS};
    use test_log::test;

    use super::*;

    #[test]
    fn test_process_line() -> color_eyre::Result<()> {
        let table = process_line("p v p", &DEFAULT_OPTIONS)?;
        assert_eq!(table.headers(), [r"p", r"p \lor p"]);
        assert_eq!(table.num_rows(), 2);
        Ok(())
    }

    #[test]
    fn test_process_line_syntax_error() {
        let err = process_line("p ->", &DEFAULT_OPTIONS).unwrap_err();
        assert!(matches!(
            err,
            Error::Syntax {
                source: expr_parser::Error::Parse {
                    source: ParseError::UnexpectedToken { .. }
                }
            }
        ));
        assert_eq!(err.to_string(), "Parsing failed: Unexpected end of input at position 4");
    }

    #[test]
    fn test_process_line_too_many_variables() {
        // 64 distinct names: aa, ab, ..., hh.
        let names: Vec<String> = ('a'..='h')
            .flat_map(|x| ('a'..='h').map(move |y| format!("{x}{y}")))
            .collect();
        assert_eq!(names.len(), 64);
        let line = names.join(" ^ ");
        assert_eq!(
            process_line(&line, &DEFAULT_OPTIONS),
            Err(Error::TooManyVariables { count: 64 })
        );
        assert!(process_line(&names[..8].join(" ^ "), &DEFAULT_OPTIONS).is_ok());
    }
}
