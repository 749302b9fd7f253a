use log::debug;
use snafu::{OptionExt, ResultExt};

use expr_parser::Expr;

use crate::collect::{subexpressions, variables};
use crate::error::{EvalSnafu, Result, TooManyVariablesSnafu};
use crate::eval::{eval, Env};

/// All assignments of the given variables, one per row.
///
/// The first variable toggles slowest and the last one fastest, and within
/// each half the `true` block comes first: for `[p, q]` the rows are
/// `11`, `10`, `01`, `00`.
///
/// Fails if the number of rows does not fit in a `usize`.
pub fn assignments<'a>(vars: &'a [&'a str]) -> Result<impl Iterator<Item = Env<'a>> + 'a> {
    let n = vars.len();
    let num_rows = u32::try_from(n)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .context(TooManyVariablesSnafu { count: n })?;
    Ok((0..num_rows).map(move |row| {
        vars.iter()
            .enumerate()
            .map(|(i, &var)| (var, (row >> (n - 1 - i)) & 1 == 0))
            .collect()
    }))
}

/// Truth table of a formula: one column per variable followed by one column
/// per subexpression, one row per assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    headers: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Builds the table of an already flattened formula.
    pub fn of(expr: &Expr) -> Result<Self> {
        let vars = variables(expr);
        let subexprs = subexpressions(expr);
        Self::build(&vars, &subexprs)
    }

    /// Evaluates every variable column and then every expression in `exprs`
    /// under each assignment of `vars`.
    pub fn build(vars: &[&str], exprs: &[&Expr]) -> Result<Self> {
        let symbols: Vec<Expr> = vars.iter().map(|&v| Expr::symbol(v)).collect();
        let columns: Vec<&Expr> = symbols.iter().chain(exprs.iter().copied()).collect();
        debug!("Building table with {} variables and {} columns", vars.len(), columns.len());

        let headers = columns.iter().map(|c| c.to_string()).collect();
        let rows = assignments(vars)?
            .map(|env| columns.iter().map(|c| eval(c, &env)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()
            .context(EvalSnafu)?;

        Ok(Self { headers, rows })
    }

    /// Column labels in LaTeX math notation.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Rows with every value written as `"1"` or `"0"`.
    pub fn cells(&self) -> Vec<Vec<&'static str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&b| if b { "1" } else { "0" }).collect())
            .collect()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
