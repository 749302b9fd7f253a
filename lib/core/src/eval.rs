use std::collections::HashMap;

use log::debug;
use snafu::OptionExt;
use tap::TapFallible;

use expr_parser::Expr;

use crate::error::{EvalError, UnboundVariableSnafu};

/// Truth values of the free variables of a formula.
pub type Env<'a> = HashMap<&'a str, bool>;

/// Evaluates the formula under the given assignment.
///
/// `Or` and `And` short-circuit, so an unbound variable behind a decided
/// argument goes unnoticed.
pub fn eval(expr: &Expr, env: &Env) -> Result<bool, EvalError> {
    let value = match expr {
        Expr::Symbol(name) => env.get(name.as_str()).copied().context(UnboundVariableSnafu { name }),
        Expr::Not { arg } => Ok(!eval(arg, env)?),
        Expr::Or { args } => {
            for arg in args {
                if eval(arg, env)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Expr::And { args } => {
            for arg in args {
                if !eval(arg, env)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expr::Implies { lhs, rhs } => Ok(!eval(lhs, env)? || eval(rhs, env)?),
        Expr::Equiv { lhs, rhs } => Ok(eval(lhs, env)? == eval(rhs, env)?),
        Expr::Paren { inner } => eval(inner, env),
    };
    value.tap_ok(|x| debug!("eval({expr}) = {x}"))
}
