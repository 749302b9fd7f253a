use itertools::Itertools;

use expr_parser::Expr;

/// Distinct symbol names of the formula, sorted.
pub fn variables(expr: &Expr) -> Vec<&str> {
    fn go<'a>(expr: &'a Expr, vars: &mut Vec<&'a str>) {
        match expr {
            Expr::Symbol(name) => vars.push(name),
            _ => {
                for child in expr.children() {
                    go(child, vars);
                }
            }
        }
    }

    let mut vars = Vec::new();
    go(expr, &mut vars);
    vars.into_iter().sorted().dedup().collect()
}

/// Subformulas that get their own column, children before parents.
///
/// Symbols and parentheses are skipped. Subformulas that print the same are
/// listed once, at their first position in post-order.
pub fn subexpressions(expr: &Expr) -> Vec<&Expr> {
    fn post_order<'a>(expr: &'a Expr, out: &mut Vec<&'a Expr>) {
        for child in expr.children() {
            post_order(child, out);
        }
        if !matches!(expr, Expr::Symbol(_) | Expr::Paren { .. }) {
            out.push(expr);
        }
    }

    let mut all = Vec::new();
    post_order(expr, &mut all);
    all.into_iter().unique_by(|e| e.to_string()).collect()
}
