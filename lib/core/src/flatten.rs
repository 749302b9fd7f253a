use expr_parser::Expr;

/// Merges nested chains of the same associative connective into one n-ary node.
///
/// `p v (q v r)` as parsed, `Or(p, Or(q, r))`, becomes `Or(p, q, r)`. A
/// parenthesized chain is a different node and is not merged into its parent.
pub fn flatten(expr: Expr) -> Expr {
    match expr {
        Expr::Symbol(_) => expr,
        Expr::Not { arg } => Expr::not(flatten(*arg)),
        Expr::Paren { inner } => Expr::paren(flatten(*inner)),
        Expr::Implies { lhs, rhs } => Expr::implies(flatten(*lhs), flatten(*rhs)),
        Expr::Equiv { lhs, rhs } => Expr::equiv(flatten(*lhs), flatten(*rhs)),
        Expr::Or { args } => Expr::Or {
            args: consolidate_or(args),
        },
        Expr::And { args } => Expr::And {
            args: consolidate_and(args),
        },
    }
}

// Consolidate: OR(x1,OR(x2,x3)) |- OR(x1,x2,x3)
fn consolidate_or(args: Vec<Expr>) -> Vec<Expr> {
    let mut new_args = Vec::with_capacity(args.len());
    for arg in args {
        match flatten(arg) {
            Expr::Or { args: sub_args } => new_args.extend(sub_args),
            arg => new_args.push(arg),
        }
    }
    new_args
}

// Consolidate: AND(x1,AND(x2,x3)) |- AND(x1,x2,x3)
fn consolidate_and(args: Vec<Expr>) -> Vec<Expr> {
    let mut new_args = Vec::with_capacity(args.len());
    for arg in args {
        match flatten(arg) {
            Expr::And { args: sub_args } => new_args.extend(sub_args),
            arg => new_args.push(arg),
        }
    }
    new_args
}

/// Checks that no `Or`/`And` node has a direct child of the same kind.
pub fn is_flat(expr: &Expr) -> bool {
    let merged_child = match expr {
        Expr::Or { args } => args.iter().any(|a| matches!(a, Expr::Or { .. })),
        Expr::And { args } => args.iter().any(|a| matches!(a, Expr::And { .. })),
        _ => false,
    };
    !merged_child && expr.children().into_iter().all(is_flat)
}

#[cfg(test)]
mod tests {
    use expr_parser::parse_expr;
    use test_log::test;

    use super::*;

    fn flat(s: &str) -> Expr {
        flatten(parse_expr(s).unwrap())
    }

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn test_flatten_or_chain() {
        assert_eq!(
            flat("p v q v r v s"),
            Expr::Or {
                args: vec![sym("p"), sym("q"), sym("r"), sym("s")]
            }
        );
    }

    #[test]
    fn test_flatten_keeps_duplicates() {
        assert_eq!(
            flat("p v p"),
            Expr::Or {
                args: vec![sym("p"), sym("p")]
            }
        );
    }

    #[test]
    fn test_flatten_mixed_chain() {
        // Parsed as And(p, Or(q, And(r, s))): nothing to merge.
        let e = flat("p ^ q v r ^ s");
        assert_eq!(e, sym("p") & (sym("q") | (sym("r") & sym("s"))));
    }

    #[test]
    fn test_flatten_does_not_merge_through_paren() {
        let e = flat("p v (q v r)");
        assert_eq!(
            e,
            Expr::Or {
                args: vec![sym("p"), Expr::paren(sym("q") | sym("r"))]
            }
        );
    }

    #[test]
    fn test_flatten_reaches_under_every_node() {
        let e = flat("!(p ^ q ^ r) -> (p v q v r)");
        assert_eq!(
            e,
            Expr::implies(
                !Expr::paren(Expr::And {
                    args: vec![sym("p"), sym("q"), sym("r")]
                }),
                Expr::paren(Expr::Or {
                    args: vec![sym("p"), sym("q"), sym("r")]
                }),
            )
        );
        assert!(is_flat(&e));
    }

    #[test]
    fn test_is_flat() {
        assert!(!is_flat(&parse_expr("p v q v r").unwrap()));
        assert!(is_flat(&parse_expr("p v q").unwrap()));
        assert!(!is_flat(&parse_expr("!(p ^ q ^ r)").unwrap()));
    }
}
