use itertools::Itertools;

use crate::table::TruthTable;

/// Typesets the table as a booktabs `tabular`, each header in inline math.
///
/// ```text
/// \begin{tabular}{ccc}\toprule
/// \(p\) & \(q\) & \(p \rightarrow q\)\\\midrule
/// 1 & 1 & 1\\
/// ...
/// 0 & 0 & 1\\\bottomrule
/// \end{tabular}
/// ```
pub fn to_latex(table: &TruthTable) -> String {
    let header = table.headers().iter().map(|h| format!(r"\({h}\)")).join(" & ");
    let body = table.cells().iter().map(|row| row.join(" & ")).join("\\\\\n");

    format!(
        "\\begin{{tabular}}{{{}}}\\toprule\n{}\\\\\\midrule\n{}\\\\\\bottomrule\n\\end{{tabular}}",
        "c".repeat(table.num_columns()),
        header,
        body,
    )
}
