//! Input generators shared by the benchmarks.

/// Builds `1 + (2 * (3 - (... x)))` nested `depth` levels deep.
pub fn nested_expression(depth: usize) -> String {
    let mut expr = String::from("x");
    for i in (1..=depth).rev() {
        let digit = i % 9 + 1;
        let op = ['+', '-', '*', '/'][i % 4];
        expr = format!("{digit} {op} ({expr})");
    }
    expr
}

/// A long flat chain of single-digit operands.
pub fn flat_expression(len: usize) -> String {
    (0..len)
        .map(|i| ((i % 9) + 1).to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}
