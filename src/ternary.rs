/// A ternary expression.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads each one over five lines, and the edge rules
/// of the seam search read far better as a column of one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
