//! Fixed colour vocabulary used by colour harmony.

/// Colours that pair with anything.
pub const NEUTRAL_COLORS: [&str; 10] = [
    "black", "white", "grey", "gray", "navy", "cream", "khaki", "brown", "tan", "charcoal",
];

/// Unordered colour pairs that clash.
pub const CLASHING_PAIRS: [(&str, &str); 4] = [
    ("red", "green"),
    ("red", "burgundy"),
    ("blue", "green"),
    ("brown", "black"),
];

/// Report whether `color` belongs to the neutral set.
///
/// Expects a lower-cased colour category.
#[must_use]
pub fn is_neutral_color(color: &str) -> bool {
    NEUTRAL_COLORS.contains(&color)
}

/// Report whether two colours form a clashing pair, in either order.
#[must_use]
pub fn colors_clash(a: &str, b: &str) -> bool {
    CLASHING_PAIRS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}
