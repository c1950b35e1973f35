//! Index label arithmetic for array listings.
//!
//! Every element of an array gets a `N) ` label. Labels at one level are
//! right-aligned to the widest index of that level, and a nested array's
//! labels start where its parent's label ended:
//!
//! ```text
//!  1) "a"
//!  2) 1) "b"
//!     2) "c"
//!  ...
//! 10) "z"
//! ```
//!
//! The first element of a nested array shares its parent's line, so it
//! needs no indentation of its own; every later element is indented by the
//! full width of the enclosing labels (`depth`).

/// Text that follows the index in every label.
pub const LABEL_SUFFIX: &str = ") ";

/// Number of decimal digits in `n`.
pub fn digit_width(n: usize) -> usize {
    let mut n = n;
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Spaces before the label of element `index` (1-based) of a `count`
/// element array whose enclosing labels are `depth` columns wide.
pub fn label_padding(depth: usize, count: usize, index: usize) -> usize {
    debug_assert!((1..=count).contains(&index));
    let indent = if index == 1 { 0 } else { depth };
    indent + digit_width(count).saturating_sub(digit_width(index))
}

/// The full label, padding included.
pub fn label(depth: usize, count: usize, index: usize) -> String {
    format!(
        "{:pad$}{}{}",
        "",
        index,
        LABEL_SUFFIX,
        pad = label_padding(depth, count, index)
    )
}

/// Column at which the elements of a `count` element array start, which
/// is where the labels of any array nested inside them are anchored.
pub fn child_depth(depth: usize, count: usize) -> usize {
    depth + digit_width(count) + LABEL_SUFFIX.len()
}
