//! Configuration constants for rosterdb.

/// Number of decimal places kept when reporting averages.
///
/// `DirectoryStats::mean_age` is rounded to this precision, so ages
/// `[18, 22, 21]` report `20.33`.
pub const STATS_DECIMALS: i32 = 2;

/// Default location of the JSON snapshot file, relative to the working
/// directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/students.json";

/// Multiplier of the worst-case AVL height bound.
///
/// An AVL tree with `n` nodes never exceeds
/// `1.4405 × log2(n + 2) − 0.3277` levels (Knuth, TAOCP vol. 3).
pub const AVL_HEIGHT_FACTOR: f64 = 1.4405;

/// Upper bound on the height of any AVL tree holding `n` nodes.
///
/// The additive constant is dropped, so the bound is loose for tiny `n`:
/// an empty tree has height 0 but `max_avl_height(0)` is 1.
///
/// # Example
/// ```
/// use rosterdb::common::config::max_avl_height;
///
/// assert_eq!(max_avl_height(0), 1);
/// assert!(max_avl_height(7) >= 3);
/// ```
pub fn max_avl_height(n: usize) -> usize {
    (AVL_HEIGHT_FACTOR * ((n + 2) as f64).log2()).floor() as usize
}
