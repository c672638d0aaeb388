//! A collection of constants.

/// Converted values are printed with two decimal places.
///
/// 31.999 becomes 32.00
pub const DECIMAL_PRECISION: usize = 2;

/// The reference table and the graph round to the first decimal place.
pub const TABLE_PRECISION: usize = 1;

/// Results closer to zero than this are printed as `0.00`, never `-0.00`.
pub const ZERO_SNAP: f64 = 0.005;

/// Characters that split an array line when `--in-sep` is absent
pub const DEFAULT_INPUT_SEPARATORS: &str = " \t\n";

/// Width of one value column in the reference table
pub const TABLE_COLUMN_WIDTH: usize = 13;

/// Longest bar the graph will draw, in characters
pub const GRAPH_MAX_BAR: usize = 60;
