//! Aggregates the “business logic” layer.

pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod number;
pub mod scale;
pub mod stream;

// re-export frequently-used items for convenience
pub use config::{RunConfig, RunConfigBuilder};
pub use constants::{
    DECIMAL_PRECISION, DEFAULT_INPUT_SEPARATORS, GRAPH_MAX_BAR, TABLE_COLUMN_WIDTH,
    TABLE_PRECISION, ZERO_SNAP,
};
pub use convert::{convert, convert_scales, snap_to_zero};
pub use error::{ConfigError, ConvertError, GradusError, NumberError, UnknownScale};
pub use number::parse_number;
pub use scale::Scale;
pub use stream::{Emitter, process_array, process_item, process_lines, split_tokens};
