pub mod errors;
pub mod unit;

// Re-export error types for public API
pub use errors::{CharsetNotFoundError, CodecError, ConfigError, find_closest_charset};
