//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use ascbin::prelude::*;
//!
//! let registry = CharsetRegistry::load_default().unwrap();
//! let charset = registry.build(registry.default_name()).unwrap();
//! let encoded = encode_readable("hello", &charset).unwrap();
//! assert_eq!(decode_readable(&encoded, &charset), "hello");
//! ```

pub use crate::{
    // Tables
    Charset,
    CharsetRegistry,
    SharedCharset,

    // Errors
    CodecError,
    ConfigError,

    // Stream codec
    StreamDecoder,
    StreamEncoder,

    configure_charset,
    decode,
    decode_readable,
    encode,
    encode_readable,
};
