mod decoder;
mod encoder;

pub use decoder::{StreamDecoder, Units};
pub use encoder::StreamEncoder;
