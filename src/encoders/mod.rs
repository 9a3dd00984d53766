pub mod algorithms;
pub mod readable;
pub mod stream;
