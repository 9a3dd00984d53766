pub mod config;
pub mod decode;
pub mod demo;
pub mod encode;
