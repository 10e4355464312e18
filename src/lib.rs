pub mod config;
pub mod core;
pub mod detection;
pub mod transform;

pub use crate::core::converter::{convert, ConversionMode, ParseModeError};
pub use crate::detection::{detect_script, Script};
