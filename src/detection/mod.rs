//! Input script detection

mod script_detect;

pub use script_detect::{detect_script, Script};
