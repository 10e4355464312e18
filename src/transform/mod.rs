//! Simple stateless text transforms (casing, reversal, encodings)

pub mod case;
pub mod encode;
