//! Transliteration core: alphabet tables, character classification and the
//! two conversion passes

pub mod alphabet;
pub mod classifier;
pub mod converter;
pub mod cyr_to_lat;
pub mod lat_to_cyr;
