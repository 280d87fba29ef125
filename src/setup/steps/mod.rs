//! Individual setup wizard steps

pub mod entries;
pub mod profile;
pub mod templates;
