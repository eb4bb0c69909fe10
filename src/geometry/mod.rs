pub mod curve;
pub mod profile;
