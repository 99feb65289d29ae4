pub(crate) mod scoring;

pub mod geo;

pub use geo::*;
