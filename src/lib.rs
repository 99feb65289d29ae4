//! Ranked city-name suggestions over a GeoNames gazetteer dataset.

pub mod geonames;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::geonames::{Config, Geonames};
    pub use crate::repository::{City, CityQuery, Repository, Suggestion};
    pub use crate::shared::geo::Coordinate;
}
