pub mod export;
pub mod facets;
pub mod summary;
