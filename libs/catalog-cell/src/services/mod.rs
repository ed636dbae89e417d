pub mod availability;
pub mod catalog;

pub use catalog::CatalogService;
