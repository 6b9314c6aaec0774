pub mod index;
pub mod seed;

pub use index::{CatalogBuilder, CatalogIndex};
pub use seed::default_catalog;
