pub mod ad;
pub mod request;

pub use ad::{Ad, Category};
pub use request::{AdRequest, AdResponse, SelectionPath};
