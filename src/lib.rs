pub mod config;
pub mod cs;
pub mod error;

pub use cs::ecc;
pub use error::{Error, Result};
