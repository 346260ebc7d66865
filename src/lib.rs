pub mod config;
pub mod error;
pub mod inventory;
pub mod server;

pub use error::{Error, Result};
