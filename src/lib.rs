pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod recipe;
pub mod server;

pub use error::{Error, Result};
