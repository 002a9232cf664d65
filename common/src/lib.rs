pub mod config;
pub mod env;

pub use config::*;
pub use env::*;
