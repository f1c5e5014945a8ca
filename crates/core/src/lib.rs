pub mod component;
pub mod config;
pub mod error;

pub use component::ComponentId;
pub use config::Config;
pub use error::*;
