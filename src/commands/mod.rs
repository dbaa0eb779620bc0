pub mod config;
pub mod trail;

pub use trail::{OutputFormat, TrailOptions};
