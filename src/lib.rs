pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::RosterEngine, pipeline::RosterPipeline};
pub use utils::error::{Result, RosterError};
