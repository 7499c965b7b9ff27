pub mod catalog;
pub mod cli;
pub mod error;
pub mod explorer;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{ExplorerError, Result};
pub use explorer::RegionExplorer;
