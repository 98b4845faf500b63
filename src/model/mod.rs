pub mod catalog;
pub mod config;
pub mod project;
pub mod site;

#[cfg(test)]
pub mod fixtures;

pub use catalog::*;
pub use config::*;
pub use project::*;
pub use site::*;
