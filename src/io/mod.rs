pub mod catalog_io;
pub mod state;
