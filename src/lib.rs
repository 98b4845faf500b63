pub mod cli;
pub mod io;
pub mod lightbox;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
