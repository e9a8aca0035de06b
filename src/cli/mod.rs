pub mod io;
pub mod menus;
pub mod output;

pub use menus::run_cli;
