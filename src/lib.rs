pub mod theme;

pub mod surface;

pub mod store;

pub mod persistence;

pub mod builder;

mod config;
pub use config::*;

mod init;
pub use init::*;
