pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod selection;
