pub mod config;
pub mod transport;
pub mod views;
