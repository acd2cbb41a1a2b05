pub mod canvas;
pub mod client;
pub mod config;
pub mod geometry;
pub mod menu;
pub mod server;
pub mod store;
