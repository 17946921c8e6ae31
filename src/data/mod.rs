pub mod loader;
pub mod models;
pub mod tags;
