pub mod components;
pub mod config;
pub mod registry;
pub mod system;
