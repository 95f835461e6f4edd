pub mod agent;
pub mod cli;
pub mod client;
pub mod config;
