pub mod backend;
pub mod builder;
pub mod cli;
pub mod config;
pub mod player;
pub mod runtime;
