pub mod app;
pub mod cli;
pub mod config;
pub mod headless;
pub mod sweep;
pub mod ui;
