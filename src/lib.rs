pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod persistence;
pub mod recipe;
pub mod store;
pub mod ui;
