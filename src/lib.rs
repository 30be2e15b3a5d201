// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod prompt;
pub mod providers;
pub mod questions;
pub mod runner;
