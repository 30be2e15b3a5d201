// src/api/handlers/mod.rs
mod evaluate;
mod health;
mod preflight;
mod questions;

pub use evaluate::evaluate;
pub use health::health_check;
pub use preflight::{method_not_allowed, preflight};
pub use questions::get_questions;
