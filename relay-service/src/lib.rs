//! Relay between the Kindred writing UI and the Gemini generation API.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
