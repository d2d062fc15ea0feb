//! Request and response shapes for the relay endpoint.

pub mod generation;

pub use generation::{GenerationRequest, GenerationResult};
