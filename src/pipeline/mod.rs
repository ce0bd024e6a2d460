//! Detection pipeline

pub mod orchestrator;

pub use orchestrator::{detect, run};
