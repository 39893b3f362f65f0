//! Joke Domain Module
//!
//! This module contains the joke-serving domain, including:
//! - The joke corpus (the capability provider backing the tools)
//! - The widget HTML template and its configuration
//! - The startup catalog of tools and resources
//! - Application state management

pub mod catalog;
pub mod corpus;
pub mod state;
pub mod widget;

// Re-export commonly used types for convenience
pub use corpus::JokeCorpus;
pub use state::{AppState, SharedState};
