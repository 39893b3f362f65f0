//! Application State
//!
//! The state is assembled once at startup: the joke corpus plus the
//! registry built from it. Nothing in it is mutated while the server
//! handles traffic, so concurrent dispatches share it without locking.

use std::sync::Arc;

use super::catalog::build_registry;
use super::corpus::JokeCorpus;
use super::widget::WidgetConfig;
use crate::mcp::registry::{Registry, RegistryError};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Read-only state shared by all in-flight requests.
pub struct AppState {
    /// The capability provider backing every tool and resource.
    pub corpus: JokeCorpus,

    /// Fixed catalog of tools and resources.
    pub registry: Registry,
}

impl AppState {
    /// Builds the state from the built-in corpus and default widget
    /// configuration.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_corpus(JokeCorpus::builtin(), WidgetConfig::default())
    }

    /// Builds the state from an explicit corpus and widget configuration.
    pub fn with_corpus(corpus: JokeCorpus, widget: WidgetConfig) -> Result<Self, RegistryError> {
        let registry = build_registry(&corpus, &widget)?;
        Ok(Self { corpus, registry })
    }
}
