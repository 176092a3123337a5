//! Asynchronous content-source boundary.
//!
//! Informational command bodies live outside the core. The controller only
//! requires that the source be loadable on demand and readable as a
//! name-to-fragment lookup; production bundles the fragments, tests inject
//! fakes for deterministic load outcomes.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Loaded content: command name to pre-rendered fragment text.
pub type ContentTable = HashMap<String, String>;

/// Failure to load the content source.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The source could not be loaded; the next informational command
    /// retries.
    #[error("content source unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause, surfaced only in diagnostics.
        reason: String,
    },
}

/// A lazily loadable mapping from command name to content fragment.
///
/// `load` is invoked at most once per attempt by the runtime, on the first
/// informational command; the controller caches the table on success and
/// answers later commands from memory.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load the full content table.
    async fn load(&self) -> Result<ContentTable, ContentError>;
}
