//! Bundled portfolio content.
//!
//! The production [`ContentSource`]: fragments compiled into the binary,
//! one per informational command. The source still loads through the async
//! boundary so the controller's lazy-load path is exercised exactly as it
//! would be with a remote source.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod fragments;

use async_trait::async_trait;
use termfolio_core::{ContentError, ContentSource, ContentTable};

/// Content source backed by the compiled-in fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledContent;

impl BundledContent {
    /// The bundled source.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for BundledContent {
    async fn load(&self) -> Result<ContentTable, ContentError> {
        let mut table = ContentTable::new();
        for (command, fragment) in fragments::ALL {
            table.insert((*command).to_owned(), (*fragment).to_owned());
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use termfolio_core::{CommandKind, Registry};

    use super::*;

    #[tokio::test]
    async fn every_informational_command_has_a_fragment() {
        let table = BundledContent::new().load().await.unwrap();
        let registry = Registry::default();
        for name in registry.names() {
            if registry.kind_of(name) == Some(CommandKind::Info) {
                assert!(table.contains_key(name), "missing fragment for {name}");
            }
        }
    }

    #[tokio::test]
    async fn fragments_do_not_cover_builtin_commands() {
        let table = BundledContent::new().load().await.unwrap();
        for builtin in ["clear", "light", "dark"] {
            assert!(!table.contains_key(builtin));
        }
    }
}
