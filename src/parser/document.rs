//! YAML configuration document parsing.
//!
//! A document is the whole assembled configuration tree. The display
//! declarations live under the `hub75` key (a single mapping or a
//! sequence of mappings); every other domain is kept opaque, solely so
//! the phase-2 host-integration pass can detect sibling subsystems by
//! key presence.
//!
//! Schema-level problems — unknown keys, unrecognized enum values,
//! out-of-range scalars, malformed durations — are rejected here,
//! before the resolution engine ever runs.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::RawDisplayConfig;

/// Document key the display declarations live under.
pub const DISPLAY_DOMAIN: &str = "hub75";

/// A parsed configuration document: the schema-checked display
/// declarations plus the full tree for sibling-domain detection.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    tree: serde_yml::Value,
    displays: Vec<RawDisplayConfig>,
}

impl ConfigDocument {
    /// Parses a document from YAML text.
    pub fn parse(text: &str) -> Result<Self> {
        let tree: serde_yml::Value =
            serde_yml::from_str(text).context("Failed to parse configuration YAML")?;

        let section = tree.get(DISPLAY_DOMAIN).with_context(|| {
            format!("Configuration document has no '{DISPLAY_DOMAIN}' section")
        })?;

        // A single mapping and a one-element sequence are equivalent
        let entries: Vec<serde_yml::Value> = match section {
            serde_yml::Value::Sequence(seq) => seq.clone(),
            other => vec![other.clone()],
        };

        let mut displays = Vec::with_capacity(entries.len());
        let mut schema_errs = Vec::new();

        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_yml::from_value::<RawDisplayConfig>(entry) {
                Ok(raw) => {
                    for message in raw.schema_errors() {
                        schema_errs.push(format!("{DISPLAY_DOMAIN}[{idx}].{message}"));
                    }
                    displays.push(raw);
                }
                Err(err) => {
                    schema_errs.push(format!("{DISPLAY_DOMAIN}[{idx}]: {err}"));
                }
            }
        }

        if !schema_errs.is_empty() {
            anyhow::bail!(
                "Configuration schema errors:\n  {}",
                schema_errs.join("\n  ")
            );
        }

        Ok(Self { tree, displays })
    }

    /// Loads and parses a document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::parse(&text)
    }

    /// The schema-checked display declarations.
    #[must_use]
    pub fn displays(&self) -> &[RawDisplayConfig] {
        &self.displays
    }

    /// Read-only view of the full assembled tree.
    #[must_use]
    pub const fn tree(&self) -> &serde_yml::Value {
        &self.tree
    }
}
