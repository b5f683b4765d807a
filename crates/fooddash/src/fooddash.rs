//! Main fooddash struct and public API.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::dataset::DeliveryDataset;
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::prepare::{PrepareConfig, PrepareReport, Prepared, Preparer};

/// Configuration for loading a delivery export.
#[derive(Debug, Clone, Default)]
pub struct FooddashConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Preparation pipeline configuration.
    pub prepare: PrepareConfig,
}

/// Result of loading and preparing a delivery file.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// What the preparer kept and dropped.
    pub report: PrepareReport,
    /// The prepared table.
    pub dataset: DeliveryDataset,
}

/// Entry point: parse a delivery export and prepare it.
pub struct Fooddash {
    parser: Parser,
    preparer: Preparer,
}

impl Fooddash {
    /// Create an instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(FooddashConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: FooddashConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            preparer: Preparer::with_config(config.prepare),
        }
    }

    /// Parse and prepare a file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadResult> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;
        info!(file = %source.file, hash = %source.hash, "loaded delivery export");

        let prepared = self.preparer.prepare(&table)?;

        Ok(LoadResult {
            source,
            report: prepared.report,
            dataset: prepared.dataset,
        })
    }

    /// Parse and prepare from any reader; no source metadata is produced.
    pub fn load_reader(&self, reader: impl Read) -> Result<Prepared> {
        let table = self.parser.parse_reader(reader)?;
        self.preparer.prepare(&table)
    }
}

impl Default for Fooddash {
    fn default() -> Self {
        Self::new()
    }
}
