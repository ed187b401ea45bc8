//! Monster data sources.
//!
//! Defines the `DataSource` trait and the concrete sources that wrap
//! individual remote APIs.

pub mod digimon;
pub mod pokemon;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::SourceSettings;
use crate::types::MonsterData;

/// Abstraction over remote monster databases.
///
/// Implementors are built through the async `init` factory and then asked
/// for a single record. Whatever the upstream returns, `lookup` must
/// normalise it into `MonsterData`.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Build a ready-to-use source.
    ///
    /// Sources that need asynchronous setup (token exchange, warm-up
    /// requests) do it here.
    async fn init(settings: SourceSettings) -> Result<Self>
    where
        Self: Sized;

    /// Look up a monster by name.
    async fn lookup(&self, name: &str) -> Result<MonsterData>;

    /// Registry key of this source, for logging and identification.
    fn name(&self) -> &str;
}
