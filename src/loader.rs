//! Lookup pipeline.
//!
//! Validated request → resolve source by name → async init → lookup.
//! Argument validation happens in `LookupRequest::new`, so by the time a
//! request reaches `run` nothing can fail before the registry is consulted.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::registry::SourceRegistry;
use crate::types::{LookupRequest, MonsterData};

/// Run one lookup end to end.
pub async fn run(
    registry: &SourceRegistry,
    config: &AppConfig,
    request: &LookupRequest,
) -> Result<MonsterData> {
    let source = registry.create(request.selector(), config).await?;
    info!(source = source.name(), key = request.key(), "Looking up monster");

    let monster = source
        .lookup(request.key())
        .await
        .with_context(|| format!("Lookup of '{}' via {} failed", request.key(), source.name()))?;

    info!(source = source.name(), name = %monster.name, "Lookup complete");
    Ok(monster)
}

/// Validate raw CLI arguments and run the lookup.
///
/// Missing or blank arguments fail here, before any source is built.
pub async fn run_args(
    registry: &SourceRegistry,
    config: &AppConfig,
    selector: Option<&str>,
    key: Option<&str>,
) -> Result<MonsterData> {
    let request = LookupRequest::new(selector, key)?;
    run(registry, config, &request).await
}
