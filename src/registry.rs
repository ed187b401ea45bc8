//! Name-keyed table of data source factories.
//!
//! The CLI selects a source by name at runtime. Instead of loading code on
//! demand, every source is registered up front with an async factory and
//! its default connection settings; `create` looks the name up, merges any
//! config overrides and awaits the factory.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::{AppConfig, SourceSettings};
use crate::sources::digimon::{self, DigimonSource};
use crate::sources::pokemon::{self, PokemonSource};
use crate::sources::DataSource;
use crate::types::LookupError;

/// Future returned by a source factory.
pub type SourceFuture = BoxFuture<'static, Result<Box<dyn DataSource>>>;

/// Builds an initialised source from resolved settings.
pub type SourceFactory = Arc<dyn Fn(SourceSettings) -> SourceFuture + Send + Sync>;

struct RegistryEntry {
    factory: SourceFactory,
    defaults: SourceSettings,
}

/// Registered data sources, keyed by lowercase name.
#[derive(Default)]
pub struct SourceRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl SourceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in source.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register::<PokemonSource>(pokemon::SOURCE_NAME, PokemonSource::default_settings())
            .register::<DigimonSource>(digimon::SOURCE_NAME, DigimonSource::default_settings());
        registry
    }

    /// Register a `DataSource` type under `name`, built through its `init`.
    pub fn register<S>(&mut self, name: &str, defaults: SourceSettings) -> &mut Self
    where
        S: DataSource + 'static,
    {
        self.register_factory(name, defaults, |settings| {
            async move {
                let source = S::init(settings).await?;
                Ok(Box::new(source) as Box<dyn DataSource>)
            }
            .boxed()
        })
    }

    /// Register an arbitrary factory under `name`. Replaces any previous
    /// entry with the same name.
    pub fn register_factory<F>(&mut self, name: &str, defaults: SourceSettings, factory: F) -> &mut Self
    where
        F: Fn(SourceSettings) -> SourceFuture + Send + Sync + 'static,
    {
        self.entries.insert(
            name.trim().to_lowercase(),
            RegistryEntry {
                factory: Arc::new(factory),
                defaults,
            },
        );
        self
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.trim().to_lowercase())
    }

    /// Resolve `name` and build an initialised source.
    ///
    /// Fails with `LookupError::UnknownSource` before running any factory
    /// when the name is not registered.
    pub async fn create(&self, name: &str, config: &AppConfig) -> Result<Box<dyn DataSource>> {
        let key = name.trim().to_lowercase();
        let entry = self.entries.get(&key).ok_or_else(|| LookupError::UnknownSource {
            requested: name.to_string(),
            available: self.names(),
        })?;

        let settings = entry.defaults.clone().merged(config.source(&key));
        debug!(source = %key, base_url = %settings.base_url, "Initialising data source");

        (entry.factory)(settings)
            .await
            .with_context(|| format!("Failed to initialise data source '{key}'"))
    }
}
