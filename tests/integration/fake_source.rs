//! In-memory data sources for deterministic testing.
//!
//! `FakeSource` answers from a fixed table and counts how often it was
//! built and queried, so tests can prove that no work happened.

use anyhow::Result;
use async_trait::async_trait;
use futures::FutureExt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use monsterdex::config::SourceSettings;
use monsterdex::registry::SourceRegistry;
use monsterdex::sources::DataSource;
use monsterdex::types::{LookupError, MonsterData};

/// Shared call counters for one fake source.
#[derive(Debug, Default)]
pub struct Calls {
    pub inits: AtomicUsize,
    pub lookups: AtomicUsize,
}

impl Calls {
    pub fn inits(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

pub struct FakeSource {
    name: String,
    records: HashMap<String, MonsterData>,
    calls: Arc<Calls>,
}

impl FakeSource {
    /// Register a fake under `name` answering from `records`.
    pub fn register(
        registry: &mut SourceRegistry,
        name: &'static str,
        records: Vec<(&str, MonsterData)>,
    ) -> Arc<Calls> {
        let calls = Arc::new(Calls::default());
        let records: HashMap<String, MonsterData> = records
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let factory_calls = calls.clone();
        registry.register_factory(name, SourceSettings::new("memory://"), move |_settings| {
            let source = FakeSource {
                name: name.to_string(),
                records: records.clone(),
                calls: factory_calls.clone(),
            };
            async move {
                source.calls.inits.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(source) as Box<dyn DataSource>)
            }
            .boxed()
        });
        calls
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn init(_settings: SourceSettings) -> Result<Self> {
        Ok(Self {
            name: "fake".into(),
            records: HashMap::new(),
            calls: Arc::new(Calls::default()),
        })
    }

    async fn lookup(&self, name: &str) -> Result<MonsterData> {
        self.calls.lookups.fetch_add(1, Ordering::SeqCst);
        self.records.get(name).cloned().ok_or_else(|| {
            LookupError::NotFound {
                source_name: self.name.clone(),
                name: name.into(),
            }
            .into()
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monsterdex::config::AppConfig;

    #[tokio::test]
    async fn test_fake_counts_calls() {
        let mut registry = SourceRegistry::new();
        let calls = FakeSource::register(
            &mut registry,
            "fake",
            vec![("slime", MonsterData::new("Slime", "memory://slime.png"))],
        );

        let source = registry.create("fake", &AppConfig::default()).await.unwrap();
        let slime = source.lookup("slime").await.unwrap();

        assert_eq!(slime.name, "Slime");
        assert_eq!(calls.inits(), 1);
        assert_eq!(calls.lookups(), 1);
    }

    #[tokio::test]
    async fn test_fake_init_is_standalone() {
        let source = FakeSource::init(SourceSettings::new("memory://")).await.unwrap();
        assert_eq!(source.name(), "fake");
        assert!(source.lookup("anything").await.is_err());
    }
}
