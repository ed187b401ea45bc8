//! Digimon data source.
//!
//! API: `https://digimon-api.vercel.app/api/digimon/name/{name}`
//! Auth: None required.
//! The endpoint answers with a JSON array; the first entry is used.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::DataSource;
use crate::config::SourceSettings;
use crate::types::{LookupError, MonsterData};

pub const SOURCE_NAME: &str = "digimon";
pub const DEFAULT_BASE_URL: &str = "https://digimon-api.vercel.app/api";

#[derive(Debug, Deserialize)]
struct DigimonEntry {
    name: String,
    img: String,
}

pub struct DigimonSource {
    http: Client,
    base_url: String,
}

impl DigimonSource {
    pub fn default_settings() -> SourceSettings {
        SourceSettings::new(DEFAULT_BASE_URL)
    }

    fn lookup_url(&self, name: &str) -> String {
        format!("{}/digimon/name/{}", self.base_url, urlencoding::encode(name))
    }

    fn normalise(entries: Vec<DigimonEntry>, requested: &str) -> Result<MonsterData> {
        if entries.len() > 1 {
            warn!(count = entries.len(), name = requested, "Multiple Digimon matched, using the first");
        }
        entries
            .into_iter()
            .next()
            .map(|e| MonsterData::new(e.name, e.img))
            .ok_or_else(|| {
                LookupError::NotFound {
                    source_name: SOURCE_NAME.into(),
                    name: requested.into(),
                }
                .into()
            })
    }
}

#[async_trait]
impl DataSource for DigimonSource {
    async fn init(settings: SourceSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()
            .context("Failed to build Digimon API HTTP client")?;
        Ok(Self {
            http,
            base_url: settings.base_url,
        })
    }

    async fn lookup(&self, name: &str) -> Result<MonsterData> {
        let url = self.lookup_url(name);
        debug!(%url, "Querying Digimon API");

        let resp = self.http.get(&url).send().await
            .context("Digimon API request failed")?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                source_name: SOURCE_NAME.into(),
                name: name.into(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(LookupError::Upstream {
                source_name: SOURCE_NAME.into(),
                status: status.as_u16(),
            }
            .into());
        }

        let entries: Vec<DigimonEntry> = resp.json().await
            .context("Failed to parse Digimon API response")?;

        Self::normalise(entries, name)
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}
