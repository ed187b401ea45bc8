//! Pokémon data source.
//!
//! API: `https://pokeapi.co/api/v2/pokemon/{name}`
//! Auth: None required.
//! PokéAPI only matches lowercase names, so keys are lowercased first.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::DataSource;
use crate::config::SourceSettings;
use crate::types::{LookupError, MonsterData};

pub const SOURCE_NAME: &str = "pokemon";
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

// ---------------------------------------------------------------------------
// PokéAPI response types (only the fields we map)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    sprites: PokemonSprites,
}

#[derive(Debug, Deserialize)]
struct PokemonSprites {
    #[serde(default)]
    front_default: Option<String>,
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

pub struct PokemonSource {
    http: Client,
    base_url: String,
}

impl PokemonSource {
    pub fn default_settings() -> SourceSettings {
        SourceSettings::new(DEFAULT_BASE_URL)
    }

    fn lookup_url(&self, name: &str) -> String {
        format!(
            "{}/pokemon/{}",
            self.base_url,
            urlencoding::encode(&name.to_lowercase())
        )
    }

    fn normalise(resp: PokemonResponse, requested: &str) -> Result<MonsterData> {
        match resp.sprites.front_default {
            Some(url) if !url.is_empty() => Ok(MonsterData::new(resp.name, url)),
            _ => Err(LookupError::NotFound {
                source_name: SOURCE_NAME.into(),
                name: requested.into(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl DataSource for PokemonSource {
    async fn init(settings: SourceSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .build()
            .context("Failed to build PokéAPI HTTP client")?;
        Ok(Self {
            http,
            base_url: settings.base_url,
        })
    }

    async fn lookup(&self, name: &str) -> Result<MonsterData> {
        let url = self.lookup_url(name);
        debug!(%url, "Querying PokéAPI");

        let resp = self.http.get(&url).send().await
            .context("PokéAPI request failed")?;

        match resp.status() {
            StatusCode::NOT_FOUND => {
                return Err(LookupError::NotFound {
                    source_name: SOURCE_NAME.into(),
                    name: name.into(),
                }
                .into())
            }
            status if !status.is_success() => {
                return Err(LookupError::Upstream {
                    source_name: SOURCE_NAME.into(),
                    status: status.as_u16(),
                }
                .into())
            }
            _ => {}
        }

        let data: PokemonResponse = resp.json().await
            .context("Failed to parse PokéAPI response")?;

        Self::normalise(data, name)
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
