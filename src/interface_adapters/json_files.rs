// File-backed adapters: every document is one pretty-printed JSON file.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::access::AccessTokens;
use crate::domain::defaults::default_catalog;
use crate::domain::entities::{Catalog, OrderBook};
use crate::domain::errors::StoreError;
use crate::domain::i18n::Translations;
use crate::domain::ports::{CatalogStore, OrderStore, TranslationSource};

pub const TOKENS_FILE: &str = "tokens.json";
pub const INGREDIENTS_FILE: &str = "ingredients.json";
pub const ORDERS_FILE: &str = "orders.json";
pub const TRANSLATIONS_FILE: &str = "translations.json";

/// Read and parse `path`; a missing file is `Ok(None)`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Replace `path` with `value`, going through a sibling temp file and a
/// rename so readers never observe a half-written document.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');

    // Each write gets its own temp file, so concurrent writers never share one.
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(format!(".{}.tmp", Uuid::new_v4().simple()));
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, text).await?;
    if let Err(err) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(err.into());
    }
    Ok(())
}

/// Load the access tokens, generating and persisting a fresh pair on first run.
pub async fn load_or_create_tokens(path: &Path) -> Result<AccessTokens, StoreError> {
    if let Some(tokens) = read_json::<AccessTokens>(path).await? {
        return Ok(tokens);
    }

    let tokens = AccessTokens::generate();
    write_json(path, &tokens).await?;
    tracing::info!(path = %path.display(), "generated new access tokens");
    Ok(tokens)
}

// Ingredient catalog kept in ingredients.json.
#[derive(Clone)]
pub struct JsonCatalogStore {
    path: Arc<PathBuf>,
}

impl JsonCatalogStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
        }
    }
}

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    async fn load(&self) -> Result<Catalog, StoreError> {
        match read_json::<Catalog>(&self.path).await? {
            Some(mut catalog) => {
                catalog.normalize();
                Ok(catalog)
            }
            None => {
                let catalog = default_catalog();
                write_json(&self.path, &catalog).await?;
                tracing::info!(path = %self.path.display(), "seeded default ingredient catalog");
                Ok(catalog)
            }
        }
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        write_json(&self.path, catalog).await
    }
}

// Order book kept in orders.json.
#[derive(Clone)]
pub struct JsonOrderStore {
    path: Arc<PathBuf>,
}

impl JsonOrderStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
        }
    }
}

#[async_trait]
impl OrderStore for JsonOrderStore {
    async fn load(&self) -> Result<OrderBook, StoreError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }

    async fn save(&self, orders: &OrderBook) -> Result<(), StoreError> {
        write_json(&self.path, orders).await
    }
}

// Read-only translations.json.
#[derive(Clone)]
pub struct JsonTranslationSource {
    path: Arc<PathBuf>,
}

impl JsonTranslationSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
        }
    }
}

#[async_trait]
impl TranslationSource for JsonTranslationSource {
    async fn load(&self) -> Result<Translations, StoreError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }
}
