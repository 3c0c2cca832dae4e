use async_trait::async_trait;

use crate::domain::entities::{Catalog, OrderBook};
use crate::domain::errors::StoreError;
use crate::domain::i18n::Translations;

// Port for the ingredient catalog document.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn load(&self) -> Result<Catalog, StoreError>;
    async fn save(&self, catalog: &Catalog) -> Result<(), StoreError>;
}

// Port for the order book document.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn load(&self) -> Result<OrderBook, StoreError>;
    async fn save(&self, orders: &OrderBook) -> Result<(), StoreError>;
}

// Port for the static UI string tables.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    async fn load(&self) -> Result<Translations, StoreError>;
}
