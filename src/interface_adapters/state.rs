use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::access::AccessTokens;
use crate::interface_adapters::json_files::{
    INGREDIENTS_FILE, JsonCatalogStore, JsonOrderStore, JsonTranslationSource, ORDERS_FILE,
    TRANSLATIONS_FILE,
};

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    // Loaded once at startup, never rotated.
    pub tokens: Arc<AccessTokens>,
    pub catalog: JsonCatalogStore,
    pub orders: JsonOrderStore,
    pub translations: JsonTranslationSource,
    // Held across each read-modify-write of the matching document.
    pub catalog_writes: Arc<Mutex<()>>,
    pub order_writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(tokens: AccessTokens, data_dir: &Path) -> Self {
        Self {
            tokens: Arc::new(tokens),
            catalog: JsonCatalogStore::new(data_dir.join(INGREDIENTS_FILE)),
            orders: JsonOrderStore::new(data_dir.join(ORDERS_FILE)),
            translations: JsonTranslationSource::new(data_dir.join(TRANSLATIONS_FILE)),
            catalog_writes: Arc::new(Mutex::new(())),
            order_writes: Arc::new(Mutex::new(())),
        }
    }
}
