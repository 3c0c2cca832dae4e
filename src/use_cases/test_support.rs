use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{Catalog, OrderBook};
use crate::domain::errors::StoreError;
use crate::domain::ports::{CatalogStore, OrderStore};

fn simulated_failure(op: &str) -> StoreError {
    StoreError::Io(std::io::Error::other(format!("{op} failed")))
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub load: bool,
    pub save: bool,
}

// In-memory document store that records how often it was saved.
#[derive(Clone)]
pub(crate) struct RecordingStore<T> {
    document: Arc<Mutex<T>>,
    saves: Arc<Mutex<usize>>,
    failures: FailureFlags,
}

impl<T: Clone + Default> RecordingStore<T> {
    pub(crate) fn new() -> Self {
        Self::with_document(T::default())
    }

    pub(crate) fn with_document(document: T) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
            saves: Arc::new(Mutex::new(0)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn snapshot(&self) -> T {
        self.document.lock().expect("document mutex poisoned").clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        *self.saves.lock().expect("saves mutex poisoned")
    }

    fn read(&self) -> Result<T, StoreError> {
        if self.failures.load {
            return Err(simulated_failure("load"));
        }
        Ok(self.snapshot())
    }

    fn write(&self, document: &T) -> Result<(), StoreError> {
        if self.failures.save {
            return Err(simulated_failure("save"));
        }
        *self.document.lock().expect("document mutex poisoned") = document.clone();
        *self.saves.lock().expect("saves mutex poisoned") += 1;
        Ok(())
    }
}

pub(crate) type RecordingCatalogStore = RecordingStore<Catalog>;
pub(crate) type RecordingOrderStore = RecordingStore<OrderBook>;

#[async_trait]
impl CatalogStore for RecordingStore<Catalog> {
    async fn load(&self) -> Result<Catalog, StoreError> {
        self.read()
    }

    async fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        self.write(catalog)
    }
}

#[async_trait]
impl OrderStore for RecordingStore<OrderBook> {
    async fn load(&self) -> Result<OrderBook, StoreError> {
        self.read()
    }

    async fn save(&self, orders: &OrderBook) -> Result<(), StoreError> {
        self.write(orders)
    }
}
