use crate::domain::entities::{OrderBook, order_key};
use crate::domain::errors::PartyError;
use crate::domain::ports::OrderStore;
use crate::use_cases::storage_failure;

// Returns every saved order.
pub struct ListOrdersUseCase<S> {
    pub store: S,
}

impl<S> ListOrdersUseCase<S>
where
    S: OrderStore,
{
    pub async fn execute(&self) -> Result<OrderBook, PartyError> {
        self.store.load().await.map_err(storage_failure)
    }
}

// Removes one guest's order.
pub struct DeleteOrderUseCase<S> {
    pub store: S,
}

impl<S> DeleteOrderUseCase<S>
where
    S: OrderStore,
{
    pub async fn execute(&self, name: &str) -> Result<(), PartyError> {
        let key = order_key(name);
        let mut orders = self.store.load().await.map_err(storage_failure)?;

        if orders.remove(&key).is_none() {
            return Err(PartyError::OrderNotFound);
        }

        self.store.save(&orders).await.map_err(storage_failure)
    }
}

// Sets the done flag on one order, leaving everything else untouched.
pub struct MarkOrderDoneUseCase<S> {
    pub store: S,
}

impl<S> MarkOrderDoneUseCase<S>
where
    S: OrderStore,
{
    pub async fn execute(&self, name: &str, done: bool) -> Result<bool, PartyError> {
        let key = order_key(name);
        let mut orders = self.store.load().await.map_err(storage_failure)?;

        let order = orders.get_mut(&key).ok_or(PartyError::OrderNotFound)?;
        order.done = done;

        self.store.save(&orders).await.map_err(storage_failure)?;
        Ok(done)
    }
}
