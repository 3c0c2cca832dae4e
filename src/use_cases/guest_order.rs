use crate::domain::entities::{DEFAULT_CUTTING, IngredientSelection, Order, order_key};
use crate::domain::errors::PartyError;
use crate::domain::ports::OrderStore;
use crate::use_cases::storage_failure;

// Order submission as received from a guest.
pub struct SubmitOrder {
    pub name: String,
    pub ingredients: IngredientSelection,
    pub cutting: Option<u32>,
}

// Looks up a guest's saved order by name.
pub struct FetchOrderUseCase<S> {
    pub store: S,
}

impl<S> FetchOrderUseCase<S>
where
    S: OrderStore,
{
    pub async fn execute(&self, name: &str) -> Result<Option<Order>, PartyError> {
        let key = order_key(name);
        if key.is_empty() {
            return Err(PartyError::NameRequired);
        }

        let orders = self.store.load().await.map_err(storage_failure)?;

        Ok(orders.get(&key).cloned())
    }
}

// Saves a guest's order, replacing any earlier selection.
pub struct SubmitOrderUseCase<S> {
    pub store: S,
}

impl<S> SubmitOrderUseCase<S>
where
    S: OrderStore,
{
    pub async fn execute(&self, submission: SubmitOrder) -> Result<Order, PartyError> {
        let key = order_key(&submission.name);
        if key.is_empty() {
            return Err(PartyError::NameRequired);
        }

        let mut orders = self.store.load().await.map_err(storage_failure)?;

        // The kitchen's done mark survives a guest changing their mind.
        let done = orders.get(&key).is_some_and(|existing| existing.done);

        let order = Order {
            display_name: submission.name.trim().to_string(),
            ingredients: submission.ingredients,
            cutting: Some(submission.cutting.unwrap_or(DEFAULT_CUTTING)),
            done,
        };
        orders.insert(key, order.clone());

        self.store.save(&orders).await.map_err(storage_failure)?;

        Ok(order)
    }
}
