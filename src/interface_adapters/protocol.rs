use serde::{Deserialize, Serialize};

use crate::domain::entities::{Catalog, Category, Ingredient, IngredientSelection, Order, OrderBook};

// Query string for looking up a guest's order.
#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub name: String,
}

// Query string accepted by the HTML pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

// Response payload for a single order lookup.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Option<Order>,
}

// Request payload for submitting an order.
#[derive(Debug, Deserialize)]
pub struct SubmitOrderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: IngredientSelection,
    #[serde(default)]
    pub cutting: Option<u32>,
}

// Response payload after an order was saved.
#[derive(Debug, Serialize)]
pub struct SubmitOrderResponse {
    pub success: bool,
    pub message: String,
}

// Response payload listing every order.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: OrderBook,
}

// Plain acknowledgement for deletes.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// Request payload for flagging an order as done.
#[derive(Debug, Deserialize)]
pub struct OrderDoneRequest {
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct OrderDoneResponse {
    pub success: bool,
    pub done: bool,
}

// Response payload for the admin catalog view.
#[derive(Debug, Serialize)]
pub struct IngredientsResponse {
    pub ingredients: Catalog,
    pub categories: [Category; 5],
    pub emojis: &'static [&'static str],
}

// Request payload for adding an ingredient.
#[derive(Debug, Deserialize)]
pub struct NewIngredientRequest {
    pub name_en: Option<String>,
    pub name: Option<String>,
    pub name_sk: Option<String>,
    pub emoji: Option<String>,
}

// Request payload for a partial ingredient update.
#[derive(Debug, Deserialize)]
pub struct UpdateIngredientRequest {
    pub name_en: Option<String>,
    pub name: Option<String>,
    pub name_sk: Option<String>,
    pub emoji: Option<String>,
    pub enabled: Option<bool>,
}

// Response payload carrying the stored ingredient record.
#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub success: bool,
    pub ingredient: Ingredient,
}

// Error envelope for every JSON error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
