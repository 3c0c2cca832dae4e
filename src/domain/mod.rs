// Domain layer: catalog, orders, access tokens and their storage ports.

pub mod access;
pub mod defaults;
pub mod entities;
pub mod errors;
pub mod i18n;
pub mod ports;

pub use access::{AccessRole, AccessTokens};
pub use entities::{Catalog, Category, Ingredient, Order, OrderBook, Selection};
pub use errors::{PartyError, StoreError};
