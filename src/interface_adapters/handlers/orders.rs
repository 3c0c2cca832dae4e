use crate::domain::access::AccessRole;
use crate::interface_adapters::handlers::{ApiError, authorize, map_party_error};
use crate::interface_adapters::protocol::{
    OrderDoneRequest, OrderDoneResponse, OrderQuery, OrderResponse, OrdersResponse,
    SubmitOrderRequest, SubmitOrderResponse, SuccessResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::guest_order::{FetchOrderUseCase, SubmitOrder, SubmitOrderUseCase};
use crate::use_cases::order_admin::{DeleteOrderUseCase, ListOrdersUseCase, MarkOrderDoneUseCase};
use axum::{
    Json,
    extract::{Path, Query, State},
};

const ORDER_SAVED_MESSAGE: &str = "Pizza order saved! 🍕";

// Guest lookup of their own order.
pub async fn get_order(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<OrderResponse>, ApiError> {
    authorize(&state, AccessRole::Party, &token)?;

    let use_case = FetchOrderUseCase {
        store: state.orders.clone(),
    };
    let order = use_case
        .execute(&query.name)
        .await
        .map_err(map_party_error)?;

    Ok(Json(OrderResponse { order }))
}

#[tracing::instrument(name = "submit_order", skip_all)]
pub async fn submit_order(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<SubmitOrderRequest>,
) -> Result<Json<SubmitOrderResponse>, ApiError> {
    authorize(&state, AccessRole::Party, &token)?;

    let use_case = SubmitOrderUseCase {
        store: state.orders.clone(),
    };
    let order = {
        let _writes = state.order_writes.lock().await;
        use_case
            .execute(SubmitOrder {
                name: payload.name,
                ingredients: payload.ingredients,
                cutting: payload.cutting,
            })
            .await
            .map_err(map_party_error)?
    };

    tracing::info!(guest = %order.display_name, "order saved");

    Ok(Json(SubmitOrderResponse {
        success: true,
        message: ORDER_SAVED_MESSAGE.to_string(),
    }))
}

// Admin listing of every order.
pub async fn list_orders(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<OrdersResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;

    let use_case = ListOrdersUseCase {
        store: state.orders.clone(),
    };
    let orders = use_case.execute().await.map_err(map_party_error)?;

    Ok(Json(OrdersResponse { orders }))
}

#[tracing::instrument(name = "delete_order", skip_all, fields(guest = %name))]
pub async fn delete_order(
    State(state): State<AppState>,
    Path((token, name)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;

    let use_case = DeleteOrderUseCase {
        store: state.orders.clone(),
    };
    {
        let _writes = state.order_writes.lock().await;
        use_case.execute(&name).await.map_err(map_party_error)?;
    }

    tracing::info!("order deleted");
    Ok(Json(SuccessResponse { success: true }))
}

#[tracing::instrument(name = "mark_order_done", skip_all, fields(guest = %name))]
pub async fn mark_order_done(
    State(state): State<AppState>,
    Path((token, name)): Path<(String, String)>,
    Json(payload): Json<OrderDoneRequest>,
) -> Result<Json<OrderDoneResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;

    let use_case = MarkOrderDoneUseCase {
        store: state.orders.clone(),
    };
    let done = {
        let _writes = state.order_writes.lock().await;
        use_case
            .execute(&name, payload.done)
            .await
            .map_err(map_party_error)?
    };

    tracing::info!(done, "order done flag updated");
    Ok(Json(OrderDoneResponse {
        success: true,
        done,
    }))
}
