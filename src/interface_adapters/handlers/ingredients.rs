use crate::domain::access::AccessRole;
use crate::domain::defaults::AVAILABLE_EMOJIS;
use crate::domain::entities::Category;
use crate::interface_adapters::handlers::{ApiError, authorize, map_party_error};
use crate::interface_adapters::protocol::{
    IngredientResponse, IngredientsResponse, NewIngredientRequest, SuccessResponse,
    UpdateIngredientRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::ingredient_catalog::{
    AddIngredientUseCase, DeleteIngredientUseCase, IngredientPatch, ListIngredientsUseCase,
    NewIngredient, UpdateIngredientUseCase,
};
use axum::{
    Json,
    extract::{Path, State},
};

fn parse_category(tag: &str) -> Result<Category, ApiError> {
    tag.parse::<Category>().map_err(map_party_error)
}

pub async fn list_ingredients(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<IngredientsResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;

    let use_case = ListIngredientsUseCase {
        store: state.catalog.clone(),
    };
    let ingredients = use_case.execute().await.map_err(map_party_error)?;

    Ok(Json(IngredientsResponse {
        ingredients,
        categories: Category::ALL,
        emojis: &AVAILABLE_EMOJIS,
    }))
}

#[tracing::instrument(name = "add_ingredient", skip_all, fields(category = %category))]
pub async fn add_ingredient(
    State(state): State<AppState>,
    Path((token, category)): Path<(String, String)>,
    Json(payload): Json<NewIngredientRequest>,
) -> Result<Json<IngredientResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;
    let category = parse_category(&category)?;

    let use_case = AddIngredientUseCase {
        store: state.catalog.clone(),
    };
    let ingredient = {
        let _writes = state.catalog_writes.lock().await;
        use_case
            .execute(
                category,
                NewIngredient {
                    name_en: payload.name_en,
                    name: payload.name,
                    name_sk: payload.name_sk,
                    emoji: payload.emoji,
                },
            )
            .await
            .map_err(map_party_error)?
    };

    tracing::info!(id = %ingredient.id, "ingredient added");
    Ok(Json(IngredientResponse {
        success: true,
        ingredient,
    }))
}

#[tracing::instrument(name = "update_ingredient", skip_all, fields(category = %category, id = %id))]
pub async fn update_ingredient(
    State(state): State<AppState>,
    Path((token, category, id)): Path<(String, String, String)>,
    Json(payload): Json<UpdateIngredientRequest>,
) -> Result<Json<IngredientResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;
    let category = parse_category(&category)?;

    let use_case = UpdateIngredientUseCase {
        store: state.catalog.clone(),
    };
    let ingredient = {
        let _writes = state.catalog_writes.lock().await;
        use_case
            .execute(
                category,
                &id,
                IngredientPatch {
                    name_en: payload.name_en,
                    name: payload.name,
                    name_sk: payload.name_sk,
                    emoji: payload.emoji,
                    enabled: payload.enabled,
                },
            )
            .await
            .map_err(map_party_error)?
    };

    tracing::info!(enabled = ingredient.enabled, "ingredient updated");
    Ok(Json(IngredientResponse {
        success: true,
        ingredient,
    }))
}

#[tracing::instrument(name = "delete_ingredient", skip_all, fields(category = %category, id = %id))]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path((token, category, id)): Path<(String, String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    authorize(&state, AccessRole::Admin, &token)?;
    let category = parse_category(&category)?;

    let use_case = DeleteIngredientUseCase {
        store: state.catalog.clone(),
    };
    {
        let _writes = state.catalog_writes.lock().await;
        use_case
            .execute(category, &id)
            .await
            .map_err(map_party_error)?;
    }

    tracing::info!("ingredient deleted");
    Ok(Json(SuccessResponse { success: true }))
}
