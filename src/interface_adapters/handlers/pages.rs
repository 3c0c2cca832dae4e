use crate::domain::access::AccessRole;
use crate::domain::errors::PartyError;
use crate::domain::i18n::{Locale, Translations};
use crate::domain::ports::TranslationSource;
use crate::interface_adapters::protocol::PageQuery;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views::{render_admin_page, render_party_page};
use crate::use_cases::ingredient_catalog::{GuestCatalogUseCase, ListIngredientsUseCase};
use crate::use_cases::order_admin::ListOrdersUseCase;
use crate::use_cases::storage_failure;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};

pub type PageError = (StatusCode, &'static str);

const PAGE_STORAGE_ERROR: PageError = (
    StatusCode::INTERNAL_SERVER_ERROR,
    "🍕 Something went wrong loading the party. Please try again.",
);

// Page use cases only fail on storage; details are already logged.
fn page_error(_: PartyError) -> PageError {
    PAGE_STORAGE_ERROR
}

async fn load_translations(state: &AppState) -> Result<Translations, PageError> {
    state
        .translations
        .load()
        .await
        .map_err(|err| page_error(storage_failure(err)))
}

// Bare root: a link with a token is required.
pub async fn home() -> PageError {
    (
        StatusCode::FORBIDDEN,
        "🍕 Pizza Party! You need a valid link to join.",
    )
}

pub async fn party_page(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    if state.tokens.authorize(AccessRole::Party, &token).is_err() {
        tracing::warn!("rejected party page token");
        return Err((StatusCode::FORBIDDEN, "🚫 Invalid party link!"));
    }
    let locale = Locale::from_tag(query.lang.as_deref());

    let catalog = GuestCatalogUseCase {
        store: state.catalog.clone(),
    }
    .execute()
    .await
    .map_err(page_error)?;
    let translations = load_translations(&state).await?;

    Ok(Html(render_party_page(
        &token,
        locale,
        &catalog,
        &translations,
    )))
}

pub async fn admin_page(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    if state.tokens.authorize(AccessRole::Admin, &token).is_err() {
        tracing::warn!("rejected admin page token");
        return Err((StatusCode::FORBIDDEN, "🚫 Invalid admin link!"));
    }
    let locale = Locale::from_tag(query.lang.as_deref());

    let orders = ListOrdersUseCase {
        store: state.orders.clone(),
    }
    .execute()
    .await
    .map_err(page_error)?;
    let catalog = ListIngredientsUseCase {
        store: state.catalog.clone(),
    }
    .execute()
    .await
    .map_err(page_error)?;
    let translations = load_translations(&state).await?;

    Ok(Html(render_admin_page(
        &token,
        locale,
        &orders,
        &catalog,
        &translations,
    )))
}
