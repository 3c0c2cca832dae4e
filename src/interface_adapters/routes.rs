use crate::interface_adapters::handlers::ingredients::{
    add_ingredient, delete_ingredient, list_ingredients, update_ingredient,
};
use crate::interface_adapters::handlers::orders::{
    delete_order, get_order, list_orders, mark_order_done, submit_order,
};
use crate::interface_adapters::handlers::pages::{admin_page, home, party_page};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

// Build the HTTP router for pages and the JSON API.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/party/{token}", get(party_page))
        .route("/admin/{token}", get(admin_page))
        .route("/api/order/{token}", get(get_order).post(submit_order))
        .route("/api/orders/{token}", get(list_orders))
        .route("/api/order/{token}/{name}", delete(delete_order))
        .route("/api/order/{token}/{name}/done", put(mark_order_done))
        .route("/api/ingredients/{token}", get(list_ingredients))
        .route("/api/ingredients/{token}/{category}", post(add_ingredient))
        .route(
            "/api/ingredients/{token}/{category}/{id}",
            put(update_ingredient).delete(delete_ingredient),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::AccessTokens;
    use crate::domain::entities::OrderBook;
    use crate::interface_adapters::json_files::{ORDERS_FILE, read_json};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const PARTY: &str = "party-token";
    const ADMIN: &str = "admin-token";

    // The temp dir must outlive the router, so both are handed back.
    fn build_test_app() -> (Router, TempDir) {
        let dir = tempfile::tempdir().expect("expected temp dir");
        let tokens = AccessTokens {
            party: PARTY.to_string(),
            admin: ADMIN.to_string(),
        };
        (app(AppState::new(tokens, dir.path())), dir)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("expected request to build");

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, payload)
    }

    async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("expected request to build");
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn when_root_is_requested_then_returns_403() {
        let (app, _dir) = build_test_app();

        let (status, body) = get_page(&app, "/").await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("valid link"));
    }

    #[tokio::test]
    async fn when_page_token_is_wrong_or_for_other_role_then_returns_403() {
        let (app, _dir) = build_test_app();

        for uri in [
            "/party/nope".to_string(),
            format!("/party/{ADMIN}"),
            format!("/admin/{PARTY}"),
        ] {
            let (status, _) = get_page(&app, &uri).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        }
    }

    #[tokio::test]
    async fn when_pages_use_their_tokens_then_html_is_rendered() {
        let (app, _dir) = build_test_app();

        let (status, party) = get_page(&app, &format!("/party/{PARTY}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(party.contains("Tomato Sauce"));

        let (status, admin) = get_page(&app, &format!("/admin/{ADMIN}?lang=sk")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(admin.contains("Paradajkový základ"));
        assert!(admin.contains("Zatiaľ žiadne objednávky."));
    }

    #[tokio::test]
    async fn when_api_token_is_invalid_then_returns_403_and_error_message() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(&app, "GET", &format!("/api/orders/{PARTY}"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(payload["error"], "Invalid token");

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/order/{ADMIN}"),
            Some(json!({"name": "Ann", "ingredients": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/ingredients/{PARTY}/meats/ham"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn when_order_is_submitted_then_fetch_with_other_casing_returns_it() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(
            &app,
            "POST",
            &format!("/api/order/{PARTY}"),
            Some(json!({
                "name": " Ann ",
                "ingredients": {"bases": "tomato", "meats": ["ham", "bacon"]}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["success"], true);
        assert_eq!(payload["message"], "Pizza order saved! 🍕");

        let (status, payload) =
            send(&app, "GET", &format!("/api/order/{PARTY}?name=ANN"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["order"]["display_name"], "Ann");
        assert_eq!(
            payload["order"]["ingredients"],
            json!({"bases": "tomato", "meats": ["ham", "bacon"]})
        );
        assert_eq!(payload["order"]["cutting"], 8);
        assert_eq!(payload["order"]["done"], false);
    }

    #[tokio::test]
    async fn when_no_order_exists_then_fetch_returns_null_order() {
        let (app, _dir) = build_test_app();

        let (status, payload) =
            send(&app, "GET", &format!("/api/order/{PARTY}?name=ghost"), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({"order": null}));
    }

    #[tokio::test]
    async fn when_name_is_missing_then_order_routes_return_400() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(&app, "GET", &format!("/api/order/{PARTY}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Name required");

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/order/{PARTY}"),
            Some(json!({"name": "  ", "ingredients": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_order_is_resubmitted_after_done_then_selection_changes_and_done_stays() {
        let (app, _dir) = build_test_app();
        let order_uri = format!("/api/order/{PARTY}");
        let submit = |ingredients: Value| {
            send(
                &app,
                "POST",
                &order_uri,
                Some(json!({"name": "Bob", "ingredients": ingredients, "cutting": 6})),
            )
        };

        submit(json!({"veggies": ["onions"]})).await;
        let (status, payload) = send(
            &app,
            "PUT",
            &format!("/api/order/{ADMIN}/BOB/done"),
            Some(json!({"done": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({"success": true, "done": true}));

        submit(json!({"cheeses": ["parmesan"]})).await;

        let (_, payload) = send(&app, "GET", &format!("/api/orders/{ADMIN}"), None).await;
        let bob = &payload["orders"]["bob"];
        assert_eq!(bob["ingredients"], json!({"cheeses": ["parmesan"]}));
        assert_eq!(bob["cutting"], 6);
        assert_eq!(bob["done"], true);
    }

    #[tokio::test]
    async fn when_missing_order_is_deleted_or_toggled_then_returns_404() {
        let (app, _dir) = build_test_app();

        let (status, payload) =
            send(&app, "DELETE", &format!("/api/order/{ADMIN}/ghost"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "Order not found");

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/order/{ADMIN}/ghost/done"),
            Some(json!({"done": true})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn when_existing_order_is_deleted_then_it_is_gone() {
        let (app, _dir) = build_test_app();
        send(
            &app,
            "POST",
            &format!("/api/order/{PARTY}"),
            Some(json!({"name": "Cara", "ingredients": {}})),
        )
        .await;

        let (status, payload) =
            send(&app, "DELETE", &format!("/api/order/{ADMIN}/Cara"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({"success": true}));

        let (_, payload) = send(&app, "GET", &format!("/api/orders/{ADMIN}"), None).await;
        assert_eq!(payload["orders"], json!({}));
    }

    #[tokio::test]
    async fn when_salami_is_added_to_meats_then_it_is_listed_under_meats() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(
            &app,
            "POST",
            &format!("/api/ingredients/{ADMIN}/meats"),
            Some(json!({"name_en": "Salami"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["ingredient"]["id"], "salami");
        assert_eq!(payload["ingredient"]["name_en"], "Salami");
        assert_eq!(payload["ingredient"]["enabled"], true);

        let (status, payload) = send(&app, "GET", &format!("/api/ingredients/{ADMIN}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let meats = payload["ingredients"]["meats"]
            .as_array()
            .expect("expected meats list");
        assert!(meats.iter().any(|item| item["id"] == "salami"));
        assert_eq!(
            payload["categories"],
            json!(["bases", "cheeses", "meats", "veggies", "extras"])
        );
        assert_eq!(payload["emojis"].as_array().map(Vec::len), Some(44));
    }

    #[tokio::test]
    async fn when_id_collides_in_category_then_400_but_other_category_succeeds() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(
            &app,
            "POST",
            &format!("/api/ingredients/{ADMIN}/meats"),
            Some(json!({"name_en": "HAM"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Ingredient already exists");

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/ingredients/{ADMIN}/extras"),
            Some(json!({"name_en": "HAM"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn when_category_is_unknown_then_ingredient_routes_return_400() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(
            &app,
            "POST",
            &format!("/api/ingredients/{ADMIN}/desserts"),
            Some(json!({"name_en": "Tiramisu"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["error"], "Invalid category");

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/ingredients/{ADMIN}/desserts/tiramisu"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_missing_ingredient_is_updated_or_deleted_then_returns_404() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(
            &app,
            "PUT",
            &format!("/api/ingredients/{ADMIN}/meats/tofu"),
            Some(json!({"enabled": false})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "Ingredient not found");

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/ingredients/{ADMIN}/meats/tofu"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn when_ingredient_is_disabled_then_party_page_hides_it_but_saved_order_keeps_it() {
        let (app, _dir) = build_test_app();
        send(
            &app,
            "POST",
            &format!("/api/order/{PARTY}"),
            Some(json!({"name": "Dan", "ingredients": {"veggies": ["pineapple"]}})),
        )
        .await;

        let (status, payload) = send(
            &app,
            "PUT",
            &format!("/api/ingredients/{ADMIN}/veggies/pineapple"),
            Some(json!({"enabled": false})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["ingredient"]["enabled"], false);

        let (_, party) = get_page(&app, &format!("/party/{PARTY}")).await;
        assert!(!party.contains(r#"value="pineapple""#));

        let (_, payload) = send(&app, "GET", &format!("/api/order/{PARTY}?name=dan"), None).await;
        assert_eq!(payload["order"]["ingredients"]["veggies"], json!(["pineapple"]));
    }

    #[tokio::test]
    async fn when_existing_ingredient_is_deleted_then_returns_success() {
        let (app, _dir) = build_test_app();

        let (status, payload) = send(
            &app,
            "DELETE",
            &format!("/api/ingredients/{ADMIN}/extras/truffle"),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({"success": true}));
    }

    #[tokio::test]
    async fn when_orders_file_is_corrupt_then_returns_500_and_error_message() {
        let (app, dir) = build_test_app();
        std::fs::write(dir.path().join(ORDERS_FILE), "[1, 2").expect("write garbage");

        let (status, payload) = send(&app, "GET", &format!("/api/orders/{ADMIN}"), None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(payload["error"], "storage error");
    }

    #[tokio::test]
    async fn when_order_route_is_called_with_put_then_returns_405() {
        let (app, _dir) = build_test_app();

        let (status, _) = send(&app, "PUT", &format!("/api/order/{PARTY}"), None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn when_done_body_omits_flag_then_order_is_marked_not_done() {
        let (app, dir) = build_test_app();
        send(
            &app,
            "POST",
            &format!("/api/order/{PARTY}"),
            Some(json!({"name": "X", "ingredients": {}})),
        )
        .await;
        let done_uri = format!("/api/order/{ADMIN}/x/done");
        send(&app, "PUT", &done_uri, Some(json!({"done": true}))).await;

        let (status, payload) = send(&app, "PUT", &done_uri, Some(json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({"success": true, "done": false}));
        let stored: OrderBook = read_json(&dir.path().join(ORDERS_FILE))
            .await
            .expect("expected orders to read")
            .expect("expected orders file");
        assert!(!stored.get("x").expect("expected order x").done);
    }

    #[tokio::test]
    async fn when_order_body_is_not_json_then_extractor_rejects_it_without_saving() {
        let (app, dir) = build_test_app();
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/order/{PARTY}"))
            .header("content-type", "application/json")
            .body(Body::from("{name: pizza"))
            .expect("expected request to build");

        let response = app.clone().oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
        assert!(!dir.path().join(ORDERS_FILE).exists());
    }
}
