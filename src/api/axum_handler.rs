//! axum handler
//!
//! Provides the handler function for the axum framework.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::{HttpRequest, PlaceOrderApi};

/// POST /place-order handler
///
/// Receives the JSON request body, runs the place-order endpoint and
/// converts its response for axum.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use axum::{Router, routing::post};
/// use order_taking::api::{PlaceOrderApi, axum_handler::place_order_handler};
///
/// let api = Arc::new(PlaceOrderApi::with_default_dependencies());
/// let app: Router = Router::new()
///     .route("/place-order", post(place_order_handler))
///     .with_state(api);
/// ```
pub async fn place_order_handler(
    State(api): State<Arc<PlaceOrderApi>>,
    body: String,
) -> impl IntoResponse {
    let request = HttpRequest::new(body);

    let response = api.place_order(&request).await;

    (
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        response.into_body(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_api() -> State<Arc<PlaceOrderApi>> {
        State(Arc::new(PlaceOrderApi::with_default_dependencies()))
    }

    #[tokio::test]
    async fn test_place_order_handler_with_valid_json() {
        let json = r#"{
            "orderId": "ORD1",
            "customerInfo": {
                "firstName": "John",
                "lastName": "Doe",
                "emailAddress": "john@doe.com"
            },
            "shippingAddress": {
                "addressLine1": "Some Street",
                "city": "Los Angeles",
                "zipCode": "12456"
            },
            "billingAddress": {
                "addressLine1": "Some Street",
                "city": "Los Angeles",
                "zipCode": "72456"
            },
            "lines": [
                {
                    "orderLineId": "LN1",
                    "productCode": "G134",
                    "quantity": "10.55"
                }
            ]
        }"#;

        let response = place_order_handler(create_api(), json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_place_order_handler_with_invalid_json() {
        let invalid_json = "{ invalid json }";

        let response = place_order_handler(create_api(), invalid_json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_place_order_handler_with_validation_error() {
        // Invalid order id (empty string)
        let json = r#"{
            "orderId": "",
            "customerInfo": {
                "firstName": "John",
                "lastName": "Doe",
                "emailAddress": "john@doe.com"
            },
            "shippingAddress": {
                "addressLine1": "Some Street",
                "city": "Los Angeles",
                "zipCode": "12456"
            },
            "billingAddress": {
                "addressLine1": "Some Street",
                "city": "Los Angeles",
                "zipCode": "72456"
            },
            "lines": [
                {
                    "orderLineId": "LN1",
                    "productCode": "W1344",
                    "quantity": "10"
                }
            ]
        }"#;

        let response = place_order_handler(create_api(), json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
