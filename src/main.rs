//! order-taking-server
//!
//! HTTP server exposing the place-order workflow.
//!
//! # Endpoints
//!
//! - `POST /place-order` - Processes an order and returns the events
//!
//! # Usage
//!
//! ```bash
//! # Start the server
//! cargo run --bin order-taking-server
//!
//! # Send a request
//! curl -X POST http://localhost:8080/place-order \
//!   -H "Content-Type: application/json" \
//!   -d '{"orderId": "ORD1", ...}'
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_taking::api::PlaceOrderApi;
use order_taking::api::axum_handler::place_order_handler;

#[tokio::main]
async fn main() {
    // Tracing initialization
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "order_taking=info,order_taking_server=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Router construction
    let api = Arc::new(PlaceOrderApi::with_default_dependencies());
    let app = Router::new()
        .route("/place-order", post(place_order_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(api);

    // Server startup
    let address = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Starting server on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
