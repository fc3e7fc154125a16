use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use evercraft::applications::{
    application_router, calculate_application_completeness, ApplicationScorer,
};
use evercraft::eco::{
    calculate_shop_tier, product_completeness, shop_completeness, CompletenessBreakdown,
    ProductEcoProfile, ShopEcoProfile, ShopTier,
};
use evercraft::error::AppError;
use evercraft::shipping::{
    calculate_shipping, parse_cart_csv, CartLineItem, ShippingCalculationInput,
    ShippingCalculationResult, ShippingMethod,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::info;

/// Either explicit cart totals or the cart itself, as line items or a CSV export.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ShippingQuoteRequest {
    pub(crate) subtotal: Option<f64>,
    pub(crate) item_count: Option<u32>,
    pub(crate) total_weight: Option<f64>,
    pub(crate) destination_country: Option<String>,
    pub(crate) method: Option<ShippingMethod>,
    pub(crate) items: Option<Vec<CartLineItem>>,
    pub(crate) cart_csv: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub(crate) ordered_on: Option<NaiveDate>,
}

impl ShippingQuoteRequest {
    pub(crate) fn into_input(self) -> Result<ShippingCalculationInput, AppError> {
        let items = match (self.items, self.cart_csv) {
            (Some(_), Some(_)) => {
                return Err(AppError::Input(
                    "send either items or cart_csv, not both".to_string(),
                ))
            }
            (Some(items), None) => Some(items),
            (None, Some(csv)) => Some(parse_cart_csv(Cursor::new(csv.into_bytes()))?),
            (None, None) => None,
        };

        if let Some(items) = items {
            return Ok(ShippingCalculationInput::from_cart(
                &items,
                self.destination_country,
                self.method,
            ));
        }

        let subtotal = self.subtotal.ok_or_else(|| {
            AppError::Input("subtotal is required when no cart is supplied".to_string())
        })?;

        Ok(ShippingCalculationInput {
            subtotal,
            item_count: self.item_count.unwrap_or_default(),
            total_weight: self.total_weight,
            destination_country: self.destination_country,
            method: self.method,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RateDeliveryWindow {
    pub(crate) method: ShippingMethod,
    pub(crate) earliest: NaiveDate,
    pub(crate) latest: NaiveDate,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShippingQuoteResponse {
    #[serde(flatten)]
    pub(crate) quote: ShippingCalculationResult,
    pub(crate) ordered_on: NaiveDate,
    pub(crate) delivery_windows: Vec<RateDeliveryWindow>,
}

pub(crate) fn delivery_windows(
    quote: &ShippingCalculationResult,
    ordered_on: NaiveDate,
) -> Vec<RateDeliveryWindow> {
    quote
        .available_rates
        .iter()
        .map(|rate| {
            let window = rate.method.delivery_window(ordered_on);
            RateDeliveryWindow {
                method: rate.method,
                earliest: window.earliest,
                latest: window.latest,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct ShopCompletenessResponse {
    pub(crate) completeness: CompletenessBreakdown,
    pub(crate) tier: ShopTier,
    /// Score under the stricter seller-application rules.
    pub(crate) application_score: u8,
    pub(crate) missing_practices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductCompletenessResponse {
    pub(crate) completeness: CompletenessBreakdown,
    pub(crate) tier: ShopTier,
}

pub(crate) fn with_service_routes(scorer: Arc<ApplicationScorer>) -> axum::Router {
    application_router(scorer)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/shipping/quote",
            axum::routing::post(shipping_quote_endpoint),
        )
        .route(
            "/api/v1/eco/shops/completeness",
            axum::routing::post(shop_completeness_endpoint),
        )
        .route(
            "/api/v1/eco/products/completeness",
            axum::routing::post(product_completeness_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn shipping_quote_endpoint(
    Json(payload): Json<ShippingQuoteRequest>,
) -> Result<Json<ShippingQuoteResponse>, AppError> {
    let ordered_on = payload
        .ordered_on
        .unwrap_or_else(|| Local::now().date_naive());
    let input = payload.into_input()?;
    let quote = calculate_shipping(&input);

    info!(
        zone = ?quote.zone,
        method = %quote.selected_method,
        cost = quote.shipping_cost,
        free = quote.is_free_shipping,
        "shipping quoted"
    );

    let delivery_windows = delivery_windows(&quote, ordered_on);
    Ok(Json(ShippingQuoteResponse {
        quote,
        ordered_on,
        delivery_windows,
    }))
}

pub(crate) async fn shop_completeness_endpoint(
    Json(profile): Json<ShopEcoProfile>,
) -> Json<ShopCompletenessResponse> {
    let completeness = shop_completeness(&profile);
    Json(ShopCompletenessResponse {
        completeness,
        tier: calculate_shop_tier(completeness.score),
        application_score: calculate_application_completeness(&profile).score,
        missing_practices: profile.missing_practices(),
    })
}

pub(crate) async fn product_completeness_endpoint(
    Json(profile): Json<ProductEcoProfile>,
) -> Json<ProductCompletenessResponse> {
    let completeness = product_completeness(&profile);
    Json(ProductCompletenessResponse {
        completeness,
        tier: calculate_shop_tier(completeness.score),
    })
}
