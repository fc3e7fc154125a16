use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::applications::{application_router, ApplicationScorer, SellerApplication};
use crate::eco::ShopEcoProfile;

/// Nine practices and every detail field: scores 93 under application rules.
pub(super) fn committed_profile() -> ShopEcoProfile {
    ShopEcoProfile {
        plastic_free_packaging: true,
        recycled_packaging: true,
        biodegradable_packaging: true,
        organic_materials: true,
        recycled_materials: true,
        fair_trade_sourcing: true,
        local_sourcing: true,
        carbon_neutral_shipping: true,
        renewable_energy: true,
        carbon_offset: false,
        annual_carbon_emissions: Some(4.2),
        carbon_offset_percent: Some(50.0),
        renewable_energy_percent: Some(80.0),
        water_conservation: true,
        fair_wage_certified: true,
        take_back_program: true,
        repair_service: true,
    }
}

/// Six practices and two programs: scores 51, a starter shop.
pub(super) fn starter_profile() -> ShopEcoProfile {
    ShopEcoProfile {
        plastic_free_packaging: true,
        organic_materials: true,
        recycled_materials: true,
        local_sourcing: true,
        renewable_energy: true,
        fair_trade_sourcing: true,
        water_conservation: true,
        repair_service: true,
        ..Default::default()
    }
}

/// Eight practices and three programs: scores 69, a verified shop.
pub(super) fn verified_profile() -> ShopEcoProfile {
    ShopEcoProfile {
        recycled_packaging: true,
        carbon_neutral_shipping: true,
        take_back_program: true,
        ..starter_profile()
    }
}

pub(super) fn application(profile: ShopEcoProfile, description: &str) -> SellerApplication {
    SellerApplication {
        business_name: "Fernwood Studio".to_string(),
        business_description: description.to_string(),
        eco_profile: profile,
    }
}

pub(super) fn scorer() -> ApplicationScorer {
    ApplicationScorer::default()
}

pub(super) fn router() -> axum::Router {
    application_router(Arc::new(scorer()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
