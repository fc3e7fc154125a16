use serde::{Deserialize, Serialize};

use super::rates::{ShippingMethod, ShippingPolicy, ShippingZone};
use crate::rounding::round_currency;

const FREE_SHIPPING_DESCRIPTION: &str = "Free shipping!";

/// Cart facts needed to price shipping. Absent fields take their documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingCalculationInput {
    pub subtotal: f64,
    #[serde(default)]
    pub item_count: u32,
    /// Pounds; treated as 0 when absent.
    #[serde(default)]
    pub total_weight: Option<f64>,
    #[serde(default)]
    pub destination_country: Option<String>,
    #[serde(default)]
    pub method: Option<ShippingMethod>,
}

/// Price and copy for one offered method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub method: ShippingMethod,
    pub label: String,
    pub cost: f64,
    pub estimated_days: String,
    pub description: String,
}

impl ShippingRate {
    fn priced(method: ShippingMethod, cost: f64) -> Self {
        Self {
            method,
            label: method.label().to_string(),
            cost,
            estimated_days: method.estimated_days().to_string(),
            description: method.description().to_string(),
        }
    }

    fn free(method: ShippingMethod) -> Self {
        Self {
            description: FREE_SHIPPING_DESCRIPTION.to_string(),
            ..Self::priced(method, 0.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingCalculationResult {
    pub shipping_cost: f64,
    pub is_free_shipping: bool,
    pub free_shipping_threshold: f64,
    pub amount_to_free_shipping: f64,
    pub available_rates: Vec<ShippingRate>,
    pub selected_method: ShippingMethod,
    pub zone: ShippingZone,
}

impl ShippingCalculationResult {
    pub fn rate(&self, method: ShippingMethod) -> Option<&ShippingRate> {
        self.available_rates.iter().find(|rate| rate.method == method)
    }
}

impl ShippingPolicy {
    pub fn quote(&self, input: &ShippingCalculationInput) -> ShippingCalculationResult {
        let zone = ShippingZone::from_destination(input.destination_country.as_deref());
        let is_free_shipping = self.qualifies_for_free_shipping(input.subtotal);

        let available_rates: Vec<ShippingRate> = if is_free_shipping {
            vec![ShippingRate::free(ShippingMethod::Standard)]
        } else {
            let base_rate = self.zone_rate(zone)
                + self.weight_surcharge(input.total_weight.unwrap_or(0.0));
            zone.available_methods()
                .iter()
                .map(|method| {
                    ShippingRate::priced(*method, round_currency(base_rate * method.multiplier()))
                })
                .collect()
        };

        let requested = input.method.unwrap_or_default();
        let (selected_method, shipping_cost) = available_rates
            .iter()
            .find(|rate| rate.method == requested)
            .or_else(|| available_rates.first())
            .map(|rate| (rate.method, rate.cost))
            .unwrap_or((ShippingMethod::Standard, 0.0));

        ShippingCalculationResult {
            shipping_cost,
            is_free_shipping,
            free_shipping_threshold: self.free_shipping_threshold,
            amount_to_free_shipping: round_currency(
                (self.free_shipping_threshold - input.subtotal).max(0.0),
            ),
            available_rates,
            selected_method,
            zone,
        }
    }
}

/// Prices `input` against [`ShippingPolicy::STANDARD`].
pub fn calculate_shipping(input: &ShippingCalculationInput) -> ShippingCalculationResult {
    ShippingPolicy::STANDARD.quote(input)
}
