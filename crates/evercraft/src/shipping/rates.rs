use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order subtotal at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.00;

const DOMESTIC_ALIASES: [&str; 3] = ["US", "USA", "UNITED STATES"];

/// Delivery speed offered at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Overnight,
}

impl ShippingMethod {
    pub const fn key(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Overnight => "overnight",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Shipping",
            ShippingMethod::Express => "Express Shipping",
            ShippingMethod::Overnight => "Overnight Shipping",
        }
    }

    pub const fn estimated_days(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "5-7 business days",
            ShippingMethod::Express => "2-3 business days",
            ShippingMethod::Overnight => "1 business day",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Economical ground shipping",
            ShippingMethod::Express => "Faster delivery",
            ShippingMethod::Overnight => "Next day delivery",
        }
    }

    /// Price multiplier applied to the zone base rate.
    pub const fn multiplier(self) -> f64 {
        match self {
            ShippingMethod::Standard => 1.0,
            ShippingMethod::Express => 1.8,
            ShippingMethod::Overnight => 3.0,
        }
    }

    /// Inclusive business-day range matching `estimated_days`.
    pub const fn business_days(self) -> (u32, u32) {
        match self {
            ShippingMethod::Standard => (5, 7),
            ShippingMethod::Express => (2, 3),
            ShippingMethod::Overnight => (1, 1),
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shipping method '{0}' (expected standard, express or overnight)")]
pub struct UnknownShippingMethod(pub String);

impl FromStr for ShippingMethod {
    type Err = UnknownShippingMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            "overnight" => Ok(ShippingMethod::Overnight),
            _ => Err(UnknownShippingMethod(value.to_string())),
        }
    }
}

/// Destination classification driving the base rate and the offered methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingZone {
    Domestic,
    International,
}

impl ShippingZone {
    /// Absent or blank destinations ship domestically.
    pub fn from_destination(country: Option<&str>) -> Self {
        match country.map(str::trim).filter(|value| !value.is_empty()) {
            None => ShippingZone::Domestic,
            Some(value) => {
                let upper = value.to_ascii_uppercase();
                if DOMESTIC_ALIASES.contains(&upper.as_str()) {
                    ShippingZone::Domestic
                } else {
                    ShippingZone::International
                }
            }
        }
    }

    /// Methods offered to the zone, cheapest first.
    pub const fn available_methods(self) -> &'static [ShippingMethod] {
        match self {
            ShippingZone::Domestic => &[
                ShippingMethod::Standard,
                ShippingMethod::Express,
                ShippingMethod::Overnight,
            ],
            ShippingZone::International => &[ShippingMethod::Standard, ShippingMethod::Express],
        }
    }
}

/// Rate table used to price a quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: f64,
    pub domestic_base_rate: f64,
    pub international_base_rate: f64,
    /// Pounds shipped before the weight surcharge applies.
    pub free_weight_allowance: f64,
    pub surcharge_per_pound: f64,
}

impl ShippingPolicy {
    pub const STANDARD: ShippingPolicy = ShippingPolicy {
        free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
        domestic_base_rate: 5.99,
        international_base_rate: 15.99,
        free_weight_allowance: 5.0,
        surcharge_per_pound: 0.50,
    };

    pub fn zone_rate(&self, zone: ShippingZone) -> f64 {
        match zone {
            ShippingZone::Domestic => self.domestic_base_rate,
            ShippingZone::International => self.international_base_rate,
        }
    }

    pub fn weight_surcharge(&self, total_weight: f64) -> f64 {
        if total_weight > self.free_weight_allowance {
            (total_weight - self.free_weight_allowance) * self.surcharge_per_pound
        } else {
            0.0
        }
    }

    pub fn qualifies_for_free_shipping(&self, subtotal: f64) -> bool {
        subtotal >= self.free_shipping_threshold
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domestic_aliases_are_case_insensitive() {
        for country in ["US", "us", "Usa", "united states", "United States"] {
            assert_eq!(
                ShippingZone::from_destination(Some(country)),
                ShippingZone::Domestic,
                "{country}"
            );
        }
        assert_eq!(ShippingZone::from_destination(None), ShippingZone::Domestic);
    }

    #[test]
    fn blank_and_padded_destinations_ship_domestically() {
        for country in ["", "   ", "  us ", "\tUSA\n"] {
            assert_eq!(
                ShippingZone::from_destination(Some(country)),
                ShippingZone::Domestic,
                "{country:?}"
            );
        }
    }

    #[test]
    fn other_countries_are_international() {
        for country in ["CA", "Canada", "United Kingdom", "U.S."] {
            assert_eq!(
                ShippingZone::from_destination(Some(country)),
                ShippingZone::International,
                "{country}"
            );
        }
    }

    #[test]
    fn international_never_offers_overnight() {
        assert!(!ShippingZone::International
            .available_methods()
            .contains(&ShippingMethod::Overnight));
        assert_eq!(ShippingZone::Domestic.available_methods().len(), 3);
    }

    #[test]
    fn surcharge_starts_after_five_pounds() {
        let policy = ShippingPolicy::STANDARD;
        assert_eq!(policy.weight_surcharge(0.0), 0.0);
        assert_eq!(policy.weight_surcharge(5.0), 0.0);
        assert_eq!(policy.weight_surcharge(7.0), 1.0);
    }

    #[test]
    fn parses_method_names() {
        assert_eq!("Express".parse::<ShippingMethod>(), Ok(ShippingMethod::Express));
        assert_eq!(" overnight ".parse::<ShippingMethod>(), Ok(ShippingMethod::Overnight));
        assert!("teleport".parse::<ShippingMethod>().is_err());
    }
}
