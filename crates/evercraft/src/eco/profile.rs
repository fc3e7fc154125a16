use serde::{Deserialize, Serialize};

/// How a numeric tier-2 field qualifies as filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier2Presence {
    /// Any recorded value, zero included.
    AnyValue,
    /// Only values above zero.
    StrictlyPositive,
}

impl Tier2Presence {
    pub fn counts(self, value: Option<f64>) -> bool {
        match (self, value) {
            (_, None) => false,
            (Tier2Presence::AnyValue, Some(_)) => true,
            (Tier2Presence::StrictlyPositive, Some(value)) => value > 0.0,
        }
    }
}

/// Sustainability practices a shop reports about itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopEcoProfile {
    pub plastic_free_packaging: bool,
    pub recycled_packaging: bool,
    pub biodegradable_packaging: bool,
    pub organic_materials: bool,
    pub recycled_materials: bool,
    pub fair_trade_sourcing: bool,
    pub local_sourcing: bool,
    pub carbon_neutral_shipping: bool,
    pub renewable_energy: bool,
    pub carbon_offset: bool,

    /// Tonnes of CO2e per year.
    pub annual_carbon_emissions: Option<f64>,
    pub carbon_offset_percent: Option<f64>,
    pub renewable_energy_percent: Option<f64>,
    pub water_conservation: bool,
    pub fair_wage_certified: bool,
    pub take_back_program: bool,
    pub repair_service: bool,
}

impl ShopEcoProfile {
    pub const TIER1_FIELDS: usize = 10;
    pub const TIER2_FIELDS: usize = 7;

    /// Tier-1 flags paired with their display names, in declaration order.
    pub fn practices(&self) -> [(&'static str, bool); Self::TIER1_FIELDS] {
        [
            ("Plastic-free packaging", self.plastic_free_packaging),
            ("Recycled packaging", self.recycled_packaging),
            ("Biodegradable packaging", self.biodegradable_packaging),
            ("Organic materials", self.organic_materials),
            ("Recycled materials", self.recycled_materials),
            ("Fair trade sourcing", self.fair_trade_sourcing),
            ("Local sourcing", self.local_sourcing),
            ("Carbon-neutral shipping", self.carbon_neutral_shipping),
            ("Renewable energy", self.renewable_energy),
            ("Carbon offset program", self.carbon_offset),
        ]
    }

    pub fn tier1_count(&self) -> usize {
        self.practices().iter().filter(|(_, enabled)| *enabled).count()
    }

    pub fn tier2_count(&self, presence: Tier2Presence) -> usize {
        let metrics = [
            self.annual_carbon_emissions,
            self.carbon_offset_percent,
            self.renewable_energy_percent,
        ]
        .into_iter()
        .filter(|value| presence.counts(*value))
        .count();

        let programs = [
            self.water_conservation,
            self.fair_wage_certified,
            self.take_back_program,
            self.repair_service,
        ]
        .into_iter()
        .filter(|enabled| *enabled)
        .count();

        metrics + programs
    }

    pub fn missing_practices(&self) -> Vec<String> {
        self.practices()
            .iter()
            .filter(|(_, enabled)| !enabled)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Sustainability attributes recorded for a single listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductEcoProfile {
    pub is_organic: bool,
    pub is_recycled: bool,
    pub is_biodegradable: bool,
    pub is_vegan: bool,
    pub is_fair_trade: bool,
    pub plastic_free_packaging: bool,
    pub recyclable_packaging: bool,
    pub compostable_packaging: bool,
    pub minimal_packaging: bool,
    pub carbon_neutral_shipping: bool,
    pub made_locally: bool,
    pub made_to_order: bool,
    pub renewable_energy_made: bool,
    pub durable_design: bool,
    pub repairable: bool,
    pub take_back_eligible: bool,
    pub zero_waste_production: bool,

    pub recycled_content_percent: Option<f64>,
    pub expected_lifespan_years: Option<f64>,
    /// Kilograms of CO2e per unit.
    pub carbon_footprint_kg: Option<f64>,
    pub materials_breakdown: Option<String>,
    pub end_of_life_instructions: Option<String>,
}

impl ProductEcoProfile {
    pub const TIER1_FIELDS: usize = 17;
    pub const TIER2_FIELDS: usize = 5;

    pub fn attributes(&self) -> [(&'static str, bool); Self::TIER1_FIELDS] {
        [
            ("Organic", self.is_organic),
            ("Recycled", self.is_recycled),
            ("Biodegradable", self.is_biodegradable),
            ("Vegan", self.is_vegan),
            ("Fair trade", self.is_fair_trade),
            ("Plastic-free packaging", self.plastic_free_packaging),
            ("Recyclable packaging", self.recyclable_packaging),
            ("Compostable packaging", self.compostable_packaging),
            ("Minimal packaging", self.minimal_packaging),
            ("Carbon-neutral shipping", self.carbon_neutral_shipping),
            ("Made locally", self.made_locally),
            ("Made to order", self.made_to_order),
            ("Made with renewable energy", self.renewable_energy_made),
            ("Durable design", self.durable_design),
            ("Repairable", self.repairable),
            ("Take-back eligible", self.take_back_eligible),
            ("Zero-waste production", self.zero_waste_production),
        ]
    }

    pub fn tier1_count(&self) -> usize {
        self.attributes().iter().filter(|(_, enabled)| *enabled).count()
    }

    pub fn tier2_count(&self) -> usize {
        let metrics = [
            self.recycled_content_percent,
            self.expected_lifespan_years,
            self.carbon_footprint_kg,
        ]
        .into_iter()
        .filter(|value| Tier2Presence::AnyValue.counts(*value))
        .count();

        let notes = [&self.materials_breakdown, &self.end_of_life_instructions]
            .into_iter()
            .filter(|text| text.as_deref().is_some_and(|text| !text.is_empty()))
            .count();

        metrics + notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_only_under_any_value() {
        assert!(Tier2Presence::AnyValue.counts(Some(0.0)));
        assert!(!Tier2Presence::StrictlyPositive.counts(Some(0.0)));
        assert!(Tier2Presence::StrictlyPositive.counts(Some(0.1)));
        assert!(!Tier2Presence::AnyValue.counts(None));
    }

    #[test]
    fn empty_json_is_an_empty_shop_profile() {
        let profile: ShopEcoProfile = serde_json::from_str("{}").expect("valid json");
        assert_eq!(profile, ShopEcoProfile::default());
        assert_eq!(profile.tier1_count(), 0);
        assert_eq!(profile.missing_practices().len(), 10);
    }

    #[test]
    fn missing_practices_follow_declaration_order() {
        let profile = ShopEcoProfile {
            plastic_free_packaging: true,
            renewable_energy: true,
            ..Default::default()
        };
        let missing = profile.missing_practices();
        assert_eq!(missing.len(), 8);
        assert_eq!(missing[0], "Recycled packaging");
        assert_eq!(missing.last().map(String::as_str), Some("Carbon offset program"));
    }

    #[test]
    fn empty_product_notes_do_not_count() {
        let profile = ProductEcoProfile {
            materials_breakdown: Some(String::new()),
            end_of_life_instructions: Some("Compost at home".to_string()),
            carbon_footprint_kg: Some(0.0),
            ..Default::default()
        };
        assert_eq!(profile.tier2_count(), 2);
    }
}
