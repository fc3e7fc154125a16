use serde::{Deserialize, Serialize};

use super::profile::{ProductEcoProfile, ShopEcoProfile, Tier2Presence};
use crate::rounding::round_score;

/// Points available from tier-1 practice flags.
pub const TIER1_WEIGHT: f64 = 70.0;
/// Points available from tier-2 detail fields.
pub const TIER2_WEIGHT: f64 = 30.0;

/// Score plus the counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessBreakdown {
    pub score: u8,
    pub tier1_count: usize,
    pub tier1_max: usize,
    pub tier2_count: usize,
    pub tier2_max: usize,
}

/// Weights both tiers and rounds the sum once.
pub fn weighted_completeness(
    tier1_count: usize,
    tier1_max: usize,
    tier2_count: usize,
    tier2_max: usize,
) -> CompletenessBreakdown {
    let share = |count: usize, max: usize| {
        if max == 0 {
            0.0
        } else {
            count as f64 / max as f64
        }
    };

    let raw = share(tier1_count, tier1_max) * TIER1_WEIGHT
        + share(tier2_count, tier2_max) * TIER2_WEIGHT;

    CompletenessBreakdown {
        score: round_score(raw),
        tier1_count,
        tier1_max,
        tier2_count,
        tier2_max,
    }
}

pub fn shop_completeness(profile: &ShopEcoProfile) -> CompletenessBreakdown {
    weighted_completeness(
        profile.tier1_count(),
        ShopEcoProfile::TIER1_FIELDS,
        profile.tier2_count(Tier2Presence::AnyValue),
        ShopEcoProfile::TIER2_FIELDS,
    )
}

pub fn calculate_shop_completeness(profile: &ShopEcoProfile) -> u8 {
    shop_completeness(profile).score
}

pub fn product_completeness(profile: &ProductEcoProfile) -> CompletenessBreakdown {
    weighted_completeness(
        profile.tier1_count(),
        ProductEcoProfile::TIER1_FIELDS,
        profile.tier2_count(),
        ProductEcoProfile::TIER2_FIELDS,
    )
}

pub fn calculate_product_completeness(profile: &ProductEcoProfile) -> u8 {
    product_completeness(profile).score
}

/// Badge level earned from a completeness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopTier {
    Starter,
    Verified,
    Certified,
}

impl ShopTier {
    pub const fn label(self) -> &'static str {
        match self {
            ShopTier::Starter => "starter",
            ShopTier::Verified => "verified",
            ShopTier::Certified => "certified",
        }
    }
}

/// Inclusive lower bounds for each tier above starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub verified: u8,
    pub certified: u8,
}

impl TierThresholds {
    pub const STANDARD: TierThresholds = TierThresholds {
        verified: 60,
        certified: 85,
    };

    pub fn tier_for(&self, score: u8) -> ShopTier {
        if score >= self.certified {
            ShopTier::Certified
        } else if score >= self.verified {
            ShopTier::Verified
        } else {
            ShopTier::Starter
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub fn calculate_shop_tier(score: u8) -> ShopTier {
    TierThresholds::STANDARD.tier_for(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_shop() -> ShopEcoProfile {
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
            carbon_offset: true,
            annual_carbon_emissions: Some(12.0),
            carbon_offset_percent: Some(40.0),
            renewable_energy_percent: Some(75.0),
            water_conservation: true,
            fair_wage_certified: true,
            take_back_program: true,
            repair_service: true,
        }
    }

    #[test]
    fn complete_shop_scores_one_hundred() {
        let breakdown = shop_completeness(&full_shop());
        assert_eq!(breakdown.score, 100);
        assert_eq!(breakdown.tier1_count, 10);
        assert_eq!(breakdown.tier2_count, 7);
    }

    #[test]
    fn empty_shop_scores_zero() {
        assert_eq!(calculate_shop_completeness(&ShopEcoProfile::default()), 0);
    }

    #[test]
    fn three_practices_are_worth_twenty_one_points() {
        let profile = ShopEcoProfile {
            organic_materials: true,
            local_sourcing: true,
            renewable_energy: true,
            ..Default::default()
        };
        assert_eq!(calculate_shop_completeness(&profile), 21);
    }

    #[test]
    fn tier2_fractions_round_with_the_total() {
        let one = ShopEcoProfile {
            repair_service: true,
            ..Default::default()
        };
        assert_eq!(calculate_shop_completeness(&one), 4);

        let two = ShopEcoProfile {
            repair_service: true,
            water_conservation: true,
            ..Default::default()
        };
        assert_eq!(calculate_shop_completeness(&two), 9);

        let mixed = ShopEcoProfile {
            organic_materials: true,
            local_sourcing: true,
            renewable_energy: true,
            repair_service: true,
            ..Default::default()
        };
        assert_eq!(calculate_shop_completeness(&mixed), 25);

        let summed = ShopEcoProfile {
            organic_materials: true,
            repair_service: true,
            annual_carbon_emissions: Some(3.0),
            ..Default::default()
        };
        assert_eq!(shop_completeness(&summed).tier2_count, 2);
        assert_eq!(calculate_shop_completeness(&summed), 16);
    }

    #[test]
    fn zero_emissions_count_as_reported_for_shops() {
        let profile = ShopEcoProfile {
            annual_carbon_emissions: Some(0.0),
            ..Default::default()
        };
        assert_eq!(shop_completeness(&profile).tier2_count, 1);
        assert_eq!(calculate_shop_completeness(&profile), 4);
    }

    #[test]
    fn single_product_attribute_scores_four() {
        let profile = ProductEcoProfile {
            is_vegan: true,
            ..Default::default()
        };
        let breakdown = product_completeness(&profile);
        assert_eq!(breakdown.score, 4);
        assert_eq!(breakdown.tier1_max, 17);
        assert_eq!(breakdown.tier2_max, 5);
    }

    #[test]
    fn product_detail_fields_fill_the_tier2_share() {
        let profile = ProductEcoProfile {
            recycled_content_percent: Some(0.0),
            expected_lifespan_years: Some(10.0),
            carbon_footprint_kg: Some(1.2),
            materials_breakdown: Some("100% organic cotton".to_string()),
            end_of_life_instructions: Some("Compost".to_string()),
            ..Default::default()
        };
        assert_eq!(calculate_product_completeness(&profile), 30);
    }

    #[test]
    fn fully_described_product_scores_one_hundred() {
        let profile = ProductEcoProfile {
            is_organic: true,
            is_recycled: true,
            is_biodegradable: true,
            is_vegan: true,
            is_fair_trade: true,
            plastic_free_packaging: true,
            recyclable_packaging: true,
            compostable_packaging: true,
            minimal_packaging: true,
            carbon_neutral_shipping: true,
            made_locally: true,
            made_to_order: true,
            renewable_energy_made: true,
            durable_design: true,
            repairable: true,
            take_back_eligible: true,
            zero_waste_production: true,
            recycled_content_percent: Some(80.0),
            expected_lifespan_years: Some(5.0),
            carbon_footprint_kg: Some(2.4),
            materials_breakdown: Some("Recycled aluminium".to_string()),
            end_of_life_instructions: Some("Return for refill".to_string()),
        };
        let breakdown = product_completeness(&profile);
        assert_eq!(breakdown.tier1_count, 17);
        assert_eq!(breakdown.tier2_count, 5);
        assert_eq!(breakdown.score, 100);
    }

    #[test]
    fn mixed_product_rounds_the_weighted_sum() {
        // 5/17 * 70 = 20.59 and 2/5 * 30 = 12.
        let profile = ProductEcoProfile {
            is_organic: true,
            is_vegan: true,
            plastic_free_packaging: true,
            made_locally: true,
            repairable: true,
            carbon_footprint_kg: Some(0.8),
            materials_breakdown: Some("Organic linen".to_string()),
            end_of_life_instructions: Some(String::new()),
            ..Default::default()
        };
        let breakdown = product_completeness(&profile);
        assert_eq!(breakdown.tier1_count, 5);
        assert_eq!(breakdown.tier2_count, 2);
        assert_eq!(breakdown.score, 33);
    }

    #[test]
    fn tier_boundaries_are_inclusive_lower() {
        assert_eq!(calculate_shop_tier(0), ShopTier::Starter);
        assert_eq!(calculate_shop_tier(59), ShopTier::Starter);
        assert_eq!(calculate_shop_tier(60), ShopTier::Verified);
        assert_eq!(calculate_shop_tier(84), ShopTier::Verified);
        assert_eq!(calculate_shop_tier(85), ShopTier::Certified);
        assert_eq!(calculate_shop_tier(100), ShopTier::Certified);
    }

    #[test]
    fn scoring_is_idempotent() {
        let profile = full_shop();
        assert_eq!(shop_completeness(&profile), shop_completeness(&profile));
    }
}
