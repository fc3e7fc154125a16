//! Eco-profile completeness scoring for shops and products.
//!
//! Tier-1 practice flags carry 70 points and tier-2 detail fields carry 30; the sum is rounded
//! once.

mod completeness;
mod profile;

pub use completeness::{
    calculate_product_completeness, calculate_shop_completeness, calculate_shop_tier,
    product_completeness, shop_completeness, weighted_completeness, CompletenessBreakdown,
    ShopTier, TierThresholds, TIER1_WEIGHT, TIER2_WEIGHT,
};
pub use profile::{ProductEcoProfile, ShopEcoProfile, Tier2Presence};
