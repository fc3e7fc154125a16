use super::config::ApplicationPolicy;
use crate::applications::domain::ReviewTime;
use crate::applications::screening::ScreeningKeywords;
use crate::eco::ShopTier;

pub fn determine_tier(score: u8) -> ShopTier {
    ApplicationPolicy::STANDARD.tiers.tier_for(score)
}

/// Requires the score threshold, a clean description and at least one positive signal.
pub fn check_auto_approval_eligibility(score: u8, business_description: &str) -> bool {
    auto_approval_eligible(
        &ApplicationPolicy::STANDARD,
        &ScreeningKeywords::STANDARD,
        score,
        business_description,
    )
}

pub fn estimate_review_time(auto_approval_eligible: bool, tier: ShopTier, score: u8) -> ReviewTime {
    review_time(&ApplicationPolicy::STANDARD, auto_approval_eligible, tier, score)
}

pub(crate) fn auto_approval_eligible(
    policy: &ApplicationPolicy,
    keywords: &ScreeningKeywords,
    score: u8,
    business_description: &str,
) -> bool {
    score >= policy.auto_approval_min_score
        && keywords.passes_red_flag_check(business_description)
        && keywords.has_positive_signal(business_description)
}

// The starter fast-track branch only fires for a tier computed with other thresholds.
pub(crate) fn review_time(
    policy: &ApplicationPolicy,
    auto_approval_eligible: bool,
    tier: ShopTier,
    score: u8,
) -> ReviewTime {
    if auto_approval_eligible {
        ReviewTime::Instant
    } else if tier == ShopTier::Verified {
        ReviewTime::OneDay
    } else if tier == ShopTier::Starter && score >= policy.starter_fast_track_min_score {
        ReviewTime::FewDays
    } else {
        ReviewTime::UnderReview
    }
}
