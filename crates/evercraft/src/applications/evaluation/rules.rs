use crate::eco::{weighted_completeness, CompletenessBreakdown, ShopEcoProfile, Tier2Presence};

const SUGGESTED_PRACTICES: usize = 3;

/// Shop completeness where numeric metrics only count when strictly positive.
pub fn calculate_application_completeness(profile: &ShopEcoProfile) -> CompletenessBreakdown {
    weighted_completeness(
        profile.tier1_count(),
        ShopEcoProfile::TIER1_FIELDS,
        profile.tier2_count(Tier2Presence::StrictlyPositive),
        ShopEcoProfile::TIER2_FIELDS,
    )
}

pub(crate) fn improvement_suggestions(
    profile: &ShopEcoProfile,
    completeness: &CompletenessBreakdown,
    red_flags: &[String],
    positive_signal: bool,
) -> Vec<String> {
    let mut suggestions: Vec<String> = profile
        .missing_practices()
        .into_iter()
        .take(SUGGESTED_PRACTICES)
        .map(|practice| format!("Adopt {}", practice.to_lowercase()))
        .collect();

    if completeness.tier2_count < completeness.tier2_max {
        suggestions.push(
            "Share detailed metrics such as annual carbon emissions, offsets and renewable energy use"
                .to_string(),
        );
    }

    for flag in red_flags {
        suggestions.push(format!(
            "Remove or clarify '{flag}' in your business description"
        ));
    }

    if !positive_signal {
        suggestions.push(
            "Describe what makes your products sustainable, e.g. handmade, recycled or certified"
                .to_string(),
        );
    }

    suggestions
}
