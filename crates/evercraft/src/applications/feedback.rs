use super::domain::RejectionFeedback;
use super::evaluation::{calculate_application_completeness, ApplicationPolicy};
use crate::eco::ShopEcoProfile;

/// Pages linked from every rejection notice.
pub const RESOURCE_LINKS: [&str; 3] = ["/apply", "/impact", "/seller-guide"];

pub fn generate_rejection_feedback(profile: &ShopEcoProfile, score: u8) -> RejectionFeedback {
    let policy = ApplicationPolicy::STANDARD;
    let missing_practices = profile.missing_practices();
    let completeness = calculate_application_completeness(profile);

    let reason = if score < policy.tiers.verified {
        format!(
            "Your eco-profile is {score}% complete; we need at least {}% before a shop can be reviewed.",
            policy.tiers.verified
        )
    } else {
        format!(
            "Your eco-profile is {score}% complete, but your application did not meet our marketplace standards."
        )
    };

    let mut actionable_steps = Vec::new();
    if !missing_practices.is_empty() {
        actionable_steps.push(format!(
            "Adopt and document more sustainability practices ({} not yet reported)",
            missing_practices.len()
        ));
    }
    if completeness.tier2_count < completeness.tier2_max {
        actionable_steps.push(
            "Add measured impact data: annual carbon emissions, offset share and renewable energy share"
                .to_string(),
        );
    }
    actionable_steps.push(
        "Explain how your products are made and avoid resale or dropshipping language".to_string(),
    );
    actionable_steps.push("Reapply once your eco-profile is updated".to_string());

    RejectionFeedback {
        reason,
        missing_practices,
        actionable_steps,
        resource_links: RESOURCE_LINKS.iter().map(|link| link.to_string()).collect(),
    }
}
