mod config;
mod policy;
mod rules;

pub use config::ApplicationPolicy;
pub use policy::{check_auto_approval_eligibility, determine_tier, estimate_review_time};
pub use rules::calculate_application_completeness;

use super::domain::{ApplicationScore, SellerApplication};
use super::screening::ScreeningKeywords;
use tracing::debug;

/// Stateless scorer holding the thresholds and keyword tables it applies.
#[derive(Debug, Clone, Default)]
pub struct ApplicationScorer {
    policy: ApplicationPolicy,
    keywords: ScreeningKeywords,
}

impl ApplicationScorer {
    pub fn new(policy: ApplicationPolicy, keywords: ScreeningKeywords) -> Self {
        Self { policy, keywords }
    }

    pub fn policy(&self) -> &ApplicationPolicy {
        &self.policy
    }

    pub fn keywords(&self) -> &ScreeningKeywords {
        &self.keywords
    }

    pub fn score(&self, application: &SellerApplication) -> ApplicationScore {
        let description = application.business_description.as_str();
        let completeness = calculate_application_completeness(&application.eco_profile);
        let tier = self.policy.tiers.tier_for(completeness.score);
        let red_flags = self.keywords.red_flags_in(description);
        let positive_signal = self.keywords.has_positive_signal(description);

        let auto_approval_eligible = policy::auto_approval_eligible(
            &self.policy,
            &self.keywords,
            completeness.score,
            description,
        );
        let estimated_review_time =
            policy::review_time(&self.policy, auto_approval_eligible, tier, completeness.score);

        debug!(
            business = %application.business_name,
            score = completeness.score,
            tier = tier.label(),
            auto_approval_eligible,
            red_flags = red_flags.len(),
            "scored seller application"
        );

        let improvement_suggestions = rules::improvement_suggestions(
            &application.eco_profile,
            &completeness,
            &red_flags,
            positive_signal,
        );

        ApplicationScore {
            completeness,
            tier,
            auto_approval_eligible,
            estimated_review_time,
            red_flags,
            improvement_suggestions,
        }
    }
}

/// Scores an application with the standard policy and keyword tables.
pub fn score_application(application: &SellerApplication) -> ApplicationScore {
    ApplicationScorer::default().score(application)
}
