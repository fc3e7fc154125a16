//! Seller application screening.
//!
//! An application is scored from its shop eco-profile and its free-text business description.
//! Nothing here fails: absent fields simply lower the score.

pub mod domain;
pub(crate) mod evaluation;
mod feedback;
pub mod router;
mod screening;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationScore, RejectionFeedback, ReviewTime, SellerApplication};
pub use evaluation::{
    calculate_application_completeness, check_auto_approval_eligibility, determine_tier,
    estimate_review_time, score_application, ApplicationPolicy, ApplicationScorer,
};
pub use feedback::{generate_rejection_feedback, RESOURCE_LINKS};
pub use router::application_router;
pub use screening::{get_red_flags, has_positive_signals, passes_red_flag_check, ScreeningKeywords};
