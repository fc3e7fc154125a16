use serde::{Deserialize, Serialize};

use crate::eco::{CompletenessBreakdown, ShopEcoProfile, ShopTier};

/// What a prospective seller submits when applying to open a shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerApplication {
    pub business_name: String,
    pub business_description: String,
    pub eco_profile: ShopEcoProfile,
}

/// Expected turnaround shown to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewTime {
    #[serde(rename = "Instant")]
    Instant,
    #[serde(rename = "24 hours")]
    OneDay,
    #[serde(rename = "3-5 days")]
    FewDays,
    #[serde(rename = "Under review")]
    UnderReview,
}

impl ReviewTime {
    pub const fn label(self) -> &'static str {
        match self {
            ReviewTime::Instant => "Instant",
            ReviewTime::OneDay => "24 hours",
            ReviewTime::FewDays => "3-5 days",
            ReviewTime::UnderReview => "Under review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationScore {
    pub completeness: CompletenessBreakdown,
    pub tier: ShopTier,
    pub auto_approval_eligible: bool,
    pub estimated_review_time: ReviewTime,
    pub red_flags: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// Guidance returned with a declined application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionFeedback {
    pub reason: String,
    pub missing_practices: Vec<String>,
    pub actionable_steps: Vec<String>,
    pub resource_links: Vec<String>,
}
