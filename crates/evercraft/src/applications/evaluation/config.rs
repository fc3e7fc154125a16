use crate::eco::TierThresholds;

/// Thresholds applied when screening seller applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationPolicy {
    pub auto_approval_min_score: u8,
    pub tiers: TierThresholds,
    /// Starter-tier applications at or above this score get the shorter review estimate.
    pub starter_fast_track_min_score: u8,
}

impl ApplicationPolicy {
    pub const STANDARD: ApplicationPolicy = ApplicationPolicy {
        auto_approval_min_score: 85,
        tiers: TierThresholds::STANDARD,
        starter_fast_track_min_score: 60,
    };
}

impl Default for ApplicationPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}
