//! Round configuration passed in explicitly by the driving application.

use serde::{Deserialize, Serialize};

/// Who leads the trick after one resolves.
///
/// The observed table rule keeps the round's fixed rotation regardless of
/// who won, which is unusual for the family; conventional play hands the
/// lead to the trick winner. Kept as an explicit policy rather than
/// silently picking one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum LeadPolicy {
    /// Every trick starts from the round's first seat, in rotation order.
    #[default]
    FixedRotation,
    /// The winner of a trick leads the next one.
    WinnerLeads,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct RoundConfig {
    pub lead_policy: LeadPolicy,
}
