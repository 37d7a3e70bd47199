use crate::models::domain::MatchProfile;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find teammate matches for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
}

fn default_limit() -> u16 {
    20
}

/// Request to score one explicit viewer/candidate pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    pub viewer: MatchProfile,
    pub candidate: MatchProfile,
}
