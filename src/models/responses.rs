use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, RankedAnimal};

/// Response written by the runner, shaped by the request mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchResponse {
    RankAnimals(RankAnimalsResponse),
    ScoreApplications(ScoreApplicationsResponse),
}

/// Response for a `rank_animals` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankAnimalsResponse {
    pub run_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub total_candidates: usize,
    pub matches: Vec<RankedAnimal>,
}

/// Response for a `score_applications` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreApplicationsResponse {
    pub run_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub results: Vec<MatchResult>,
}

/// Error body written to stdout when a run fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
