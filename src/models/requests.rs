use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AdopterRecord, AnimalRecord, Application};

/// Batch request read by the runner, tagged by `mode`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MatchRequest {
    RankAnimals(RankAnimalsRequest),
    ScoreApplications(ScoreApplicationsRequest),
}

impl MatchRequest {
    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            MatchRequest::RankAnimals(req) => req.validate(),
            MatchRequest::ScoreApplications(req) => req.validate(),
        }
    }

    /// Number of (adopter, animal) pairs the request will score
    pub fn pair_count(&self) -> usize {
        match self {
            MatchRequest::RankAnimals(req) => req.animals.len(),
            MatchRequest::ScoreApplications(req) => req.applications.len(),
        }
    }
}

/// Rank a set of animals for one adopter
///
/// Batch size is bounded by the runner's configured `max_batch_size`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankAnimalsRequest {
    #[validate(nested)]
    pub adopter: AdopterRecord,
    #[serde(default)]
    pub animals: Vec<AnimalRecord>,
    /// Keep only the first `limit` ranked animals
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Score applications submitted for review, in submission order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreApplicationsRequest {
    #[serde(default)]
    pub applications: Vec<Application>,
}
