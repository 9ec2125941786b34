// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdopterRecord, AnimalRecord, Application, AdopterProfile, AnimalProfile, ExperienceLevel,
    HousingType, SpaceNeeds, ActivityLevel, EnergyLevel, AnimalSize, SizePreference,
    CriterionKind, CriterionScore, MatchResult, RankedAnimal, MatchingOptions,
};
pub use requests::{MatchRequest, RankAnimalsRequest, ScoreApplicationsRequest};
pub use responses::{MatchResponse, RankAnimalsResponse, ScoreApplicationsResponse, ErrorResponse};
