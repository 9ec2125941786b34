// Core engine exports
pub mod aggregate;
pub mod applicant;
pub mod matcher;
pub mod normalize;
pub mod ranking;
pub mod scoring;
pub mod tables;

pub use aggregate::{aggregate, CriterionOutcome, CriterionSpec, Reason, ScoringScheme, MAX_SCORE, MIN_SCORE};
pub use applicant::{calculate_application_score, APPLICANT_REVIEW};
pub use matcher::Matcher;
pub use normalize::{normalize_adopter, normalize_animal};
pub use ranking::rank_by_score;
pub use scoring::{calculate_match_score, temperament_points, ADOPTER_CENTRIC};
pub use tables::{activity_points, housing_points, DEFAULT_COMBINATION_SCORE};
