use crate::config::{MatchingSettings, Settings};
use crate::core::Matcher;
use crate::error::AppError;
use crate::models::{
    MatchRequest, MatchResponse, RankAnimalsResponse, ScoreApplicationsResponse,
};
use std::io::Read;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "ADOPT_CONFIG";

/// Load settings from `config_path` when given, otherwise from the
/// default layered sources
pub fn load_settings(config_path: Option<&str>) -> Result<Settings, AppError> {
    let settings = match config_path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}

/// Parse one JSON request from a reader
pub fn read_request<R: Read>(reader: R) -> Result<MatchRequest, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Validate a request and run it through the matcher
///
/// Rejects requests that fail validation or score more pairs than
/// `settings.max_batch_size`.
pub fn execute(
    matcher: &Matcher,
    request: MatchRequest,
    settings: &MatchingSettings,
) -> Result<MatchResponse, AppError> {
    if let Err(errors) = request.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let size = request.pair_count();
    if size > settings.max_batch_size {
        return Err(AppError::BatchTooLarge {
            size,
            max: settings.max_batch_size,
        });
    }

    let response = match request {
        MatchRequest::RankAnimals(req) => {
            let total_candidates = req.animals.len();
            tracing::info!(
                "Ranking {} animals for adopter: {}",
                total_candidates,
                req.adopter.id
            );

            let mut matches = matcher.rank_animals_for_adopter(&req.adopter, req.animals);
            if let Some(limit) = req.limit {
                matches.truncate(limit);
            }

            tracing::info!(
                "Returning {} matches for adopter {} (from {} candidates)",
                matches.len(),
                req.adopter.id,
                total_candidates
            );

            MatchResponse::RankAnimals(RankAnimalsResponse {
                run_id: uuid::Uuid::new_v4(),
                generated_at: chrono::Utc::now(),
                total_candidates,
                matches,
            })
        }
        MatchRequest::ScoreApplications(req) => {
            tracing::info!("Scoring {} applications", req.applications.len());

            let results = matcher.score_applications(&req.applications);

            MatchResponse::ScoreApplications(ScoreApplicationsResponse {
                run_id: uuid::Uuid::new_v4(),
                generated_at: chrono::Utc::now(),
                results,
            })
        }
    };

    Ok(response)
}
