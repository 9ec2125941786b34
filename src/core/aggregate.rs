use crate::models::{AdopterProfile, AnimalProfile, CriterionKind, CriterionScore, MatchResult};

/// Lower bound of every aggregated score
pub const MIN_SCORE: u32 = 0;

/// Upper bound of every aggregated score
pub const MAX_SCORE: u32 = 100;

/// Explanation attached to a criterion result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Positive(String),
    Negative(String),
}

/// Points and optional explanation produced by one criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionOutcome {
    pub points: u8,
    pub reason: Option<Reason>,
}

impl CriterionOutcome {
    pub fn silent(points: u8) -> Self {
        Self { points, reason: None }
    }

    pub fn positive(points: u8, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(Reason::Positive(reason.into())),
        }
    }

    pub fn negative(points: u8, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(Reason::Negative(reason.into())),
        }
    }
}

pub type CriterionFn = fn(&AdopterProfile, &AnimalProfile) -> CriterionOutcome;

/// One entry of a scoring scheme
#[derive(Clone, Copy)]
pub struct CriterionSpec {
    pub kind: CriterionKind,
    pub max_points: u8,
    pub evaluate: CriterionFn,
}

/// Ordered criterion list for one matching direction
///
/// The order of `criteria` is the evaluation order, which is also the
/// order reasons appear in the result.
#[derive(Clone, Copy)]
pub struct ScoringScheme {
    pub name: &'static str,
    pub criteria: &'static [CriterionSpec],
}

impl ScoringScheme {
    /// Highest total the criteria can award before clamping
    pub fn max_total(&self) -> u32 {
        self.criteria.iter().map(|c| c.max_points as u32).sum()
    }

    /// Score one normalized pair
    pub fn evaluate(&self, adopter: &AdopterProfile, animal: &AnimalProfile) -> MatchResult {
        let outcomes = self
            .criteria
            .iter()
            .map(|spec| (spec, (spec.evaluate)(adopter, animal)));

        aggregate(&adopter.id, &animal.id, outcomes)
    }
}

impl std::fmt::Debug for ScoringScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringScheme")
            .field("name", &self.name)
            .field(
                "criteria",
                &self.criteria.iter().map(|c| c.kind).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Sum criterion contributions in evaluation order and clamp to `[0, 100]`
///
/// Each contribution is first capped at its criterion's `max_points`.
pub fn aggregate<'a, I>(adopter_id: &str, animal_id: &str, outcomes: I) -> MatchResult
where
    I: IntoIterator<Item = (&'a CriterionSpec, CriterionOutcome)>,
{
    let mut total: u32 = 0;
    let mut reasons = Vec::new();
    let mut negative_reasons = Vec::new();
    let mut breakdown = Vec::new();

    for (spec, outcome) in outcomes {
        let points = outcome.points.min(spec.max_points);
        total += points as u32;
        breakdown.push(CriterionScore {
            criterion: spec.kind,
            points,
        });

        match outcome.reason {
            Some(Reason::Positive(text)) => reasons.push(text),
            Some(Reason::Negative(text)) => negative_reasons.push(text),
            None => {}
        }
    }

    MatchResult {
        adopter_id: adopter_id.to_string(),
        animal_id: animal_id.to_string(),
        score: total.clamp(MIN_SCORE, MAX_SCORE) as u8,
        reasons,
        negative_reasons,
        breakdown,
    }
}
