use crate::core::aggregate::{CriterionOutcome, CriterionSpec, ScoringScheme};
use crate::core::tables::{activity_points, housing_points};
use crate::models::{
    AdopterProfile, AnimalProfile, CriterionKind, ExperienceLevel, MatchResult, SizePreference,
};

/// Points per temperament trait shared by adopter and animal
pub const TEMPERAMENT_POINTS_PER_TRAIT: u8 = 3;

/// Cap on the temperament contribution
pub const TEMPERAMENT_MAX_POINTS: u8 = 10;

/// Shared traits at which the temperament contribution reaches its cap
pub const TEMPERAMENT_SATURATION_TRAITS: usize = 3;

/// Adopter-centric scheme used to rank animals for one adopter
///
/// Scoring formula:
/// score = min(100,
///     experience   (max 20) +
///     housing      (max 25, table) +
///     activity     (max 20, table) +
///     children     (max 15) +
///     size         (max 10) +
///     temperament  (max 10)
/// )
pub const ADOPTER_CENTRIC: ScoringScheme = ScoringScheme {
    name: "adopter-centric",
    criteria: &[
        CriterionSpec {
            kind: CriterionKind::Experience,
            max_points: 20,
            evaluate: experience_fit,
        },
        CriterionSpec {
            kind: CriterionKind::Housing,
            max_points: 25,
            evaluate: housing_fit,
        },
        CriterionSpec {
            kind: CriterionKind::Activity,
            max_points: 20,
            evaluate: activity_fit,
        },
        CriterionSpec {
            kind: CriterionKind::Children,
            max_points: 15,
            evaluate: children_fit,
        },
        CriterionSpec {
            kind: CriterionKind::Size,
            max_points: 10,
            evaluate: size_fit,
        },
        CriterionSpec {
            kind: CriterionKind::Temperament,
            max_points: TEMPERAMENT_MAX_POINTS,
            evaluate: temperament_fit,
        },
    ],
};

/// Calculate the adopter-centric match (0-100) for one normalized pair
pub fn calculate_match_score(adopter: &AdopterProfile, animal: &AnimalProfile) -> MatchResult {
    ADOPTER_CENTRIC.evaluate(adopter, animal)
}

/// Temperament points and the number of shared traits
///
/// Three points per shared trait, saturating at the cap once
/// `TEMPERAMENT_SATURATION_TRAITS` traits are shared.
#[inline]
pub fn temperament_points(adopter: &AdopterProfile, animal: &AnimalProfile) -> (u8, usize) {
    let shared = adopter
        .temperament_preference
        .intersection(&animal.temperament)
        .count();

    let points = if shared >= TEMPERAMENT_SATURATION_TRAITS {
        TEMPERAMENT_MAX_POINTS
    } else {
        (shared as u8 * TEMPERAMENT_POINTS_PER_TRAIT).min(TEMPERAMENT_MAX_POINTS)
    };

    (points, shared)
}

fn experience_fit(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    if !animal.requires_experience {
        return CriterionOutcome::positive(20, "Suitable for owners of any experience level");
    }

    match adopter.experience {
        ExperienceLevel::Expert => CriterionOutcome::positive(
            20,
            "Your expert experience suits an animal that needs a seasoned owner",
        ),
        ExperienceLevel::Experienced => {
            CriterionOutcome::positive(15, "Your experience level is a good fit")
        }
        _ => CriterionOutcome::silent(5),
    }
}

fn housing_fit(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    let points = housing_points(adopter.housing, animal.space_needs);

    if points >= 20 {
        CriterionOutcome::positive(points, "Your home is well suited to this animal's space needs")
    } else {
        CriterionOutcome::silent(points)
    }
}

fn activity_fit(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    let points = activity_points(adopter.activity, animal.energy);

    match points {
        20.. => CriterionOutcome::positive(points, "Your activity level matches this animal's energy"),
        15..=19 => CriterionOutcome::positive(
            points,
            "Your activity level is compatible with this animal's energy",
        ),
        _ => CriterionOutcome::silent(points),
    }
}

fn children_fit(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    match (adopter.has_children, animal.good_with_children) {
        (true, true) => CriterionOutcome::positive(15, "Good with children"),
        (false, _) => CriterionOutcome::silent(15),
        (true, false) => CriterionOutcome::silent(5),
    }
}

fn size_fit(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    if adopter.size_preference.names(animal.size) {
        CriterionOutcome::positive(10, "Matches your preferred size")
    } else if adopter.size_preference == SizePreference::Any {
        CriterionOutcome::silent(10)
    } else {
        CriterionOutcome::silent(5)
    }
}

fn temperament_fit(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    let (points, _) = temperament_points(adopter, animal);

    match points {
        8.. => CriterionOutcome::positive(points, "Excellent temperament match"),
        3..=7 => CriterionOutcome::positive(points, "Shares some of your preferred temperament traits"),
        _ => CriterionOutcome::silent(points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::{normalize_adopter, normalize_animal};
    use crate::models::{AdopterRecord, AnimalRecord};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn create_test_adopter() -> AdopterProfile {
        normalize_adopter(&AdopterRecord {
            id: "adopter".to_string(),
            experience_level: Some("experienced".to_string()),
            housing_type: Some("house-with-yard".to_string()),
            has_children: Some(true),
            activity_level: Some("high".to_string()),
            pet_size_preference: Some("medium".to_string()),
            temperament_preference: strings(&["friendly", "energetic", "playful"]),
            ..Default::default()
        })
    }

    fn create_test_animal() -> AnimalProfile {
        normalize_animal(&AnimalRecord {
            id: "animal".to_string(),
            requires_experience: Some(false),
            space_needs: Some("yard-required".to_string()),
            energy_level: Some("high".to_string()),
            good_with_children: Some(true),
            size: Some("medium".to_string()),
            temperament: strings(&["intelligent", "energetic", "friendly", "playful"]),
            ..Default::default()
        })
    }

    #[test]
    fn test_perfect_match() {
        let result = calculate_match_score(&create_test_adopter(), &create_test_animal());

        assert_eq!(result.score, 100);
        assert!(result.negative_reasons.is_empty());
        assert!(result.reasons.contains(&"Excellent temperament match".to_string()));
    }

    #[test]
    fn test_experience_fit() {
        let mut adopter = create_test_adopter();
        let mut animal = create_test_animal();
        assert_eq!(experience_fit(&adopter, &animal).points, 20);

        animal.requires_experience = true;
        assert_eq!(experience_fit(&adopter, &animal).points, 15);

        adopter.experience = ExperienceLevel::Expert;
        assert_eq!(experience_fit(&adopter, &animal).points, 20);

        adopter.experience = ExperienceLevel::Novice;
        let outcome = experience_fit(&adopter, &animal);
        assert_eq!(outcome.points, 5);
        assert!(outcome.reason.is_none());

        adopter.experience = ExperienceLevel::Unknown;
        assert_eq!(experience_fit(&adopter, &animal).points, 5);
    }

    #[test]
    fn test_children_fit() {
        let mut adopter = create_test_adopter();
        let mut animal = create_test_animal();

        animal.good_with_children = false;
        assert_eq!(children_fit(&adopter, &animal).points, 5);

        adopter.has_children = false;
        assert_eq!(children_fit(&adopter, &animal).points, 15);
    }

    #[test]
    fn test_size_fit() {
        let mut adopter = create_test_adopter();
        let animal = create_test_animal();
        assert_eq!(size_fit(&adopter, &animal).points, 10);

        adopter.size_preference = SizePreference::Large;
        assert_eq!(size_fit(&adopter, &animal).points, 5);

        adopter.size_preference = SizePreference::Any;
        let outcome = size_fit(&adopter, &animal);
        assert_eq!(outcome.points, 10);
        assert!(outcome.reason.is_none());

        adopter.size_preference = SizePreference::Unknown;
        assert_eq!(size_fit(&adopter, &animal).points, 5);
    }

    #[test]
    fn test_temperament_points() {
        let mut adopter = create_test_adopter();
        let mut animal = create_test_animal();
        animal.temperament.clear();
        assert_eq!(temperament_points(&adopter, &animal), (0, 0));

        animal.temperament.insert("friendly".to_string());
        assert_eq!(temperament_points(&adopter, &animal), (3, 1));

        animal.temperament.insert("playful".to_string());
        assert_eq!(temperament_points(&adopter, &animal), (6, 2));

        animal.temperament.insert("energetic".to_string());
        assert_eq!(temperament_points(&adopter, &animal), (10, 3));

        adopter.temperament_preference.insert("calm".to_string());
        animal.temperament.insert("calm".to_string());
        assert_eq!(temperament_points(&adopter, &animal), (10, 4));
    }

    #[test]
    fn test_reason_order_follows_criteria() {
        let result = calculate_match_score(&create_test_adopter(), &create_test_animal());

        assert_eq!(
            result.reasons,
            vec![
                "Suitable for owners of any experience level",
                "Your home is well suited to this animal's space needs",
                "Your activity level matches this animal's energy",
                "Good with children",
                "Matches your preferred size",
                "Excellent temperament match",
            ]
        );
        let kinds: Vec<_> = result.breakdown.iter().map(|c| c.criterion).collect();
        assert_eq!(kinds.first(), Some(&CriterionKind::Experience));
        assert_eq!(kinds.last(), Some(&CriterionKind::Temperament));
    }

    #[test]
    fn test_scheme_cannot_exceed_hundred() {
        assert_eq!(ADOPTER_CENTRIC.max_total(), 100);
    }
}
