use crate::core::aggregate::{CriterionOutcome, CriterionSpec, ScoringScheme};
use crate::core::scoring::{temperament_points, TEMPERAMENT_MAX_POINTS};
use crate::models::{AdopterProfile, AnimalProfile, CriterionKind, EnergyLevel, MatchResult};

/// Points for each explicit preference the animal satisfies
pub const PREFERENCE_MATCH_POINTS: u8 = 5;

/// Animal-centric scheme used when an owner reviews applicants
///
/// Weighted independently of
/// [`ADOPTER_CENTRIC`](crate::core::scoring::ADOPTER_CENTRIC) and emits
/// negative reasons. The total is clamped to `[0, 100]`.
pub const APPLICANT_REVIEW: ScoringScheme = ScoringScheme {
    name: "applicant-review",
    criteria: &[
        CriterionSpec {
            kind: CriterionKind::Children,
            max_points: 10,
            evaluate: children_compatibility,
        },
        CriterionSpec {
            kind: CriterionKind::PetCompatibility,
            max_points: 10,
            evaluate: pet_compatibility,
        },
        CriterionSpec {
            kind: CriterionKind::HouseTrained,
            max_points: 5,
            evaluate: house_trained,
        },
        CriterionSpec {
            kind: CriterionKind::EnergyYard,
            max_points: 10,
            evaluate: energy_yard,
        },
        CriterionSpec {
            kind: CriterionKind::SpecialNeeds,
            max_points: 10,
            evaluate: special_needs,
        },
        CriterionSpec {
            kind: CriterionKind::OutOfState,
            max_points: 5,
            evaluate: out_of_state,
        },
        CriterionSpec {
            kind: CriterionKind::PreferredAge,
            max_points: PREFERENCE_MATCH_POINTS,
            evaluate: preferred_age,
        },
        CriterionSpec {
            kind: CriterionKind::PreferredBreed,
            max_points: PREFERENCE_MATCH_POINTS,
            evaluate: preferred_breed,
        },
        CriterionSpec {
            kind: CriterionKind::PreferredWeight,
            max_points: PREFERENCE_MATCH_POINTS,
            evaluate: preferred_weight,
        },
        CriterionSpec {
            kind: CriterionKind::Temperament,
            max_points: TEMPERAMENT_MAX_POINTS,
            evaluate: temperament_alignment,
        },
    ],
};

/// Score one application (adopter applying for animal)
pub fn calculate_application_score(adopter: &AdopterProfile, animal: &AnimalProfile) -> MatchResult {
    APPLICANT_REVIEW.evaluate(adopter, animal)
}

fn children_compatibility(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    match (animal.good_with_children, adopter.has_children) {
        (true, true) => CriterionOutcome::positive(10, "Good with children in the household"),
        (true, false) => CriterionOutcome::positive(5, "Good with children"),
        (false, true) => {
            CriterionOutcome::negative(0, "Not recommended for a household with children")
        }
        (false, false) => CriterionOutcome::positive(5, "No children in the household"),
    }
}

fn pet_compatibility(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    if animal.good_with_pets {
        CriterionOutcome::positive(10, "Gets along with other pets")
    } else if adopter.has_pets && !adopter.pets_good_with_others {
        CriterionOutcome::negative(0, "Current pets may not get along with this animal")
    } else {
        CriterionOutcome::positive(5, "No conflict with current pets")
    }
}

fn house_trained(_: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    if animal.house_trained {
        CriterionOutcome::positive(5, "House-trained")
    } else {
        CriterionOutcome::silent(0)
    }
}

fn energy_yard(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    match (animal.energy, adopter.has_fenced_yard) {
        (EnergyLevel::High, true) => {
            CriterionOutcome::positive(10, "Fenced yard suits a high-energy animal")
        }
        (EnergyLevel::High, false) => {
            CriterionOutcome::negative(2, "High-energy animal without a fenced yard")
        }
        _ => CriterionOutcome::positive(5, "Energy level is manageable"),
    }
}

fn special_needs(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    match (animal.special_needs, adopter.willing_to_train) {
        (true, true) => CriterionOutcome::positive(10, "Willing to handle special needs"),
        (true, false) => {
            CriterionOutcome::negative(0, "Special needs without willingness to train")
        }
        (false, _) => CriterionOutcome::silent(0),
    }
}

fn out_of_state(adopter: &AdopterProfile, _: &AnimalProfile) -> CriterionOutcome {
    if adopter.willing_out_of_state {
        CriterionOutcome::positive(5, "Willing to adopt out of state")
    } else {
        CriterionOutcome::silent(0)
    }
}

#[inline]
fn preference_match(
    preferred: Option<&String>,
    actual: Option<&String>,
    reason: &str,
) -> CriterionOutcome {
    match (preferred, actual) {
        (Some(p), Some(a)) if p == a => CriterionOutcome::positive(PREFERENCE_MATCH_POINTS, reason),
        _ => CriterionOutcome::silent(0),
    }
}

fn preferred_age(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    preference_match(
        adopter.preferred_age.as_ref(),
        animal.age_group.as_ref(),
        "Matches preferred age",
    )
}

fn preferred_breed(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    preference_match(
        adopter.preferred_breed.as_ref(),
        animal.breed.as_ref(),
        "Matches preferred breed",
    )
}

fn preferred_weight(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    preference_match(
        adopter.preferred_weight.as_ref(),
        animal.weight_range.as_ref(),
        "Matches preferred weight",
    )
}

/// Only evaluated when the adopter states temperament preferences.
fn temperament_alignment(adopter: &AdopterProfile, animal: &AnimalProfile) -> CriterionOutcome {
    if adopter.temperament_preference.is_empty() {
        return CriterionOutcome::silent(0);
    }

    let (points, _) = temperament_points(adopter, animal);
    match points {
        6.. => CriterionOutcome::positive(points, "Temperament aligns well with preferences"),
        1..=5 => CriterionOutcome::positive(points, "Temperament partially matches preferences"),
        _ => CriterionOutcome::negative(0, "Temperament does not match preferences"),
    }
}
