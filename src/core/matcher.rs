use crate::models::{
    AdopterProfile, AdopterRecord, AnimalProfile, AnimalRecord, Application, MatchResult,
    MatchingOptions, RankedAnimal,
};
use crate::core::{
    applicant::APPLICANT_REVIEW,
    normalize::{normalize_adopter, normalize_animal},
    ranking::rank_by_score,
    scoring::ADOPTER_CENTRIC,
};
use rayon::prelude::*;

/// Matching facade - the engine's two entry points
///
/// # Directions
/// 1. Adopter-centric: rank many animals for one adopter
/// 2. Animal-centric: score applications an owner is reviewing
///
/// Pairs are scored independently. Batches at or above
/// `parallel_threshold` are fanned out over the rayon pool; the collected
/// output keeps input order either way.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchingOptions,
}

impl Matcher {
    pub fn new(options: MatchingOptions) -> Self {
        Self { options }
    }

    pub fn with_default_options() -> Self {
        Self {
            options: MatchingOptions::default(),
        }
    }

    pub fn options(&self) -> &MatchingOptions {
        &self.options
    }

    /// Rank animals for an adopter, best match first
    ///
    /// # Arguments
    /// * `adopter` - The adopter's raw record
    /// * `animals` - Candidate animals, in the order the caller fetched them
    ///
    /// # Returns
    /// Every animal with its result attached, sorted by score descending.
    /// Animals with equal scores keep their input order.
    pub fn rank_animals_for_adopter(
        &self,
        adopter: &AdopterRecord,
        animals: Vec<AnimalRecord>,
    ) -> Vec<RankedAnimal> {
        let adopter_profile = normalize_adopter(adopter);
        let parallel = self.use_parallel(animals.len());

        tracing::debug!(
            "Ranking {} animals for adopter {} (parallel: {})",
            animals.len(),
            adopter_profile.id,
            parallel
        );

        let score = |animal: AnimalRecord| {
            let result = self.score_pair(&adopter_profile, &normalize_animal(&animal));
            RankedAnimal { animal, result }
        };

        let mut ranked: Vec<RankedAnimal> = if parallel {
            animals.into_par_iter().map(score).collect()
        } else {
            animals.into_iter().map(score).collect()
        };

        rank_by_score(&mut ranked);
        ranked
    }

    /// Score applications in the order given, without ranking
    ///
    /// Callers order the results themselves (typically by submission time).
    pub fn score_applications(&self, applications: &[Application]) -> Vec<MatchResult> {
        let parallel = self.use_parallel(applications.len());

        tracing::debug!(
            "Scoring {} applications (parallel: {})",
            applications.len(),
            parallel
        );

        let score = |application: &Application| {
            self.review_pair(
                &normalize_adopter(&application.adopter),
                &normalize_animal(&application.animal),
            )
        };

        if parallel {
            applications.par_iter().map(score).collect()
        } else {
            applications.iter().map(score).collect()
        }
    }

    /// Adopter-centric score for one normalized pair
    pub fn score_pair(&self, adopter: &AdopterProfile, animal: &AnimalProfile) -> MatchResult {
        ADOPTER_CENTRIC.evaluate(adopter, animal)
    }

    /// Animal-centric score for one normalized application
    pub fn review_pair(&self, adopter: &AdopterProfile, animal: &AnimalProfile) -> MatchResult {
        APPLICANT_REVIEW.evaluate(adopter, animal)
    }

    #[inline]
    fn use_parallel(&self, batch_len: usize) -> bool {
        batch_len >= self.options.parallel_threshold.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_adopter() -> AdopterRecord {
        AdopterRecord {
            id: "current_adopter".to_string(),
            experience_level: Some("novice".to_string()),
            housing_type: Some("apartment".to_string()),
            activity_level: Some("low".to_string()),
            pet_size_preference: Some("small".to_string()),
            ..Default::default()
        }
    }

    fn create_animal(id: &str, energy: &str, space_needs: &str) -> AnimalRecord {
        AnimalRecord {
            id: id.to_string(),
            energy_level: Some(energy.to_string()),
            space_needs: Some(space_needs.to_string()),
            size: Some("small".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_animals_basic() {
        let matcher = Matcher::with_default_options();

        let animals = vec![
            create_animal("1", "high", "yard-required"),   // Poor fit for an apartment
            create_animal("2", "low", "apartment-ok"),     // Ideal
            create_animal("3", "moderate", "house-preferred"),
        ];

        let ranked = matcher.rank_animals_for_adopter(&create_adopter(), animals);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].animal.id, "2");
        assert_eq!(ranked[2].animal.id, "1");
        assert_eq!(ranked[0].result.animal_id, "2");
        assert_eq!(ranked[0].result.adopter_id, "current_adopter");
    }

    #[test]
    fn test_rank_animals_sorted_by_score() {
        let matcher = Matcher::with_default_options();
        let animals: Vec<AnimalRecord> = (0..20)
            .map(|i| {
                let energy = ["low", "moderate", "high"][i % 3];
                let space = ["apartment-ok", "house-preferred", "yard-required"][i % 3];
                create_animal(&i.to_string(), energy, space)
            })
            .collect();

        let ranked = matcher.rank_animals_for_adopter(&create_adopter(), animals);

        for i in 1..ranked.len() {
            assert!(ranked[i - 1].result.score >= ranked[i].result.score);
        }
    }

    #[test]
    fn test_rank_empty_animals() {
        let matcher = Matcher::with_default_options();
        let ranked = matcher.rank_animals_for_adopter(&create_adopter(), vec![]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let sequential = Matcher::new(MatchingOptions {
            parallel_threshold: usize::MAX,
        });
        let parallel = Matcher::new(MatchingOptions {
            parallel_threshold: 1,
        });

        let animals: Vec<AnimalRecord> = (0..50)
            .map(|i| {
                let energy = ["low", "moderate", "high"][i % 3];
                let space = ["apartment-ok", "house-preferred", "yard-required"][i % 2];
                create_animal(&i.to_string(), energy, space)
            })
            .collect();

        let a = sequential.rank_animals_for_adopter(&create_adopter(), animals.clone());
        let b = parallel.rank_animals_for_adopter(&create_adopter(), animals);

        let a_ids: Vec<_> = a.iter().map(|r| &r.result).collect();
        let b_ids: Vec<_> = b.iter().map(|r| &r.result).collect();
        assert_eq!(a_ids, b_ids);
    }

    #[test]
    fn test_score_applications_keeps_order() {
        let matcher = Matcher::new(MatchingOptions {
            parallel_threshold: 2,
        });

        let applications = vec![
            Application {
                adopter: create_adopter(),
                animal: create_animal("low-fit", "high", "yard-required"),
            },
            Application {
                adopter: AdopterRecord {
                    id: "trainer".to_string(),
                    has_fenced_yard: Some(true),
                    willing_to_train: Some(true),
                    willing_to_adopt_out_of_state: Some(true),
                    ..Default::default()
                },
                animal: AnimalRecord {
                    id: "high-fit".to_string(),
                    good_with_children: Some(true),
                    good_with_pets: Some(true),
                    house_trained: Some(true),
                    ..Default::default()
                },
            },
        ];

        let results = matcher.score_applications(&applications);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].animal_id, "low-fit");
        assert_eq!(results[1].animal_id, "high-fit");
        assert!(results[0].score < results[1].score);
    }
}
