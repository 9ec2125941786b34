use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Adopter record as handed over by the persistence layer.
///
/// Every field except `id` may be missing; the normalizer resolves the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AdopterRecord {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub id: String,
    #[serde(rename = "experienceLevel", alias = "experience_level", default)]
    pub experience_level: Option<String>,
    #[serde(rename = "housingType", alias = "housing_type", default)]
    pub housing_type: Option<String>,
    #[serde(rename = "hasChildren", alias = "has_children", default)]
    pub has_children: Option<bool>,
    #[serde(rename = "childrenCount", alias = "children_count", default)]
    pub children_count: Option<u32>,
    #[serde(rename = "activityLevel", alias = "activity_level", default)]
    pub activity_level: Option<String>,
    #[serde(rename = "petSizePreference", alias = "pet_size_preference", default)]
    pub pet_size_preference: Option<String>,
    #[serde(rename = "temperamentPreference", alias = "temperament_preference", default)]
    pub temperament_preference: Vec<String>,
    #[serde(rename = "willingToAdoptOutOfState", alias = "willing_to_adopt_out_of_state", default)]
    pub willing_to_adopt_out_of_state: Option<bool>,
    #[serde(rename = "hasFencedYard", alias = "has_fenced_yard", default)]
    pub has_fenced_yard: Option<bool>,
    #[serde(rename = "hasPets", alias = "has_pets", default)]
    pub has_pets: Option<bool>,
    #[serde(rename = "petsGoodWithOthers", alias = "pets_good_with_others", default)]
    pub pets_good_with_others: Option<bool>,
    #[serde(rename = "willingToTrain", alias = "willing_to_train", default)]
    pub willing_to_train: Option<bool>,
    #[serde(rename = "preferredAge", alias = "preferred_age", default)]
    pub preferred_age: Option<String>,
    #[serde(rename = "preferredBreed", alias = "preferred_breed", default)]
    pub preferred_breed: Option<String>,
    #[serde(rename = "preferredWeight", alias = "preferred_weight", default)]
    pub preferred_weight: Option<String>,
}

/// Animal record as handed over by the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "energyLevel", alias = "energy_level", default)]
    pub energy_level: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(rename = "spaceNeeds", alias = "space_needs", default)]
    pub space_needs: Option<String>,
    #[serde(
        rename = "goodWithChildren",
        alias = "good_with_children",
        alias = "goodWithKids",
        default
    )]
    pub good_with_children: Option<bool>,
    #[serde(
        rename = "goodWithPets",
        alias = "good_with_pets",
        alias = "goodWithOtherPets",
        default
    )]
    pub good_with_pets: Option<bool>,
    #[serde(rename = "houseTrained", alias = "house_trained", default)]
    pub house_trained: Option<bool>,
    #[serde(rename = "specialNeeds", alias = "special_needs", default)]
    pub special_needs: Option<bool>,
    #[serde(default)]
    pub temperament: Vec<String>,
    #[serde(rename = "ageGroup", alias = "age_group", alias = "age", default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(rename = "weightRange", alias = "weight_range", alias = "weight", default)]
    pub weight_range: Option<String>,
    #[serde(
        rename = "requiresExperience",
        alias = "requires_experience",
        alias = "requiresExperiencedOwner",
        default
    )]
    pub requires_experience: Option<bool>,
}

/// An applicant paired with the animal they applied for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Application {
    pub adopter: AdopterRecord,
    pub animal: AnimalRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Novice,
    Experienced,
    Expert,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousingType {
    Apartment,
    HouseNoYard,
    HouseWithYard,
    Farm,
    Unknown,
}

/// How much room an animal needs to be comfortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceNeeds {
    ApartmentOk,
    HousePreferred,
    YardRequired,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimalSize {
    Small,
    Medium,
    Large,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizePreference {
    Small,
    Medium,
    Large,
    Any,
    Unknown,
}

impl SizePreference {
    /// Whether the preference names exactly this size.
    pub fn names(&self, size: AnimalSize) -> bool {
        matches!(
            (self, size),
            (SizePreference::Small, AnimalSize::Small)
                | (SizePreference::Medium, AnimalSize::Medium)
                | (SizePreference::Large, AnimalSize::Large)
        )
    }
}

/// Normalized adopter snapshot. Every field has a defined value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdopterProfile {
    pub id: String,
    pub experience: ExperienceLevel,
    pub housing: HousingType,
    pub has_children: bool,
    pub children_count: u32,
    pub activity: ActivityLevel,
    pub size_preference: SizePreference,
    pub temperament_preference: BTreeSet<String>,
    pub willing_out_of_state: bool,
    pub has_fenced_yard: bool,
    pub has_pets: bool,
    pub pets_good_with_others: bool,
    pub willing_to_train: bool,
    pub preferred_age: Option<String>,
    pub preferred_breed: Option<String>,
    pub preferred_weight: Option<String>,
}

/// Normalized animal snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalProfile {
    pub id: String,
    pub energy: EnergyLevel,
    pub size: AnimalSize,
    pub space_needs: SpaceNeeds,
    pub good_with_children: bool,
    pub good_with_pets: bool,
    pub house_trained: bool,
    pub special_needs: bool,
    pub temperament: BTreeSet<String>,
    pub age_group: Option<String>,
    pub breed: Option<String>,
    pub weight_range: Option<String>,
    pub requires_experience: bool,
}

/// Compatibility dimension scored by a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Experience,
    Housing,
    Activity,
    Children,
    Size,
    Temperament,
    PetCompatibility,
    HouseTrained,
    EnergyYard,
    SpecialNeeds,
    OutOfState,
    PreferredAge,
    PreferredBreed,
    PreferredWeight,
}

/// Points awarded by one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: CriterionKind,
    pub points: u8,
}

/// Score and justifications for one (adopter, animal) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "adopterId")]
    pub adopter_id: String,
    #[serde(rename = "animalId")]
    pub animal_id: String,
    pub score: u8,
    pub reasons: Vec<String>,
    #[serde(rename = "negativeReasons", default, skip_serializing_if = "Vec::is_empty")]
    pub negative_reasons: Vec<String>,
    #[serde(default)]
    pub breakdown: Vec<CriterionScore>,
}

/// Animal with its compatibility result attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedAnimal {
    pub animal: AnimalRecord,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Tuning for the matching facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingOptions {
    /// Batches at least this large are scored on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
        }
    }
}
