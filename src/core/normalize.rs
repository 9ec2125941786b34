use crate::models::{
    ActivityLevel, AdopterProfile, AdopterRecord, AnimalProfile, AnimalRecord, AnimalSize,
    EnergyLevel, ExperienceLevel, HousingType, SizePreference, SpaceNeeds,
};
use std::collections::BTreeSet;

/// Build a total adopter profile from a possibly partial record.
///
/// Missing booleans become `false`, missing or unrecognized categorical
/// values fall into the `Unknown` bucket. Never fails.
pub fn normalize_adopter(record: &AdopterRecord) -> AdopterProfile {
    let children_count = record.children_count.unwrap_or(0);

    AdopterProfile {
        id: record.id.clone(),
        experience: parse_experience(record.experience_level.as_deref()),
        housing: parse_housing(record.housing_type.as_deref()),
        has_children: record.has_children.unwrap_or(false) || children_count > 0,
        children_count,
        activity: parse_activity(record.activity_level.as_deref()),
        size_preference: parse_size_preference(record.pet_size_preference.as_deref()),
        temperament_preference: normalize_traits(&record.temperament_preference),
        willing_out_of_state: record.willing_to_adopt_out_of_state.unwrap_or(false),
        has_fenced_yard: record.has_fenced_yard.unwrap_or(false),
        has_pets: record.has_pets.unwrap_or(false),
        pets_good_with_others: record.pets_good_with_others.unwrap_or(false),
        willing_to_train: record.willing_to_train.unwrap_or(false),
        preferred_age: normalize_value(record.preferred_age.as_deref()),
        preferred_breed: normalize_value(record.preferred_breed.as_deref()),
        preferred_weight: normalize_value(record.preferred_weight.as_deref()),
    }
}

/// Build a total animal profile from a possibly partial record.
pub fn normalize_animal(record: &AnimalRecord) -> AnimalProfile {
    AnimalProfile {
        id: record.id.clone(),
        energy: parse_energy(record.energy_level.as_deref()),
        size: parse_size(record.size.as_deref()),
        space_needs: parse_space_needs(record.space_needs.as_deref()),
        good_with_children: record.good_with_children.unwrap_or(false),
        good_with_pets: record.good_with_pets.unwrap_or(false),
        house_trained: record.house_trained.unwrap_or(false),
        special_needs: record.special_needs.unwrap_or(false),
        temperament: normalize_traits(&record.temperament),
        age_group: normalize_value(record.age_group.as_deref()),
        breed: normalize_value(record.breed.as_deref()),
        weight_range: normalize_value(record.weight_range.as_deref()),
        requires_experience: record.requires_experience.unwrap_or(false),
    }
}

/// Lowercase, trim and unify `_` / space separators to `-`.
fn canonical_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn normalize_value(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

fn normalize_traits(traits: &[String]) -> BTreeSet<String> {
    traits
        .iter()
        .map(|trait_name| trait_name.trim().to_lowercase())
        .filter(|trait_name| !trait_name.is_empty())
        .collect()
}

fn parse_experience(raw: Option<&str>) -> ExperienceLevel {
    match raw.map(canonical_token).as_deref() {
        Some("novice") | Some("beginner") => ExperienceLevel::Novice,
        Some("experienced") | Some("intermediate") => ExperienceLevel::Experienced,
        Some("expert") => ExperienceLevel::Expert,
        _ => ExperienceLevel::Unknown,
    }
}

fn parse_housing(raw: Option<&str>) -> HousingType {
    match raw.map(canonical_token).as_deref() {
        Some("apartment") => HousingType::Apartment,
        Some("house-no-yard") => HousingType::HouseNoYard,
        Some("house-with-yard") => HousingType::HouseWithYard,
        Some("farm") => HousingType::Farm,
        _ => HousingType::Unknown,
    }
}

fn parse_space_needs(raw: Option<&str>) -> SpaceNeeds {
    match raw.map(canonical_token).as_deref() {
        Some("apartment-ok") => SpaceNeeds::ApartmentOk,
        Some("house-preferred") => SpaceNeeds::HousePreferred,
        Some("yard-required") => SpaceNeeds::YardRequired,
        _ => SpaceNeeds::Unknown,
    }
}

fn parse_activity(raw: Option<&str>) -> ActivityLevel {
    match raw.map(canonical_token).as_deref() {
        Some("low") => ActivityLevel::Low,
        Some("moderate") | Some("medium") => ActivityLevel::Moderate,
        Some("high") => ActivityLevel::High,
        _ => ActivityLevel::Unknown,
    }
}

fn parse_energy(raw: Option<&str>) -> EnergyLevel {
    match raw.map(canonical_token).as_deref() {
        Some("low") => EnergyLevel::Low,
        Some("moderate") | Some("medium") => EnergyLevel::Moderate,
        Some("high") => EnergyLevel::High,
        _ => EnergyLevel::Unknown,
    }
}

fn parse_size(raw: Option<&str>) -> AnimalSize {
    match raw.map(canonical_token).as_deref() {
        Some("small") => AnimalSize::Small,
        Some("medium") => AnimalSize::Medium,
        Some("large") => AnimalSize::Large,
        _ => AnimalSize::Unknown,
    }
}

fn parse_size_preference(raw: Option<&str>) -> SizePreference {
    match raw.map(canonical_token).as_deref() {
        Some("small") => SizePreference::Small,
        Some("medium") => SizePreference::Medium,
        Some("large") => SizePreference::Large,
        Some("any") => SizePreference::Any,
        _ => SizePreference::Unknown,
    }
}
