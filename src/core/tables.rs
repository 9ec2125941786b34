//! Immutable compatibility tables for the adopter-centric direction.
//!
//! Any combination missing from a table, including every `Unknown` bucket,
//! scores [`DEFAULT_COMBINATION_SCORE`].

use crate::models::{ActivityLevel, EnergyLevel, HousingType, SpaceNeeds};

/// Points for a categorical combination no table lists.
pub const DEFAULT_COMBINATION_SCORE: u8 = 10;

/// Housing type x animal space needs.
pub const HOUSING_TABLE: &[(HousingType, SpaceNeeds, u8)] = &[
    (HousingType::Apartment, SpaceNeeds::ApartmentOk, 25),
    (HousingType::Apartment, SpaceNeeds::HousePreferred, 10),
    (HousingType::Apartment, SpaceNeeds::YardRequired, 5),
    (HousingType::HouseNoYard, SpaceNeeds::ApartmentOk, 25),
    (HousingType::HouseNoYard, SpaceNeeds::HousePreferred, 25),
    (HousingType::HouseNoYard, SpaceNeeds::YardRequired, 10),
    (HousingType::HouseWithYard, SpaceNeeds::ApartmentOk, 25),
    (HousingType::HouseWithYard, SpaceNeeds::HousePreferred, 25),
    (HousingType::HouseWithYard, SpaceNeeds::YardRequired, 25),
    (HousingType::Farm, SpaceNeeds::ApartmentOk, 20),
    (HousingType::Farm, SpaceNeeds::HousePreferred, 25),
    (HousingType::Farm, SpaceNeeds::YardRequired, 25),
];

/// Adopter activity level x animal energy level.
pub const ACTIVITY_TABLE: &[(ActivityLevel, EnergyLevel, u8)] = &[
    (ActivityLevel::Low, EnergyLevel::Low, 20),
    (ActivityLevel::Low, EnergyLevel::Moderate, 10),
    (ActivityLevel::Low, EnergyLevel::High, 5),
    (ActivityLevel::Moderate, EnergyLevel::Low, 15),
    (ActivityLevel::Moderate, EnergyLevel::Moderate, 20),
    (ActivityLevel::Moderate, EnergyLevel::High, 10),
    (ActivityLevel::High, EnergyLevel::Low, 10),
    (ActivityLevel::High, EnergyLevel::Moderate, 15),
    (ActivityLevel::High, EnergyLevel::High, 20),
];

#[inline]
fn lookup<R: PartialEq, C: PartialEq>(table: &[(R, C, u8)], row: R, column: C) -> u8 {
    table
        .iter()
        .find(|(r, c, _)| *r == row && *c == column)
        .map(|(_, _, points)| *points)
        .unwrap_or(DEFAULT_COMBINATION_SCORE)
}

#[inline]
pub fn housing_points(housing: HousingType, space_needs: SpaceNeeds) -> u8 {
    lookup(HOUSING_TABLE, housing, space_needs)
}

#[inline]
pub fn activity_points(activity: ActivityLevel, energy: EnergyLevel) -> u8 {
    lookup(ACTIVITY_TABLE, activity, energy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values_in_range() {
        for (_, _, points) in HOUSING_TABLE {
            assert!((5..=25).contains(points));
        }
        for (_, _, points) in ACTIVITY_TABLE {
            assert!((5..=20).contains(points));
        }
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for (i, (h, s, _)) in HOUSING_TABLE.iter().enumerate() {
            assert!(!HOUSING_TABLE[i + 1..].iter().any(|(h2, s2, _)| h2 == h && s2 == s));
        }
        for (i, (a, e, _)) in ACTIVITY_TABLE.iter().enumerate() {
            assert!(!ACTIVITY_TABLE[i + 1..].iter().any(|(a2, e2, _)| a2 == a && e2 == e));
        }
    }

    #[test]
    fn test_housing_lookup() {
        assert_eq!(housing_points(HousingType::HouseWithYard, SpaceNeeds::YardRequired), 25);
        assert_eq!(housing_points(HousingType::Apartment, SpaceNeeds::YardRequired), 5);
    }

    #[test]
    fn test_unknown_combinations_use_default() {
        assert_eq!(
            housing_points(HousingType::Unknown, SpaceNeeds::ApartmentOk),
            DEFAULT_COMBINATION_SCORE
        );
        assert_eq!(
            housing_points(HousingType::Farm, SpaceNeeds::Unknown),
            DEFAULT_COMBINATION_SCORE
        );
        assert_eq!(
            activity_points(ActivityLevel::Unknown, EnergyLevel::Unknown),
            DEFAULT_COMBINATION_SCORE
        );
    }

    #[test]
    fn test_activity_diagonal_is_max() {
        assert_eq!(activity_points(ActivityLevel::Low, EnergyLevel::Low), 20);
        assert_eq!(activity_points(ActivityLevel::Moderate, EnergyLevel::Moderate), 20);
        assert_eq!(activity_points(ActivityLevel::High, EnergyLevel::High), 20);
    }
}
