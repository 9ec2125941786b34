//! Adopt Match - compatibility matching engine for the adoption marketplace
//!
//! This library scores how well an adopter and an animal fit, in two
//! directions: ranking animals for an adopter, and reviewing applicants for
//! an animal. Every score comes with the reasons that produced it.
//!
//! The engine is pure: no I/O, no clock, no randomness. The `config`,
//! `error` and `runner` modules serve the batch runner binary only.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{Matcher, normalize_adopter, normalize_animal, ADOPTER_CENTRIC, APPLICANT_REVIEW};
pub use crate::models::{AdopterRecord, AnimalRecord, Application, MatchResult, RankedAnimal, MatchingOptions};
