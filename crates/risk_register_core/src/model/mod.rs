//! Risk register domain model.
//!
//! # Responsibility
//! - Define the canonical risk row shared by generator, scorer and reporter.
//! - Keep qualitative ratings as closed enums instead of free strings.
//!
//! # Invariants
//! - Records are created once and never mutated after scoring.
//! - Control effectiveness exists only when a control exists.

pub mod risk;
