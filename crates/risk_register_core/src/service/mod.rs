//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate generator, scorer and reporter into one run.
//! - Keep the CLI decoupled from file-format backends.

pub mod register_service;
