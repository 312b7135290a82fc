//! Trip Context - profile normalization and mood classification
//!
//! This crate implements the deterministic pieces behind a trip-planning
//! agent pipeline: turning raw user preferences into a strict-schema profile
//! and turning free text into a structured mood assessment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
