//! Rule-based financial wellness scoring.
//!
//! The scoring core is a set of pure, stateless functions over derived
//! financial ratios. Behavioral clustering is an external, pre-trained
//! collaborator consumed behind the [`clusters::BehavioralClassifier`]
//! contract so the core stays testable without model artifacts.

pub mod clusters;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
