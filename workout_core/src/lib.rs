#![forbid(unsafe_code)]

//! Core domain model and calculations for the fittrack system.
//!
//! This crate provides:
//! - Workout calculations (running, sports walking, swimming)
//! - Reading dispatch from raw sensor packages
//! - Summary rendering (text, JSON, CSV)
//! - Package file loading
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod training;
pub mod message;
pub mod dispatcher;
pub mod loader;
pub mod report;
pub mod driver;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Package, WorkoutCode};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
pub use message::InfoMessage;
pub use dispatcher::{dispatch, read_package};
pub use loader::read_packages;
pub use report::{render, ReportFormat};
pub use driver::{run_packages, sample_packages, summarize, ErrorPolicy};
pub use config::Config;
