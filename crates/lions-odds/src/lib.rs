//! Estimates the odds of an entry winning at the Cannes Lions festival.
//!
//! The [`estimator`] module holds the model; [`config`], [`error`] and
//! [`telemetry`] provide the shell shared by the CLI and HTTP service.

pub mod config;
pub mod error;
pub mod estimator;
pub mod telemetry;
