//! Docweave Core
//!
//! This crate provides the core types, state machine, and error
//! definitions for the docweave literate-source converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Classification`] - The two-valued prose/code tag for a line
//! - [`Classifier`] - Marker-character line classification and prose stripping
//! - [`StreamState`], [`Transition`] - The one-field block-transition state machine
//! - [`DocweaveError`] - Error types

pub mod classify;
pub mod enums;
pub mod error;
pub mod state;

pub use classify::Classifier;
pub use enums::Classification;
pub use error::{DocweaveError, Result};
pub use state::{StreamState, Transition};
