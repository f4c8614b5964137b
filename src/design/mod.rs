//! Design-matrix construction
//!
//! Contains:
//! - FIR lag expansion of stimulus sequences (`lag`)
//! - Rendering of event-onset specifications into design matrices
//!   (`onsets`)

pub mod lag;
pub mod onsets;

pub use lag::{build_lag_matrix, build_single_lag_matrix};
pub use onsets::{Condition, StimulusDesign};
