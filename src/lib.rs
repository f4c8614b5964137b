//! # GLM Design-Matrix Utilities
//!
//! This library provides numeric building blocks for constructing
//! general linear model (GLM) design matrices in neuroimaging
//! analysis: finite impulse response (FIR) lag expansion of stimulus
//! sequences, and max-normalization of arrays.
//!
//! ## Modules
//!
//! - `design` - Stimulus design construction and FIR lag expansion
//! - `normalize` - Max-normalization along an axis or globally
//! - `error` - Crate error types
//!
//! ## Quick Start
//!
//! ```rust
//! use glm_design::{build_lag_matrix, normalize_by_max, NormAxis};
//! use ndarray::array;
//!
//! // One condition with onsets at volumes 0 and 3, five volumes total
//! let design = array![[1.0, 0.0, 0.0, 1.0, 0.0]];
//!
//! // Expand into three lagged regressor columns for FIR fitting
//! let expanded = build_lag_matrix(design.view(), 0, 2, false);
//! assert_eq!(expanded.dim(), (5, 3));
//!
//! // Rescale so every column peaks at 1
//! let scaled = normalize_by_max(expanded.view(), NormAxis::Axis(0)).unwrap();
//! assert_eq!(scaled.dim(), (5, 3));
//! ```

pub mod design;
pub mod error;
pub mod normalize;

pub use design::lag::{build_lag_matrix, build_single_lag_matrix};
pub use design::onsets::{Condition, StimulusDesign};
pub use error::{DesignError, Result};
pub use normalize::{normalize_by_max, normalize_vec_by_max, NormAxis};
