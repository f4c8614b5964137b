//! Stimulus design construction from event onsets
//!
//! This module renders per-condition event-onset lists into the
//! conditions x time points design matrix consumed by the lag
//! expansion in [`crate::design::lag`].

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::design::lag::build_lag_matrix;
use crate::error::{DesignError, Result};

/// Event-onset specification for one experimental condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Condition label
    pub name: String,
    /// Volume indices at which the stimulus occurs
    pub onsets: Vec<usize>,
    /// Per-onset amplitudes; defaults to 1.0 for every onset when
    /// absent. Fractional values model partial or jittered onsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitudes: Option<Vec<f64>>,
}

impl Condition {
    /// Create a condition with unit-amplitude onsets
    pub fn new(name: impl Into<String>, onsets: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            onsets,
            amplitudes: None,
        }
    }

    /// Attach explicit onset amplitudes
    pub fn with_amplitudes(mut self, amplitudes: Vec<f64>) -> Self {
        self.amplitudes = Some(amplitudes);
        self
    }
}

/// Stimulus design for a single run: the conditions presented and the
/// run length in volumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StimulusDesign {
    /// Conditions in presentation order
    pub conditions: Vec<Condition>,
    /// Number of time points (volumes) in the run
    pub timepoints: usize,
}

impl StimulusDesign {
    /// Create a new stimulus design
    pub fn new(conditions: Vec<Condition>, timepoints: usize) -> Self {
        Self {
            conditions,
            timepoints,
        }
    }

    /// Number of conditions
    pub fn n_conditions(&self) -> usize {
        self.conditions.len()
    }

    /// Render the conditions x time points design matrix.
    ///
    /// Coincident onsets within a condition accumulate, so repeated
    /// indices sum their amplitudes.
    pub fn to_matrix(&self) -> Result<Array2<f64>> {
        if self.timepoints == 0 {
            return Err(DesignError::EmptyDesign);
        }

        let mut m = Array2::zeros((self.conditions.len(), self.timepoints));

        for (c, cond) in self.conditions.iter().enumerate() {
            if let Some(amps) = &cond.amplitudes {
                if amps.len() != cond.onsets.len() {
                    return Err(DesignError::AmplitudeMismatch {
                        condition: cond.name.clone(),
                        onsets: cond.onsets.len(),
                        amplitudes: amps.len(),
                    });
                }
            }

            for (k, &onset) in cond.onsets.iter().enumerate() {
                if onset >= self.timepoints {
                    return Err(DesignError::OnsetOutOfRange {
                        condition: cond.name.clone(),
                        onset,
                        timepoints: self.timepoints,
                    });
                }

                let amplitude = cond.amplitudes.as_ref().map_or(1.0, |a| a[k]);
                m[[c, onset]] += amplitude;
            }
        }

        Ok(m)
    }

    /// Render and lag-expand the design for FIR fitting.
    ///
    /// Equivalent to [`StimulusDesign::to_matrix`] followed by
    /// [`build_lag_matrix`].
    pub fn lag_matrix(&self, prenumlag: usize, postnumlag: usize) -> Result<Array2<f64>> {
        let m = self.to_matrix()?;
        Ok(build_lag_matrix(m.view(), prenumlag, postnumlag, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_matrix_places_unit_onsets() {
        let design = StimulusDesign::new(
            vec![
                Condition::new("faces", vec![0, 3]),
                Condition::new("houses", vec![1]),
            ],
            5,
        );

        let m = design.to_matrix().unwrap();
        assert_eq!(m.dim(), (2, 5));
        assert_eq!(m.row(0).to_vec(), vec![1.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(m.row(1).to_vec(), vec![0.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_matrix_with_fractional_amplitudes() {
        let design = StimulusDesign::new(
            vec![Condition::new("jittered", vec![1, 2]).with_amplitudes(vec![0.4, 0.6])],
            4,
        );

        let m = design.to_matrix().unwrap();
        assert!((m[[0, 1]] - 0.4).abs() < 1e-10);
        assert!((m[[0, 2]] - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_coincident_onsets_accumulate() {
        let design =
            StimulusDesign::new(vec![Condition::new("doubled", vec![2, 2])], 4);

        let m = design.to_matrix().unwrap();
        assert!((m[[0, 2]] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_out_of_range_onset_is_rejected() {
        let design = StimulusDesign::new(vec![Condition::new("bad", vec![7])], 5);

        let err = design.to_matrix().unwrap_err();
        assert!(matches!(err, DesignError::OnsetOutOfRange { onset: 7, .. }));
    }

    #[test]
    fn test_amplitude_mismatch_is_rejected() {
        let design = StimulusDesign::new(
            vec![Condition::new("bad", vec![0, 1]).with_amplitudes(vec![1.0])],
            5,
        );

        let err = design.to_matrix().unwrap_err();
        assert!(matches!(err, DesignError::AmplitudeMismatch { .. }));
    }

    #[test]
    fn test_empty_design_is_rejected() {
        let design = StimulusDesign::new(vec![Condition::new("none", vec![])], 0);

        let err = design.to_matrix().unwrap_err();
        assert!(matches!(err, DesignError::EmptyDesign));
    }

    #[test]
    fn test_lag_matrix_composition() {
        let design = StimulusDesign::new(
            vec![
                Condition::new("a", vec![0]),
                Condition::new("b", vec![2]),
            ],
            4,
        );

        let f = design.lag_matrix(0, 1).unwrap();
        assert_eq!(f.dim(), (4, 4));
        // Condition "a" onset at volume 0, delayed copy peaks at volume 1
        assert!((f[[0, 0]] - 1.0).abs() < 1e-10);
        assert!((f[[1, 1]] - 1.0).abs() < 1e-10);
    }
}
