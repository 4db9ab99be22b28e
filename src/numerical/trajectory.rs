//! Tabulated solution of a scalar IVP.
//!
//! A `Trajectory` is an ordered, immutable sequence of samples with consecutive
//! indices starting at 0 and strictly increasing `x`. Solvers fill a private
//! `TrajectoryBuilder` and hand over the finished table.
use log::warn;
use nalgebra::DVector;
use std::fmt;
use tabled::{builder::Builder, settings::Style};

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// `f(x, y)` at this sample; `None` where a method does not compute it
    pub derivative_value: Option<f64>,
}

/// `(x0, y0)` with `y(x0) = y0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialPoint {
    pub x0: f64,
    pub y0: f64,
}

impl InitialPoint {
    pub fn new(x0: f64, y0: f64) -> Self {
        InitialPoint { x0, y0 }
    }
}

impl From<(f64, f64)> for InitialPoint {
    fn from((x0, y0): (f64, f64)) -> Self {
        InitialPoint { x0, y0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn index(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.index).collect()
    }

    /// argument column
    pub fn x(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.samples.iter().map(|s| s.x))
    }

    /// solution column
    pub fn y(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.samples.iter().map(|s| s.y))
    }

    /// `f(x, y)` column, present only if every sample carries it
    pub fn derivative_values(&self) -> Option<DVector<f64>> {
        let values: Option<Vec<f64>> = self.samples.iter().map(|s| s.derivative_value).collect();
        values.map(DVector::from_vec)
    }

    /// (x, y) columns
    pub fn get_result(&self) -> (DVector<f64>, DVector<f64>) {
        (self.x(), self.y())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(["i", "x", "y", "f(x,y)"]);
        for sample in &self.samples {
            let derivative = match sample.derivative_value {
                Some(value) => format!("{:.6}", value),
                None => "-".to_string(),
            };
            builder.push_record([
                sample.index.to_string(),
                format!("{:.6}", sample.x),
                format!("{:.6}", sample.y),
                derivative,
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        write!(f, "{}", table)
    }
}

/// upper bound on the samples reserved up front, longer tables grow on demand
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Number of samples `x0 + j*step`, `j = 0..=floor(span/step)`, or `None` when the
/// count does not fit in `usize`.
pub(crate) fn sample_count(span: f64, step: f64) -> Option<usize> {
    let steps = (span / step).floor();
    if !steps.is_finite() || steps < 0.0 || steps >= usize::MAX as f64 {
        return None;
    }
    (steps as usize).checked_add(1)
}

/// Append-only accumulator; the index of each new sample is its position.
pub(crate) struct TrajectoryBuilder {
    samples: Vec<Sample>,
}

impl TrajectoryBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        TrajectoryBuilder {
            samples: Vec::with_capacity(capacity.min(MAX_RESERVED_SAMPLES)),
        }
    }

    pub(crate) fn push(&mut self, x: f64, y: f64, derivative_value: Option<f64>) {
        let index = self.samples.len();
        self.samples.push(Sample {
            index,
            x,
            y,
            derivative_value,
        });
    }

    pub(crate) fn build(self) -> Trajectory {
        if let Some(bad) = self.samples.iter().find(|s| {
            !s.x.is_finite()
                || !s.y.is_finite()
                || s.derivative_value.is_some_and(|value| !value.is_finite())
        }) {
            warn!(
                "trajectory contains non-finite values starting at sample {} (x = {}, y = {})",
                bad.index, bad.x, bad.y
            );
        }
        Trajectory {
            samples: self.samples,
        }
    }
}
