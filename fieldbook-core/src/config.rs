// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine Configuration
//!
//! Tunable parameters for duplicate detection, graph filtering and layout.

use serde::{Deserialize, Serialize};

use crate::contact::duplicates::DEFAULT_DUPLICATE_THRESHOLD;
use crate::error::{EngineError, EngineResult};
use crate::graph::layout::DEFAULT_ITERATIONS;
use crate::graph::relationships::MAX_STRENGTH;

/// Duplicate thresholds offered by the review screen (0.5 to 0.95 in 0.05 steps).
pub const THRESHOLD_PRESETS: &[f64] = &[
    0.5, 0.55, 0.6, 0.65, 0.7, 0.75, 0.8, 0.85, 0.9, 0.95,
];

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Minimum comparator score for two contacts to be grouped as duplicates.
    pub duplicate_threshold: f64,

    /// Edges weaker than this are dropped from the dashboard graph.
    pub min_edge_strength: f64,

    /// Layout canvas width in pixels.
    pub canvas_width: f64,

    /// Layout canvas height in pixels.
    pub canvas_height: f64,

    /// Number of force simulation steps.
    pub layout_iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            min_edge_strength: 0.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            layout_iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl EngineConfig {
    /// Sets the duplicate threshold.
    pub fn with_duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = threshold;
        self
    }

    /// Sets the minimum edge strength kept in the graph.
    pub fn with_min_edge_strength(mut self, strength: f64) -> Self {
        self.min_edge_strength = strength;
        self
    }

    /// Sets the layout canvas dimensions.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Sets the number of layout iterations.
    pub fn with_layout_iterations(mut self, iterations: usize) -> Self {
        self.layout_iterations = iterations;
        self
    }

    /// Checks that every parameter is within its accepted range.
    pub fn validate(&self) -> EngineResult<()> {
        let t = self.duplicate_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(EngineError::InvalidThreshold(t));
        }

        let (w, h) = (self.canvas_width, self.canvas_height);
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(EngineError::InvalidCanvas {
                width: w,
                height: h,
            });
        }

        let s = self.min_edge_strength;
        if !s.is_finite() || !(0.0..=MAX_STRENGTH).contains(&s) {
            return Err(EngineError::InvalidConfig(format!(
                "minimum edge strength {} must be between 0 and {}",
                s, MAX_STRENGTH
            )));
        }

        Ok(())
    }
}
