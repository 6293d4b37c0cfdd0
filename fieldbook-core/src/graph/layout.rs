// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Force-Directed Layout
//!
//! Pure spring/repulsion simulation. Nodes start evenly spaced on a circle,
//! then for a fixed number of steps every pair repels, every edge pulls
//! toward its rest length, and the summed force moves each node by a damped
//! amount. Positions are clamped inside a margin after every step.
//!
//! No randomness: identical input order and canvas give identical output.
//! The result is approximate and does not guarantee non-overlapping nodes.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{GraphEdge, GraphNode};

/// Simulation steps used by the dashboard.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Minimum distance kept between a node and every canvas edge.
pub const MARGIN: f64 = 50.0;

const INITIAL_RADIUS_RATIO: f64 = 0.3;
const REPULSION: f64 = 1000.0;
const SPRING_LENGTH: f64 = 100.0;
const SPRING_CONSTANT: f64 = 0.1;
const DAMPING: f64 = 0.1;
// Below this separation the repulsion direction is undefined.
const EPSILON: f64 = 1e-6;
// Floor on the repulsion distance so coincident nodes do not explode.
const MIN_REPULSION_DISTANCE: f64 = 1.0;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Clamps a coordinate to `[MARGIN, extent - MARGIN]`, or to the midpoint
/// when the canvas is too small to hold the margin.
fn clamp_axis(value: f64, extent: f64) -> f64 {
    if extent < 2.0 * MARGIN {
        return extent / 2.0;
    }
    value.clamp(MARGIN, extent - MARGIN)
}

/// Fixed fallback direction for coincident nodes `i` and `j`.
fn fallback_direction(i: usize, j: usize) -> (f64, f64) {
    let angle = ((i as f64) * 0.618_034 + (j as f64) * 0.414_214) * TAU;
    (angle.cos(), angle.sin())
}

/// Computes node positions within a `width` x `height` canvas.
///
/// Runs `iterations` simulation steps. Edges naming unknown nodes are
/// ignored. O(iterations · n²).
pub fn layout(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    width: f64,
    height: f64,
    iterations: usize,
) -> BTreeMap<String, Position> {
    let n = nodes.len();
    if n == 0 {
        return BTreeMap::new();
    }

    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();
    let springs: Vec<(usize, usize, f64)> = edges
        .iter()
        .filter_map(|e| {
            let s = *index.get(e.source.as_str())?;
            let t = *index.get(e.target.as_str())?;
            (s != t).then_some((s, t, e.strength))
        })
        .collect();

    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = INITIAL_RADIUS_RATIO * width.min(height);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (
                clamp_axis(cx + radius * angle.cos(), width),
                clamp_axis(cy + radius * angle.sin(), height),
            )
        })
        .collect();

    for step in 0..iterations {
        let mut forces = vec![(0.0f64, 0.0f64); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let distance = (dx * dx + dy * dy).sqrt();
                let (ux, uy) = if distance > EPSILON {
                    (dx / distance, dy / distance)
                } else {
                    fallback_direction(i, j)
                };

                let d = distance.max(MIN_REPULSION_DISTANCE);
                let repulsion = REPULSION / (d * d);

                forces[i].0 += ux * repulsion;
                forces[i].1 += uy * repulsion;
                forces[j].0 -= ux * repulsion;
                forces[j].1 -= uy * repulsion;
            }
        }

        for &(s, t, strength) in &springs {
            let dx = pos[t].0 - pos[s].0;
            let dy = pos[t].1 - pos[s].1;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= EPSILON {
                continue;
            }

            let pull = (distance - SPRING_LENGTH) * SPRING_CONSTANT * strength;
            let (ux, uy) = (dx / distance, dy / distance);

            forces[s].0 += ux * pull;
            forces[s].1 += uy * pull;
            forces[t].0 -= ux * pull;
            forces[t].1 -= uy * pull;
        }

        for (p, f) in pos.iter_mut().zip(&forces) {
            p.0 = clamp_axis(p.0 + f.0 * DAMPING, width);
            p.1 = clamp_axis(p.1 + f.1 * DAMPING, height);
        }

        trace!(step, "layout step");
    }

    nodes
        .iter()
        .zip(pos)
        .map(|(node, (x, y))| (node.id.clone(), Position { x, y }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_small_canvas_collapses_to_midpoint() {
        assert_eq!(clamp_axis(10.0, 80.0), 40.0);
    }

    #[test]
    fn test_clamp_axis_bounds() {
        assert_eq!(clamp_axis(0.0, 800.0), 50.0);
        assert_eq!(clamp_axis(900.0, 800.0), 750.0);
        assert_eq!(clamp_axis(400.0, 800.0), 400.0);
    }
}
