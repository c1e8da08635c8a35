/*
 * Trapezium Map Test Data Tools (TMTD)
 * Copyright (c)  2022. Sam Ralph
 *
 * This file is part of TMTD.
 *
 * TMTD is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, version 3 of the License.
 *
 * TMTD is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with TMTD.  If not, see <https://www.gnu.org/licenses/>.
 *
 */

use std::collections::{BTreeSet, HashSet};

use geo_types::{Coord, Line};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use voronoice::{BoundingBox, ClipBehavior, VoronoiBuilder};

use crate::error::{GeneratorError, GeneratorResult};

/// Order independent identifier for an undirected edge between two sites
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> EdgeKey {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
    pub fn indices(&self) -> (usize, usize) {
        (self.0, self.1)
    }
}

/// Returns the minimum and maximum corners of the given points
fn find_point_bounds(points: &[Coord<f64>]) -> (Coord<f64>, Coord<f64>) {
    let mut min = Coord {
        x: f64::MAX,
        y: f64::MAX,
    };
    let mut max = Coord {
        x: f64::MIN,
        y: f64::MIN,
    };
    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    (min, max)
}

/// A Delaunay triangulation of a point cloud
pub struct Triangulation {
    /// The sites that the triangle indices refer to
    pub sites: Vec<Coord<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    pub fn new(points: &[Coord<f64>]) -> GeneratorResult<Triangulation> {
        if points.len() < 3 {
            return Err(GeneratorError::invalid_argument(format!(
                "At least 3 points are required to triangulate, only {} given",
                points.len()
            )));
        }
        let mut seen = HashSet::with_capacity(points.len());
        let unique: Vec<Coord<f64>> = points
            .iter()
            .filter(|p| seen.insert((p.x.to_bits(), p.y.to_bits())))
            .copied()
            .collect();
        if unique.len() != points.len() {
            debug!(
                "Removed {} duplicate points before triangulating",
                points.len() - unique.len()
            );
        }
        let (min, max) = find_point_bounds(&unique);
        // Padded so every site sits strictly inside the box
        let width = (max.x - min.x) * 2.0 + 2.0;
        let height = (max.y - min.y) * 2.0 + 2.0;
        let bounding_box = BoundingBox::new(
            voronoice::Point {
                x: (min.x + max.x) / 2.0,
                y: (min.y + max.y) / 2.0,
            },
            width,
            height,
        );
        trace!("Triangulation boundary box: {:?}", bounding_box);
        let sites: Vec<voronoice::Point> = unique
            .iter()
            .map(|p| voronoice::Point { x: p.x, y: p.y })
            .collect();
        let voronoi = VoronoiBuilder::default()
            .set_sites(sites)
            .set_bounding_box(bounding_box)
            .set_clip_behavior(ClipBehavior::Clip)
            .set_lloyd_relaxation_iterations(0)
            .build()
            .ok_or_else(|| GeneratorError::Triangulation {
                context: format!("Failed to triangulate {} points", points.len()),
            })?;

        let triangles: Vec<[usize; 3]> = voronoi
            .triangulation()
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        if triangles.is_empty() {
            return Err(GeneratorError::Triangulation {
                context: format!(
                    "Triangulation of {} points produced no triangles, are they collinear?",
                    points.len()
                ),
            });
        }
        let sites = voronoi
            .sites()
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        debug!(
            "Triangulated {} points into {} triangles",
            points.len(),
            triangles.len()
        );
        Ok(Triangulation { sites, triangles })
    }

    /// Every triangle side, with the copies from neighbouring triangles merged
    pub fn edge_keys(&self) -> BTreeSet<EdgeKey> {
        let mut edges = BTreeSet::new();
        for t in &self.triangles {
            for (i, j) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                edges.insert(EdgeKey::new(i, j));
            }
        }
        edges
    }

    pub fn edge_to_line(&self, edge: EdgeKey) -> Line<f64> {
        let (a, b) = edge.indices();
        Line::new(self.sites[a], self.sites[b])
    }

    pub fn edges(&self) -> Vec<Line<f64>> {
        self.edge_keys()
            .into_iter()
            .map(|edge| self.edge_to_line(edge))
            .collect()
    }
}

/// Triangulates the points, and returns the deduplicated triangle sides
///
/// Callers should not depend on the order of the returned edges
pub fn extract_edges(points: &[Coord<f64>]) -> GeneratorResult<Vec<Line<f64>>> {
    Ok(Triangulation::new(points)?.edges())
}

/// Picks `floor(edges.len() * ratio)` edges without replacement
///
/// Any subset of a planar graph's edges is still non crossing
pub fn select_subset<R: Rng>(
    rng: &mut R,
    edges: &[Line<f64>],
    ratio: f64,
) -> GeneratorResult<Vec<Line<f64>>> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(GeneratorError::invalid_argument(format!(
            "Subset ratio {} must be within (0, 1]",
            ratio
        )));
    }
    let subset_size = (edges.len() as f64 * ratio).floor() as usize;
    debug!("Selecting {} of {} edges", subset_size, edges.len());
    Ok(edges
        .choose_multiple(rng, subset_size)
        .copied()
        .collect())
}
