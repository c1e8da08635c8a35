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

use geo_types::{Coord, Rect};
use trapezium_map::GENERATED_FILENAME;

use crate::sampler::CoordinateKind;

/// Proportion of triangulation edges kept by the subdivision generator
pub const SUBDIVISION_SUBSET_RATIO: f64 = 0.7;
pub const TRIANGULATION_POINT_COUNT: usize = 25;
pub const TRIANGULATION_SEED: u64 = 42;

/// Everything needed to produce one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub num_points: usize,
    /// Points are drawn from this half open domain
    pub domain: Rect<f64>,
    /// The query point is drawn from this half open domain
    pub query_domain: Rect<f64>,
    pub coordinates: CoordinateKind,
    /// If set, only this proportion of the triangulation edges are written
    pub subset_ratio: Option<f64>,
    pub seed: Option<u64>,
    pub filename: String,
}

impl GeneratorConfig {
    /// A sparse subdivision of integer points in `[-100, 100)`, with the query biased to the centre
    pub fn subdivision(num_points: usize) -> GeneratorConfig {
        GeneratorConfig {
            num_points,
            domain: Rect::new(Coord { x: -100.0, y: -100.0 }, Coord { x: 100.0, y: 100.0 }),
            query_domain: Rect::new(Coord { x: -50.0, y: -50.0 }, Coord { x: 50.0, y: 50.0 }),
            coordinates: CoordinateKind::Integer,
            subset_ratio: Some(SUBDIVISION_SUBSET_RATIO),
            seed: None,
            filename: GENERATED_FILENAME.to_string(),
        }
    }

    /// Every edge of a seeded triangulation of real points in `[0, 10)`
    pub fn triangulation() -> GeneratorConfig {
        GeneratorConfig {
            num_points: TRIANGULATION_POINT_COUNT,
            domain: Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 }),
            query_domain: Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 100.0, y: 100.0 }),
            coordinates: CoordinateKind::Real,
            subset_ratio: None,
            seed: Some(TRIANGULATION_SEED),
            filename: GENERATED_FILENAME.to_string(),
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> GeneratorConfig {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn with_filename(mut self, filename: Option<String>) -> GeneratorConfig {
        if let Some(filename) = filename {
            self.filename = filename;
        }
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::triangulation()
    }
}
