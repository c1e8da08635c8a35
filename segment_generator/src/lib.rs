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

use std::time::Instant;

use log::{debug, info};
use trapezium_map::Dataset;

pub use crate::config::GeneratorConfig;
pub use crate::error::{GeneratorError, GeneratorResult};
pub use crate::sampler::CoordinateKind;

pub mod config;
pub mod error;
pub mod sampler;
pub mod triangulation;

/// Samples a point cloud, triangulates it, and picks the segments and query point
pub fn generate(config: &GeneratorConfig) -> GeneratorResult<Dataset> {
    let start_time = Instant::now();
    info!(
        "Generating segments from {} points, seed: {:?}",
        config.num_points, config.seed
    );
    let mut rng = sampler::build_rng(config.seed);
    let points =
        sampler::sample_points(&mut rng, config.num_points, &config.domain, config.coordinates)?;
    let edges = triangulation::extract_edges(&points)?;
    debug!("Extracted {} unique edges", edges.len());
    let segments = match config.subset_ratio {
        Some(ratio) => triangulation::select_subset(&mut rng, &edges, ratio)?,
        None => edges,
    };
    let query_point = sampler::sample_point(&mut rng, &config.query_domain, config.coordinates)?;
    info!(
        "Generated {} segments with query point ({}, {}) in {:?}",
        segments.len(),
        query_point.x,
        query_point.y,
        start_time.elapsed()
    );
    Ok(Dataset::new(segments, query_point))
}

/// Generates a dataset and saves it to the configured file
pub fn generate_and_save(config: &GeneratorConfig) -> GeneratorResult<Dataset> {
    let dataset = generate(config)?;
    dataset.save(&config.filename)?;
    info!("Saved dataset to {}", config.filename);
    Ok(dataset)
}
