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

//! Shared model for trapezoidal map test data
//!
//! Holds the text formats exchanged between the segment generator, the map under test and the
//! visualiser, along with the reconstruction of the located trapezium from its four boundaries

// https://www.ti.inf.ethz.ch/ew/lehre/CG12/lecture/Chapter%205.pdf
// https://www.cs.umd.edu/class/spring2020/cmsc754/Lects/lect08-trap-map.pdf
// http://cgm.cs.mcgill.ca/~athens/cs507/Projects/2002/JukkaKaartinen/

pub use dataset::{AnnotatedDataset, Dataset};
pub use error::{DatasetError, DatasetResult};
pub use geometry::{intersect_with_vertical, ClippedTrapezium, Viewport};

pub mod dataset;
pub mod error;
pub mod geometry;

/// Generated datasets are written here by default
pub const GENERATED_FILENAME: &str = "input.txt";
/// The map under test writes its annotated output here
pub const ANNOTATED_FILENAME: &str = "data.txt";
