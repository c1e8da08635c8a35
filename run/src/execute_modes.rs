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

use std::fmt::{Debug, Display, Formatter};

use anyhow::Context;
use log::info;

use segment_generator::GeneratorConfig;
use trapezium_map::{AnnotatedDataset, Viewport, ANNOTATED_FILENAME};
use visualisation::IMAGE_FILENAME;

use crate::arguments::Arguments;
use crate::execute_modes::RuntimeError::MissingArguments;

pub enum RuntimeError {
    MissingArguments(String),
}

impl Debug for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::MissingArguments(err) => {
                write!(f, "Missing Arguments: {}", err)
            }
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RuntimeError {}

/// Writes a sparse subdivision, using a subset of the triangulation edges
pub fn generate(arguments: &Arguments) -> anyhow::Result<()> {
    let num_points = arguments
        .num_points
        .ok_or_else(|| MissingArguments("The number of points must be provided".to_string()))
        .context("Mode: Generate")?;
    let config = GeneratorConfig::subdivision(num_points)
        .with_seed(arguments.seed)
        .with_filename(arguments.output.clone());
    segment_generator::generate_and_save(&config)
        .context(format!("Failed to generate a subdivision of {} points", num_points))?;
    Ok(())
}

/// Writes every edge of a small seeded triangulation
pub fn generate_segments(arguments: &Arguments) -> anyhow::Result<()> {
    let config = GeneratorConfig::triangulation()
        .with_seed(arguments.seed)
        .with_filename(arguments.output.clone());
    segment_generator::generate_and_save(&config)
        .context("Failed to generate triangulation segments")?;
    Ok(())
}

pub fn draw(arguments: &Arguments) -> anyhow::Result<()> {
    let input = arguments.input.as_deref().unwrap_or(ANNOTATED_FILENAME);
    let output = arguments.output.as_deref().unwrap_or(IMAGE_FILENAME);
    info!("Drawing dataset {} to {}", input, output);
    let dataset = AnnotatedDataset::load(input)
        .context(format!("Failed to load annotated dataset {}", input))?;
    visualisation::draw_dataset(output, &dataset, &Viewport::DEFAULT)
        .context(format!("Failed to draw dataset to {}", output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use trapezium_map::{AnnotatedDataset, Dataset};

    use crate::arguments::{Arguments, Mode};
    use crate::execute_modes::{draw, generate, generate_segments};

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("run_{}_{}", std::process::id(), name))
    }

    #[test]
    fn generate_without_points_fails() {
        let arguments = Arguments {
            mode: Mode::Generate,
            ..Default::default()
        };
        assert!(generate(&arguments).is_err());
    }

    #[test]
    fn generate_then_draw() {
        let generated = temp_file("input.txt");
        let arguments = Arguments {
            mode: Mode::Generate,
            num_points: Some(40),
            seed: Some(11),
            output: Some(generated.to_string_lossy().to_string()),
            ..Default::default()
        };
        generate(&arguments).unwrap();
        let dataset = Dataset::load(&generated).unwrap();
        assert!(!dataset.segments.is_empty());

        // Stand in for the trapezoidal map, annotating the generated segments with a trapezium
        let mut annotated = AnnotatedDataset::from(dataset);
        annotated.above = Some(geo_types::Line::new((-100.0, 40.0), (100.0, 30.0)));
        annotated.below = Some(geo_types::Line::new((-100.0, -40.0), (100.0, -20.0)));
        annotated.left = Some(-25.0);
        annotated.right = Some(35.0);
        let annotated_file = temp_file("data.txt");
        annotated.save(&annotated_file).unwrap();

        let image = temp_file("data.png");
        let arguments = Arguments {
            mode: Mode::Draw,
            input: Some(annotated_file.to_string_lossy().to_string()),
            output: Some(image.to_string_lossy().to_string()),
            ..Default::default()
        };
        draw(&arguments).unwrap();
        assert!(std::fs::metadata(&image).unwrap().len() > 0);

        for file in [generated, annotated_file, image] {
            std::fs::remove_file(file).unwrap();
        }
    }

    #[test]
    fn generate_segments_writes_dataset() {
        let generated = temp_file("segments.txt");
        let arguments = Arguments {
            mode: Mode::GenerateSegments,
            output: Some(generated.to_string_lossy().to_string()),
            ..Default::default()
        };
        generate_segments(&arguments).unwrap();
        let dataset = Dataset::load(&generated).unwrap();
        for segment in &dataset.segments {
            assert!((0.0..10.0).contains(&segment.start.x));
            assert!((0.0..10.0).contains(&segment.end.y));
        }
        std::fs::remove_file(generated).unwrap();
    }

    #[test]
    fn draw_missing_file_fails() {
        let arguments = Arguments {
            mode: Mode::Draw,
            input: Some(temp_file("does_not_exist.txt").to_string_lossy().to_string()),
            ..Default::default()
        };
        assert!(draw(&arguments).is_err());
    }
}
