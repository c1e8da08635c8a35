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

use geo_types::{Coord, Line};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, Cross, PathElement, Polygon};
use plotters::prelude::{BitMapBackend, ChartBuilder, Color, DrawingBackend, IntoDrawingArea};
use plotters::style::{RGBColor, ShapeStyle, BLACK, RED, WHITE};

use trapezium_map::{AnnotatedDataset, ClippedTrapezium, Viewport};

use crate::error::DrawingResult;

/// Width and height of the produced image
pub const PIXEL_SIZE: u32 = 800;
/// Distance between grid lines, in viewport units
const GRID_SPACING: f64 = 20.0;
const GRID_COLOUR: RGBColor = RGBColor(220, 220, 220);
const TRAPEZIUM_COLOUR: RGBColor = RGBColor(255, 165, 0);
const TRAPEZIUM_OPACITY: f64 = 0.3;

/// The geometry to draw, already clamped to the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub segments: Vec<Line<f64>>,
    /// Only present if all four boundaries were in the dataset
    pub trapezium: Option<ClippedTrapezium>,
    pub query_point: Option<Coord<f64>>,
}

impl Scene {
    pub fn from_dataset(dataset: &AnnotatedDataset, viewport: &Viewport) -> DrawingResult<Scene> {
        Ok(Scene {
            segments: dataset
                .segments
                .iter()
                .map(|segment| viewport.clip_line(segment))
                .collect(),
            trapezium: dataset.trapezium(viewport)?,
            query_point: dataset.query_point.map(|p| viewport.clip_coord(p)),
        })
    }
}

#[inline]
fn as_tuple(coord: Coord<f64>) -> (f64, f64) {
    (coord.x, coord.y)
}

/// Draws the scene onto any plotters backend, with the viewport filling the area
pub fn render_scene<DB: DrawingBackend>(
    draw_backend: &DrawingArea<DB, Shift>,
    scene: &Scene,
    viewport: &Viewport,
) -> DrawingResult<()>
where
    DB::ErrorType: 'static,
{
    draw_backend.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(draw_backend).build_cartesian_2d(
        viewport.min..viewport.max,
        viewport.min..viewport.max,
    )?;

    let grid_style = ShapeStyle {
        color: GRID_COLOUR.to_rgba(),
        filled: false,
        stroke_width: 1,
    };
    let grid_lines = (viewport.width() / GRID_SPACING).floor() as usize;
    chart.draw_series((0..=grid_lines).flat_map(|index| {
        let offset = viewport.min + index as f64 * GRID_SPACING;
        [
            PathElement::new(vec![(offset, viewport.min), (offset, viewport.max)], grid_style),
            PathElement::new(vec![(viewport.min, offset), (viewport.max, offset)], grid_style),
        ]
    }))?;

    chart.draw_series(scene.segments.iter().map(|segment| {
        PathElement::new(
            vec![as_tuple(segment.start), as_tuple(segment.end)],
            ShapeStyle {
                color: BLACK.to_rgba(),
                filled: false,
                stroke_width: 1,
            },
        )
    }))?;
    debug!("Drew {} segments", scene.segments.len());

    if let Some(trapezium) = &scene.trapezium {
        let points: Vec<(f64, f64)> = trapezium.vertices().iter().copied().map(as_tuple).collect();
        chart.draw_series(std::iter::once(Polygon::new(
            points,
            ShapeStyle {
                color: TRAPEZIUM_COLOUR.mix(TRAPEZIUM_OPACITY),
                filled: true,
                stroke_width: 1,
            },
        )))?;
        debug!("Drew trapezium {:?}", trapezium.vertices());
    }

    if let Some(query) = scene.query_point {
        let query = as_tuple(query);
        chart.draw_series(std::iter::once(Circle::new(
            query,
            5,
            ShapeStyle {
                color: RED.to_rgba(),
                filled: true,
                stroke_width: 1,
            },
        )))?;
        chart.draw_series(std::iter::once(Cross::new(
            query,
            9,
            ShapeStyle {
                color: RED.to_rgba(),
                filled: false,
                stroke_width: 2,
            },
        )))?;
    }
    Ok(())
}

/// Creates a png at the given filename, showing the scene
pub fn draw_scene(filename: &str, scene: &Scene, viewport: &Viewport) -> DrawingResult<()> {
    let start_time = Instant::now();
    info!("Drawing {} segments to {}", scene.segments.len(), filename);
    let draw_backend = BitMapBackend::new(filename, (PIXEL_SIZE, PIXEL_SIZE)).into_drawing_area();
    render_scene(&draw_backend, scene, viewport)?;
    draw_backend.present()?;
    info!("Finished drawing in {:?}", start_time.elapsed());
    Ok(())
}

/// Rebuilds the scene of an annotated dataset, and draws it to a png
pub fn draw_dataset(
    filename: &str,
    dataset: &AnnotatedDataset,
    viewport: &Viewport,
) -> DrawingResult<()> {
    let scene = Scene::from_dataset(dataset, viewport)?;
    if scene.trapezium.is_none() {
        info!("Dataset does not describe a complete trapezium, it will not be drawn");
    }
    draw_scene(filename, &scene, viewport)
}
