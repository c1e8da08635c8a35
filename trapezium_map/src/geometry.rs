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

use geo_types::{Coord, Line};
use log::trace;

use crate::error::{DatasetError, DatasetResult};

/// The square region that coordinates are clamped to before drawing
///
/// The same range is applied to both axes
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub min: f64,
    pub max: f64,
}

impl Viewport {
    pub const DEFAULT: Viewport = Viewport {
        min: -100.0,
        max: 100.0,
    };

    /// Clamps a single value into the viewport, values already inside are returned unchanged
    #[inline]
    pub fn clip(&self, value: f64) -> f64 {
        self.min.max(self.max.min(value))
    }

    #[inline]
    pub fn clip_coord(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: self.clip(coord.x),
            y: self.clip(coord.y),
        }
    }

    pub fn clip_line(&self, line: &Line<f64>) -> Line<f64> {
        Line::new(self.clip_coord(line.start), self.clip_coord(line.end))
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::DEFAULT
    }
}

/// Finds where the infinite extension of `line` crosses the vertical line `x`
///
/// If `line` is itself vertical, the y coordinate of its start is reused, giving `(x, start.y)`
pub fn intersect_with_vertical(line: &Line<f64>, x: f64) -> DatasetResult<Coord<f64>> {
    if line.start == line.end {
        return Err(DatasetError::DegenerateGeometry {
            context: format!(
                "Boundary line has coincident endpoints ({}, {})",
                line.start.x, line.start.y
            ),
        });
    }
    if line.start.x == line.end.x {
        return Ok(Coord {
            x,
            y: line.start.y,
        });
    }
    let slope = (line.end.y - line.start.y) / (line.end.x - line.start.x);
    if !slope.is_finite() {
        return Err(DatasetError::DegenerateGeometry {
            context: format!(
                "Slope of boundary line ({}, {}) -> ({}, {}) is not finite",
                line.start.x, line.start.y, line.end.x, line.end.y
            ),
        });
    }
    Ok(Coord {
        x,
        y: line.start.y + slope * (x - line.start.x),
    })
}

/// The region between the Above and Below lines, cut by the Left and Right x coordinates
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClippedTrapezium {
    pub bottom_left: Coord<f64>,
    pub bottom_right: Coord<f64>,
    pub top_right: Coord<f64>,
    pub top_left: Coord<f64>,
}

impl ClippedTrapezium {
    pub fn reconstruct(
        top: &Line<f64>,
        bottom: &Line<f64>,
        left_x: f64,
        right_x: f64,
        viewport: &Viewport,
    ) -> DatasetResult<ClippedTrapezium> {
        let left_x = viewport.clip(left_x);
        let right_x = viewport.clip(right_x);
        let trapezium = ClippedTrapezium {
            bottom_left: viewport.clip_coord(intersect_with_vertical(bottom, left_x)?),
            bottom_right: viewport.clip_coord(intersect_with_vertical(bottom, right_x)?),
            top_right: viewport.clip_coord(intersect_with_vertical(top, right_x)?),
            top_left: viewport.clip_coord(intersect_with_vertical(top, left_x)?),
        };
        trace!("Reconstructed trapezium {:?}", trapezium);
        Ok(trapezium)
    }

    /// The corners, ordered bottom left, bottom right, top right, top left
    pub fn vertices(&self) -> [Coord<f64>; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_right,
            self.top_left,
        ]
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{Coord, Line};

    use crate::error::DatasetError;
    use crate::geometry::{intersect_with_vertical, ClippedTrapezium, Viewport};

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn clip_values() {
        let viewport = Viewport::DEFAULT;
        assert_eq!(viewport.clip(50.0), 50.0);
        assert_eq!(viewport.clip(-100.0), -100.0);
        assert_eq!(viewport.clip(100.0), 100.0);
        assert_eq!(viewport.clip(150.0), 100.0);
        assert_eq!(viewport.clip(-500.0), -100.0);
        assert_eq!(
            viewport.clip_coord(coord(250.0, -3.5)),
            coord(100.0, -3.5)
        );
    }

    #[test]
    fn vertical_boundary_reuses_start_y() {
        let line = Line::new((5.0, 5.0), (5.0, 20.0));
        assert_eq!(intersect_with_vertical(&line, 5.0).unwrap(), coord(5.0, 5.0));
        assert_eq!(
            intersect_with_vertical(&line, -3.0).unwrap(),
            coord(-3.0, 5.0)
        );
    }

    #[test]
    fn sloped_boundary() {
        let line = Line::new((0.0, 0.0), (10.0, 20.0));
        assert_eq!(intersect_with_vertical(&line, 5.0).unwrap(), coord(5.0, 10.0));
        assert_eq!(
            intersect_with_vertical(&line, -5.0).unwrap(),
            coord(-5.0, -10.0)
        );
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let line = Line::new((3.0, 4.0), (3.0, 4.0));
        let result = intersect_with_vertical(&line, 1.0);
        assert!(
            matches!(result, Err(DatasetError::DegenerateGeometry { .. })),
            "Expected a degenerate geometry error, got {:?}",
            result
        );
    }

    #[test]
    fn trapezium_winding_order() {
        let top = Line::new((0.0, 10.0), (10.0, 10.0));
        let bottom = Line::new((0.0, 0.0), (10.0, 0.0));
        let trapezium =
            ClippedTrapezium::reconstruct(&top, &bottom, 2.0, 8.0, &Viewport::DEFAULT).unwrap();
        assert_eq!(
            trapezium.vertices(),
            [
                coord(2.0, 0.0),
                coord(8.0, 0.0),
                coord(8.0, 10.0),
                coord(2.0, 10.0)
            ]
        );
    }

    #[test]
    fn trapezium_is_clipped_to_viewport() {
        let top = Line::new((0.0, 0.0), (1.0, 10.0));
        let bottom = Line::new((0.0, -50.0), (1.0, -50.0));
        let trapezium =
            ClippedTrapezium::reconstruct(&top, &bottom, -500.0, 20.0, &Viewport::DEFAULT)
                .unwrap();
        // Left is pulled in to the edge before intersecting, the steep top then escapes the viewport
        assert_eq!(trapezium.bottom_left, coord(-100.0, -50.0));
        assert_eq!(trapezium.top_left, coord(-100.0, -100.0));
        assert_eq!(trapezium.top_right, coord(20.0, 100.0));
        assert_eq!(trapezium.bottom_right, coord(20.0, -50.0));
    }
}
