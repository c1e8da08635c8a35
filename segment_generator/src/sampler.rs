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
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GeneratorError, GeneratorResult};

/// Whether sampled coordinates are whole numbers or arbitrary reals
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordinateKind {
    Integer,
    Real,
}

/// Builds the random source for a run, reproducible if a seed is given
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Ensures the half open range `[min, max)` of both axes contains at least one value of the given kind
fn check_domain(domain: &Rect<f64>, kind: CoordinateKind) -> GeneratorResult<()> {
    let (min, max) = (domain.min(), domain.max());
    let empty = match kind {
        CoordinateKind::Integer => min.x.ceil() >= max.x.ceil() || min.y.ceil() >= max.y.ceil(),
        CoordinateKind::Real => !(min.x < max.x && min.y < max.y),
    };
    if empty {
        return Err(GeneratorError::invalid_argument(format!(
            "Cannot sample {:?} points from the empty domain {:?} -> {:?}",
            kind, min, max
        )));
    }
    Ok(())
}

#[inline]
fn sample_axis<R: Rng>(rng: &mut R, min: f64, max: f64, kind: CoordinateKind) -> f64 {
    match kind {
        CoordinateKind::Integer => rng.gen_range(min.ceil() as i64..max.ceil() as i64) as f64,
        CoordinateKind::Real => rng.gen_range(min..max),
    }
}

/// Draws a single point uniformly from the half open domain
pub fn sample_point<R: Rng>(
    rng: &mut R,
    domain: &Rect<f64>,
    kind: CoordinateKind,
) -> GeneratorResult<Coord<f64>> {
    check_domain(domain, kind)?;
    Ok(Coord {
        x: sample_axis(rng, domain.min().x, domain.max().x, kind),
        y: sample_axis(rng, domain.min().y, domain.max().y, kind),
    })
}

/// Draws `count` points uniformly from the half open domain
pub fn sample_points<R: Rng>(
    rng: &mut R,
    count: usize,
    domain: &Rect<f64>,
    kind: CoordinateKind,
) -> GeneratorResult<Vec<Coord<f64>>> {
    check_domain(domain, kind)?;
    let points: Vec<Coord<f64>> = (0..count)
        .map(|_| Coord {
            x: sample_axis(rng, domain.min().x, domain.max().x, kind),
            y: sample_axis(rng, domain.min().y, domain.max().y, kind),
        })
        .collect();
    trace!(
        "Sample of points: {:?}",
        points.iter().take(10).collect::<Vec<&Coord<f64>>>()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use geo_types::{Coord, Rect};
    use rand::thread_rng;

    use crate::error::GeneratorError;
    use crate::sampler::{build_rng, sample_point, sample_points, CoordinateKind};

    fn domain(min: f64, max: f64) -> Rect<f64> {
        Rect::new(Coord { x: min, y: min }, Coord { x: max, y: max })
    }

    #[test]
    fn integer_points_stay_in_domain() {
        let mut rng = thread_rng();
        let points = sample_points(&mut rng, 500, &domain(-100.0, 100.0), CoordinateKind::Integer)
            .unwrap();
        assert_eq!(points.len(), 500);
        for point in points {
            assert_eq!(point.x.fract(), 0.0, "{:?} is not an integer point", point);
            assert_eq!(point.y.fract(), 0.0, "{:?} is not an integer point", point);
            assert!((-100.0..100.0).contains(&point.x), "{:?}", point);
            assert!((-100.0..100.0).contains(&point.y), "{:?}", point);
        }
    }

    #[test]
    fn real_points_stay_in_domain() {
        let mut rng = thread_rng();
        for point in sample_points(&mut rng, 500, &domain(0.0, 10.0), CoordinateKind::Real).unwrap() {
            assert!((0.0..10.0).contains(&point.x), "{:?}", point);
            assert!((0.0..10.0).contains(&point.y), "{:?}", point);
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let first = sample_points(&mut build_rng(Some(7)), 20, &domain(0.0, 10.0), CoordinateKind::Real)
            .unwrap();
        let second =
            sample_points(&mut build_rng(Some(7)), 20, &domain(0.0, 10.0), CoordinateKind::Real)
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_domain_is_rejected() {
        let mut rng = thread_rng();
        let result = sample_point(&mut rng, &domain(3.0, 3.0), CoordinateKind::Real);
        assert!(
            matches!(result, Err(GeneratorError::InvalidArgument { .. })),
            "{:?}",
            result
        );
        let result = sample_point(&mut rng, &domain(0.2, 0.7), CoordinateKind::Integer);
        assert!(
            matches!(result, Err(GeneratorError::InvalidArgument { .. })),
            "{:?}",
            result
        );
    }
}
