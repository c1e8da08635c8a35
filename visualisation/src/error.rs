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

use plotters::drawing::DrawingAreaErrorKind;
use trapezium_map::DatasetError;

pub type DrawingResult<T> = std::result::Result<T, MyDrawingError>;

pub enum MyDrawingError {
    Drawing {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The dataset could not be loaded, or its trapezium rebuilt
    Geometry {
        source: DatasetError,
    },
}

impl Display for MyDrawingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MyDrawingError::Drawing { message, source } => {
                write!(f, "{} -> {}", message, source)
            }
            MyDrawingError::Geometry { source } => {
                write!(f, "Failed to build the scene -> {}", source)
            }
        }
    }
}

impl Debug for MyDrawingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T: 'static + std::error::Error + Send + Sync> From<DrawingAreaErrorKind<T>>
    for MyDrawingError
{
    fn from(e: DrawingAreaErrorKind<T>) -> Self {
        Self::Drawing {
            message: String::from("Failed to draw on the backend"),
            source: Box::new(e),
        }
    }
}

impl From<DatasetError> for MyDrawingError {
    fn from(e: DatasetError) -> Self {
        Self::Geometry { source: e }
    }
}

impl std::error::Error for MyDrawingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MyDrawingError::Drawing { source, .. } => Some(source.as_ref()),
            MyDrawingError::Geometry { source } => Some(source),
        }
    }
}
