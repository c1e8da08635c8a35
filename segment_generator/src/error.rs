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

use trapezium_map::DatasetError;

pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

pub enum GeneratorError {
    /// A count, ratio or domain that cannot be sampled from
    InvalidArgument {
        context: String,
    },
    /// The point cloud could not be triangulated
    Triangulation {
        context: String,
    },
    /// Writing the generated dataset failed
    Dataset {
        source: DatasetError,
    },
}

impl GeneratorError {
    pub fn invalid_argument(context: impl Into<String>) -> GeneratorError {
        GeneratorError::InvalidArgument {
            context: context.into(),
        }
    }
}

impl From<DatasetError> for GeneratorError {
    fn from(e: DatasetError) -> Self {
        GeneratorError::Dataset { source: e }
    }
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::InvalidArgument { context } => {
                write!(
                    f,
                    "\nAn error occurred generating segments\n:\tType: InvalidArgument\n\tContext: {}",
                    context
                )
            }
            GeneratorError::Triangulation { context } => {
                write!(
                    f,
                    "\nAn error occurred generating segments\n:\tType: Triangulation\n\tContext: {}",
                    context
                )
            }
            GeneratorError::Dataset { source } => {
                write!(
                    f,
                    "\nAn error occurred saving generated segments\n:\tType: Dataset\n\tSource: {}",
                    source
                )
            }
        }
    }
}

impl Debug for GeneratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            GeneratorError::InvalidArgument { .. } => None,
            GeneratorError::Triangulation { .. } => None,
            GeneratorError::Dataset { ref source } => Some(source),
        }
    }
}
