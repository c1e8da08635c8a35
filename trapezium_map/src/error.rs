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

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

pub enum DatasetError {
    /// An error occurs reading from or writing to disk
    IOError {
        source: std::io::Error,
        context: String,
    },
    /// A token that should hold a number is missing or malformed
    ParseError {
        line: usize,
        token: Option<String>,
        context: String,
    },
    /// A boundary line cannot be intersected, as it has no direction
    DegenerateGeometry {
        context: String,
    },
}

impl DatasetError {
    pub fn io_error(source: std::io::Error, context: impl Into<String>) -> DatasetError {
        DatasetError::IOError {
            source,
            context: context.into(),
        }
    }
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::IOError { source, context } => {
                write!(
                    f,
                    "\nAn error occurred accessing a dataset\n:\tType: IOError\n\tSource: {}\n\tContext: {}",
                    source, context
                )
            }
            DatasetError::ParseError {
                line,
                token,
                context,
            } => {
                write!(
                    f,
                    "\nAn error occurred parsing a dataset\n:\tType: ParseError\n\tLine: {}\n\tToken: {:?}\n\tContext: {}",
                    line, token, context
                )
            }
            DatasetError::DegenerateGeometry { context } => {
                write!(
                    f,
                    "\nAn error occurred reconstructing a trapezium\n:\tType: DegenerateGeometry\n\tContext: {}",
                    context
                )
            }
        }
    }
}

impl Debug for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::IOError {
            source: e,
            context: String::new(),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            DatasetError::IOError { ref source, .. } => Some(source),
            DatasetError::ParseError { .. } => None,
            DatasetError::DegenerateGeometry { .. } => None,
        }
    }
}
