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

//! Reading and writing the line based text files shared between the generator,
//! the trapezoidal map under test, and the visualiser
//!
//! Two forms exist:
//!
//! * The generated form, a segment count followed by `x1 y1 x2 y2` lines and a final `xq yq` line
//! * The annotated form, where every line starts with a keyword (`SEG`, `Above`, `Below`, `Left`, `Right`, `QUERY`)

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use geo_types::{Coord, Line};
use log::{debug, trace};

use crate::error::{DatasetError, DatasetResult};
use crate::geometry::{ClippedTrapezium, Viewport};

/// The segments and query point produced by a generator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub segments: Vec<Line<f64>>,
    pub query_point: Coord<f64>,
}

/// The segments, query, and the trapezium located by the map under test
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedDataset {
    pub segments: Vec<Line<f64>>,
    pub above: Option<Line<f64>>,
    pub below: Option<Line<f64>>,
    /// The x coordinate of the left boundary
    pub left: Option<f64>,
    /// The x coordinate of the right boundary
    pub right: Option<f64>,
    pub query_point: Option<Coord<f64>>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Keyword {
    Segment,
    Above,
    Below,
    Left,
    Right,
    Query,
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "SEG" => Ok(Keyword::Segment),
            "Above" | "TRAP_TOP" => Ok(Keyword::Above),
            "Below" | "TRAP_BOT" => Ok(Keyword::Below),
            "Left" | "TRAP_LEFT" => Ok(Keyword::Left),
            "Right" | "TRAP_RIGHT" => Ok(Keyword::Right),
            "QUERY" => Ok(Keyword::Query),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> DatasetResult<T> {
    token.parse().map_err(|_| DatasetError::ParseError {
        line,
        token: Some(token.to_string()),
        context: format!("'{}' is not a valid number", token),
    })
}

fn parse_values<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
    arity: Arity,
) -> DatasetResult<Vec<f64>> {
    let values = tokens
        .map(|token| parse_number(line, token))
        .collect::<DatasetResult<Vec<f64>>>()?;
    let valid = match arity {
        Arity::Exactly(count) => values.len() == count,
        Arity::AtLeast(count) => values.len() >= count,
    };
    if !valid {
        return Err(DatasetError::ParseError {
            line,
            token: None,
            context: format!("Expected {:?} values, found {}", arity, values.len()),
        });
    }
    Ok(values)
}

fn values_to_line(values: &[f64]) -> Line<f64> {
    Line::new((values[0], values[1]), (values[2], values[3]))
}

fn write_line<W: Write>(writer: &mut W, line: &Line<f64>) -> std::io::Result<()> {
    write!(
        writer,
        "{} {} {} {}",
        line.start.x, line.start.y, line.end.x, line.end.y
    )
}

impl Dataset {
    pub fn new(segments: Vec<Line<f64>>, query_point: Coord<f64>) -> Dataset {
        Dataset {
            segments,
            query_point,
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> DatasetResult<()> {
        writeln!(writer, "{}", self.segments.len())?;
        for segment in &self.segments {
            write_line(writer, segment)?;
            writeln!(writer)?;
        }
        writeln!(writer, "{} {}", self.query_point.x, self.query_point.y)?;
        Ok(())
    }

    /// Writes the dataset to the given file, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, filename: P) -> DatasetResult<()> {
        let filename = filename.as_ref();
        debug!(
            "Saving {} segments to {}",
            self.segments.len(),
            filename.display()
        );
        let file = File::create(filename).map_err(|e| {
            DatasetError::io_error(e, format!("Creating file {}", filename.display()))
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer
            .flush()
            .map_err(|e| DatasetError::io_error(e, format!("Flushing {}", filename.display())))
    }

    pub fn read_from<R: BufRead>(reader: R) -> DatasetResult<Dataset> {
        let mut lines = reader.lines();
        let mut lines_read = 0;
        let mut next_line = |expected: &str| -> DatasetResult<(usize, String)> {
            for line in lines.by_ref() {
                lines_read += 1;
                let line = line?;
                if !line.trim().is_empty() {
                    return Ok((lines_read, line));
                }
            }
            Err(DatasetError::ParseError {
                line: lines_read + 1,
                token: None,
                context: format!("Reached the end of the file, expected {}", expected),
            })
        };

        let (number, line) = next_line("the segment count")?;
        let count: usize = parse_number(number, line.trim())?;
        // The count is untrusted, a short file is reported when it runs out
        let mut segments = Vec::new();
        for _ in 0..count {
            let (number, line) = next_line("a segment")?;
            let values = parse_values(number, line.split_whitespace(), Arity::Exactly(4))?;
            segments.push(values_to_line(&values));
        }
        let (number, line) = next_line("the query point")?;
        let values = parse_values(number, line.split_whitespace(), Arity::Exactly(2))?;
        Ok(Dataset {
            segments,
            query_point: Coord {
                x: values[0],
                y: values[1],
            },
        })
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> DatasetResult<Dataset> {
        let filename = filename.as_ref();
        let file = File::open(filename).map_err(|e| {
            DatasetError::io_error(e, format!("Opening file {}", filename.display()))
        })?;
        Dataset::read_from(BufReader::new(file))
    }
}

impl AnnotatedDataset {
    /// Parses the keyword form
    ///
    /// Lines with an unknown keyword are skipped. If a singleton keyword (everything apart from `SEG`)
    /// is repeated, the last occurrence is kept
    pub fn read_from<R: BufRead>(reader: R) -> DatasetResult<AnnotatedDataset> {
        let mut dataset = AnnotatedDataset::default();
        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line?;
            let mut tokens = line.split_whitespace();
            let keyword = match tokens.next() {
                Some(keyword) => keyword,
                None => continue,
            };
            let keyword = match keyword.parse::<Keyword>() {
                Ok(keyword) => keyword,
                Err(_) => {
                    trace!("Ignoring line {} with unknown keyword '{}'", number, keyword);
                    continue;
                }
            };
            match keyword {
                Keyword::Segment => {
                    let values = parse_values(number, tokens, Arity::Exactly(4))?;
                    dataset.segments.push(values_to_line(&values));
                }
                Keyword::Above => {
                    let values = parse_values(number, tokens, Arity::Exactly(4))?;
                    dataset.above = Some(values_to_line(&values));
                }
                Keyword::Below => {
                    let values = parse_values(number, tokens, Arity::Exactly(4))?;
                    dataset.below = Some(values_to_line(&values));
                }
                Keyword::Left => {
                    let values = parse_values(number, tokens, Arity::AtLeast(1))?;
                    dataset.left = Some(values[0]);
                }
                Keyword::Right => {
                    let values = parse_values(number, tokens, Arity::AtLeast(1))?;
                    dataset.right = Some(values[0]);
                }
                Keyword::Query => {
                    let values = parse_values(number, tokens, Arity::Exactly(2))?;
                    dataset.query_point = Some(Coord {
                        x: values[0],
                        y: values[1],
                    });
                }
            }
        }
        debug!(
            "Read {} segments, trapezium complete: {}, query point: {:?}",
            dataset.segments.len(),
            dataset.has_trapezium(),
            dataset.query_point
        );
        Ok(dataset)
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> DatasetResult<AnnotatedDataset> {
        let filename = filename.as_ref();
        let file = File::open(filename).map_err(|e| {
            DatasetError::io_error(e, format!("Opening file {}", filename.display()))
        })?;
        AnnotatedDataset::read_from(BufReader::new(file))
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> DatasetResult<()> {
        for segment in &self.segments {
            write!(writer, "SEG ")?;
            write_line(writer, segment)?;
            writeln!(writer)?;
        }
        if let Some(above) = &self.above {
            write!(writer, "Above ")?;
            write_line(writer, above)?;
            writeln!(writer)?;
        }
        if let Some(below) = &self.below {
            write!(writer, "Below ")?;
            write_line(writer, below)?;
            writeln!(writer)?;
        }
        if let Some(left) = self.left {
            writeln!(writer, "Left {}", left)?;
        }
        if let Some(right) = self.right {
            writeln!(writer, "Right {}", right)?;
        }
        if let Some(query) = self.query_point {
            writeln!(writer, "QUERY {} {}", query.x, query.y)?;
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, filename: P) -> DatasetResult<()> {
        let filename = filename.as_ref();
        let file = File::create(filename).map_err(|e| {
            DatasetError::io_error(e, format!("Creating file {}", filename.display()))
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer
            .flush()
            .map_err(|e| DatasetError::io_error(e, format!("Flushing {}", filename.display())))
    }

    /// True if all four boundaries were present
    pub fn has_trapezium(&self) -> bool {
        self.above.is_some() && self.below.is_some() && self.left.is_some() && self.right.is_some()
    }

    /// Rebuilds the located trapezium, or None if any of the four boundaries is missing
    pub fn trapezium(&self, viewport: &Viewport) -> DatasetResult<Option<ClippedTrapezium>> {
        match (&self.above, &self.below, self.left, self.right) {
            (Some(above), Some(below), Some(left), Some(right)) => Ok(Some(
                ClippedTrapezium::reconstruct(above, below, left, right, viewport)?,
            )),
            _ => Ok(None),
        }
    }
}

impl From<Dataset> for AnnotatedDataset {
    fn from(dataset: Dataset) -> Self {
        AnnotatedDataset {
            segments: dataset.segments,
            query_point: Some(dataset.query_point),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use geo_types::{Coord, Line};

    use crate::dataset::{AnnotatedDataset, Dataset};
    use crate::error::DatasetError;
    use crate::geometry::Viewport;

    const ANNOTATED: &str = "SEG 0 0 10 0
SEG 0 10 10 10
Above 0 10 10 10
Below 0 0 10 0
Left 2 5
Right 8 5
QUERY 5 5
";

    fn example_segments() -> Vec<Line<f64>> {
        vec![
            Line::new((-12.5, 3.0), (40.0, 0.25)),
            Line::new((7.0, -99.0), (7.0, 99.0)),
            Line::new((0.1, 0.2), (0.30000000000000004, 1e-7)),
        ]
    }

    #[test]
    fn annotated_round_trip() {
        let dataset = AnnotatedDataset::from(Dataset::new(
            example_segments(),
            Coord { x: -3.75, y: 18.0 },
        ));
        let mut buffer = Vec::new();
        dataset.write_to(&mut buffer).unwrap();
        let read = AnnotatedDataset::read_from(Cursor::new(buffer)).unwrap();
        assert_eq!(read.segments, example_segments());
        assert_eq!(read.query_point, Some(Coord { x: -3.75, y: 18.0 }));
        assert!(!read.has_trapezium());
    }

    #[test]
    fn generated_round_trip() {
        let dataset = Dataset::new(example_segments(), Coord { x: 1.0, y: -2.0 });
        let mut buffer = Vec::new();
        dataset.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.starts_with("3\n-12.5 3 40 0.25\n"), "{}", text);
        assert!(text.ends_with("\n1 -2\n"), "{}", text);
        assert_eq!(Dataset::read_from(Cursor::new(buffer)).unwrap(), dataset);
    }

    #[test]
    fn save_replaces_existing_file() {
        let filename = std::env::temp_dir().join(format!(
            "trapezium_map_dataset_{}.txt",
            std::process::id()
        ));
        std::fs::write(&filename, "stale contents that are much longer than the dataset\n")
            .unwrap();
        let dataset = Dataset::new(vec![Line::new((0.0, 0.0), (1.0, 1.0))], Coord { x: 2.0, y: 3.0 });
        dataset.save(&filename).unwrap();
        assert_eq!(std::fs::read_to_string(&filename).unwrap(), "1\n0 0 1 1\n2 3\n");
        assert_eq!(Dataset::load(&filename).unwrap(), dataset);
        std::fs::remove_file(&filename).unwrap();
    }

    #[test]
    fn read_annotated_keywords() {
        let dataset = AnnotatedDataset::read_from(Cursor::new(ANNOTATED)).unwrap();
        assert_eq!(dataset.segments.len(), 2);
        assert_eq!(dataset.above, Some(Line::new((0.0, 10.0), (10.0, 10.0))));
        assert_eq!(dataset.below, Some(Line::new((0.0, 0.0), (10.0, 0.0))));
        assert_eq!(dataset.left, Some(2.0));
        assert_eq!(dataset.right, Some(8.0));
        assert_eq!(dataset.query_point, Some(Coord { x: 5.0, y: 5.0 }));

        let trapezium = dataset.trapezium(&Viewport::DEFAULT).unwrap().unwrap();
        assert_eq!(trapezium.top_left, Coord { x: 2.0, y: 10.0 });
        assert_eq!(trapezium.bottom_right, Coord { x: 8.0, y: 0.0 });
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        let with_unknown = format!("FOO 1 2 3 4\n{}\nBAR not numbers\n", ANNOTATED);
        assert_eq!(
            AnnotatedDataset::read_from(Cursor::new(with_unknown)).unwrap(),
            AnnotatedDataset::read_from(Cursor::new(ANNOTATED)).unwrap()
        );
    }

    #[test]
    fn original_trapezium_keywords() {
        let text = "SEG 0 0 10 0\nTRAP_TOP 0 10 10 10\nTRAP_BOT 0 0 10 0\nTRAP_LEFT 2 5\nTRAP_RIGHT 8 5\nQUERY 5 5\n";
        let dataset = AnnotatedDataset::read_from(Cursor::new(text)).unwrap();
        assert!(dataset.has_trapezium());
        assert_eq!(dataset.left, Some(2.0));
    }

    #[test]
    fn last_singleton_wins() {
        let text = "QUERY 1 1\nLeft -4\nAbove 0 0 1 1\nQUERY 2 2\nLeft 6\nAbove 0 5 1 5\n";
        let dataset = AnnotatedDataset::read_from(Cursor::new(text)).unwrap();
        assert_eq!(dataset.query_point, Some(Coord { x: 2.0, y: 2.0 }));
        assert_eq!(dataset.left, Some(6.0));
        assert_eq!(dataset.above, Some(Line::new((0.0, 5.0), (1.0, 5.0))));
    }

    #[test]
    fn missing_boundary_gives_no_trapezium() {
        let text = "Above 0 10 10 10\nBelow 0 0 10 0\nLeft 2\nQUERY 5 5\n";
        let dataset = AnnotatedDataset::read_from(Cursor::new(text)).unwrap();
        assert!(dataset.trapezium(&Viewport::DEFAULT).unwrap().is_none());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let result = AnnotatedDataset::read_from(Cursor::new("SEG 0 0\nSEG 1 x 2 3\n"));
        assert!(
            matches!(result, Err(DatasetError::ParseError { line: 1, .. })),
            "{:?}",
            result
        );
        let result = AnnotatedDataset::read_from(Cursor::new("SEG 0 0 1 1\nQUERY 1 y\n"));
        match result {
            Err(DatasetError::ParseError { line, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(token.as_deref(), Some("y"));
            }
            other => panic!("Expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn truncated_generated_file() {
        let result = Dataset::read_from(Cursor::new("2\n0 0 1 1\n"));
        match result {
            Err(DatasetError::ParseError { line, token, .. }) => {
                assert_eq!(line, 3, "Should point just past the last line read");
                assert_eq!(token, None);
            }
            other => panic!("Expected a parse error, got {:?}", other),
        }
        // Blank lines still count towards the reported position
        let result = Dataset::read_from(Cursor::new("1\n\n0 0 1 1\n\n"));
        assert!(
            matches!(result, Err(DatasetError::ParseError { line: 5, .. })),
            "{:?}",
            result
        );
    }

    #[test]
    fn oversized_count_is_a_parse_error() {
        let result = Dataset::read_from(Cursor::new("18446744073709551615\n0 0 1 1\n2 3\n"));
        assert!(
            matches!(result, Err(DatasetError::ParseError { .. })),
            "{:?}",
            result
        );
        let result = Dataset::read_from(Cursor::new("1000000000000\n0 0 1 1\n"));
        assert!(
            matches!(result, Err(DatasetError::ParseError { line: 3, .. })),
            "{:?}",
            result
        );
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let filename = std::env::temp_dir()
            .join(format!("trapezium_map_missing_{}", std::process::id()))
            .join("input.txt");
        let dataset = Dataset::new(vec![], Coord { x: 0.0, y: 0.0 });
        let result = dataset.save(&filename);
        assert!(
            matches!(result, Err(DatasetError::IOError { .. })),
            "{:?}",
            result
        );
        let result = AnnotatedDataset::from(dataset).save(&filename);
        assert!(
            matches!(result, Err(DatasetError::IOError { .. })),
            "{:?}",
            result
        );
    }
}
