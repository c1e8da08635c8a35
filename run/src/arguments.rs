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

use clap::{App, Arg, ArgMatches};
use log::warn;
use serde::Deserialize;

fn is_positive_integer(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(count) if count > 0 => Ok(()),
        _ => Err(format!("'{}' is not a positive integer", value)),
    }
}

pub fn build_app() -> App<'static, 'static> {
    App::new("Trapezium Map Test Data")
        .version("1.0")
        .author("Sam Ralph <sr1474@york.ac.uk>")
        .about("Generates segment sets for a trapezoidal map, and draws the trapezium it locates")
        .usage("run <mode> [num_points] [--seed=<seed>] [--input=<file>] [--output=<file>]
            \n    There are several modes available to choose from:\
            \n        generate             ->      Writes a random subset of the edges of a triangulation of <num_points> integer points\
            \n        generate_segments    ->      Writes every edge of a seeded triangulation of 25 points\
            \n        draw                 ->      Draws the segments, query point and trapezium reported by the trapezoidal map")
        .arg(
            Arg::with_name("mode")
                .help("Specifies what to run")
                .takes_value(true)
                .possible_values(&["generate", "generate_segments", "draw"])
                .required(true))
        .arg(
            Arg::with_name("num_points")
                .help("The number of points to triangulate, required by generate")
                .takes_value(true)
                .validator(is_positive_integer)
                .required_if("mode", "generate"))
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .help("Seed for the random number generator, so runs can be reproduced")
                .takes_value(true)
                .require_equals(true))
        .arg(
            Arg::with_name("input")
                .long("input")
                .help("The annotated dataset to draw (defaults to data.txt)")
                .takes_value(true)
                .require_equals(true))
        .arg(
            Arg::with_name("output")
                .long("output")
                .help("Where to write the generated dataset (input.txt) or image (data.png)")
                .takes_value(true)
                .require_equals(true))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    pub mode: Mode,
    pub num_points: Option<usize>,
    pub seed: Option<u64>,
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Generate,
    GenerateSegments,
    Draw,
}

impl Arguments {
    pub fn load_from_arguments() -> Arguments {
        Arguments::from_matches(&build_app().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Arguments {
        let mut arguments = Arguments::default();
        // Restricted to the known modes by clap
        if let Some(Ok(mode)) = matches.value_of("mode").map(|mode| serde_plain::from_str::<Mode>(mode)) {
            arguments.mode = mode;
        }

        // Validated by clap
        arguments.num_points = matches
            .value_of("num_points")
            .and_then(|count| count.parse().ok());

        if let Some(seed) = matches.value_of("seed") {
            match seed.parse() {
                Ok(seed) => arguments.seed = Some(seed),
                Err(e) => {
                    warn!("Failed to parse seed with value: '{}' and error {}. Using the default seed", seed, e)
                }
            }
        }
        arguments.input = matches.value_of("input").map(String::from);
        arguments.output = matches.value_of("output").map(String::from);
        arguments
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments {
            mode: Mode::GenerateSegments,
            num_points: None,
            seed: None,
            input: None,
            output: None,
        }
    }
}
