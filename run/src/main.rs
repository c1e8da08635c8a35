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

use log::info;

use crate::arguments::{Arguments, Mode};

mod arguments;
mod execute_modes;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();
    let arguments = Arguments::load_from_arguments();
    info!("Using mode {:?}", arguments.mode);
    let total_time = Instant::now();
    match arguments.mode {
        Mode::Generate => execute_modes::generate(&arguments)?,
        Mode::GenerateSegments => execute_modes::generate_segments(&arguments)?,
        Mode::Draw => execute_modes::draw(&arguments)?,
    }
    info!("Finished in {:?}", total_time.elapsed());
    Ok(())
}
