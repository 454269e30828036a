use docopt::Docopt;
use itertools::Itertools;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use wallcarver::{
    cells::Cartesian2DCoordinate,
    generators,
    pathing::Distances,
    units::{Height, Width},
};

const USAGE: &str = "Wallcarver

Usage:
    wallcarver_driver -h | --help
    wallcarver_driver [--grid-width=<w>] [--grid-height=<h>] [--seed=<n>] [--quiet]

Options:
    -h --help          Show this screen.
    --grid-width=<w>   The grid width in a w*h grid [default: 13].
    --grid-height=<h>  The grid height in a w*h grid [default: 15].
    --seed=<n>         Fix the random seed. The same seed and dimensions always carve the same maze.
    --quiet            Print only the summary line, not the wall mask rows.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_quiet: bool,
}

// We'll put our errors in an `errors` module; `error_chain!` creates the
// Error, ErrorKind, ResultExt and Result types and the From conversions that
// let ? work for our `Error`.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            GridFailure(::wallcarver::grid::GridError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut rng = match args.flag_seed {
        Some(seed) => XorShiftRng::seed_from_u64(seed),
        None => XorShiftRng::from_entropy(),
    };

    let masks = generators::carve_perfect_maze(
        Width(args.flag_grid_width),
        Height(args.flag_grid_height),
        &mut rng,
    )?;

    if !args.flag_quiet {
        for row in masks.masks().chunks(masks.width as usize) {
            println!("{}", row.iter().map(|mask| format!("{:2}", mask)).join(" "));
        }
    }

    let origin = Cartesian2DCoordinate::new(0, 0);
    let distances =
        Distances::new(&masks, origin).ok_or("Maze export is missing its origin cell.")?;
    println!(
        "{}x{} maze: {} cells, {} reachable from (0, 0), furthest cell is {} steps away",
        masks.width,
        masks.height,
        masks.size(),
        distances.reachable_cells_count(),
        distances.max()
    );

    Ok(())
}
