use rand::Rng;
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;
use std::{error, fmt};

use crate::cells::{Cartesian2DCoordinate, CellState, WallDirection};
use crate::units::{Height, PassagesCount, Width};

pub type NeighbourSmallVec = SmallVec<[(WallDirection, Cartesian2DCoordinate); 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    InvalidArgument { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::InvalidArgument { width, height } => {
                write!(
                    f,
                    "invalid grid dimensions {}x{}, width and height must be positive",
                    width, height
                )
            }
        }
    }
}

impl error::Error for GridError {}

/// A W×H grid of cell wall states, owned by one generation run.
///
/// Coordinates are row-major: (x, y) with 0 <= x < W and 0 <= y < H.
/// Neighbour enumeration pre-filters the grid boundary, so the carving
/// algorithm never produces an out-of-range coordinate.
#[derive(Debug)]
pub struct CellGrid {
    cells: Vec<CellState>,
    width: Width,
    height: Height,
}

impl CellGrid {
    /// Allocate a grid with every cell unvisited and all four walls standing.
    ///
    /// Fails with `GridError::InvalidArgument`, before any allocation, if
    /// either dimension is zero.
    pub fn new(width: Width, height: Height) -> Result<CellGrid, GridError> {
        let (Width(w), Height(h)) = (width, height);
        if w == 0 || h == 0 {
            return Err(GridError::InvalidArgument {
                width: w,
                height: h,
            });
        }

        Ok(CellGrid {
            cells: vec![CellState::initial(); w * h],
            width,
            height,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    /// Direct indexed access. Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, coord: Cartesian2DCoordinate) -> CellState {
        self.cells[self.cell_index(coord)]
    }

    /// Direct indexed write. Panics if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Cartesian2DCoordinate, state: CellState) {
        let index = self.cell_index(coord);
        self.cells[index] = state;
    }

    pub fn random_cell(&self, rng: &mut XorShiftRng) -> Cartesian2DCoordinate {
        let index = rng.gen::<usize>() % self.size();
        index_to_grid_coordinate(self.width.0, index)
    }

    /// Adjacent cells that share a wall with this cell, paired with the wall
    /// direction as seen from this cell. At most 4 entries, boundary edges
    /// excluded, emitted in the fixed order Left, Top, Right, Bottom.
    ///
    /// The order has no semantic meaning; callers wanting unbiased traversal
    /// must shuffle it.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> NeighbourSmallVec {
        let (x, y) = (coord.x, coord.y);
        let mut adjacent = NeighbourSmallVec::new();

        if x > 0 {
            adjacent.push((WallDirection::Left, Cartesian2DCoordinate::new(x - 1, y)));
        }
        if y > 0 {
            adjacent.push((WallDirection::Top, Cartesian2DCoordinate::new(x, y - 1)));
        }
        if (x + 1) < self.width.0 as u32 {
            adjacent.push((WallDirection::Right, Cartesian2DCoordinate::new(x + 1, y)));
        }
        if (y + 1) < self.height.0 as u32 {
            adjacent.push((WallDirection::Bottom, Cartesian2DCoordinate::new(x, y + 1)));
        }

        adjacent
    }

    pub fn neighbour_at_direction(
        &self,
        coord: Cartesian2DCoordinate,
        direction: WallDirection,
    ) -> Option<Cartesian2DCoordinate> {
        self.neighbours(coord)
            .iter()
            .find(|&&(dir, _)| dir == direction)
            .map(|&(_, neighbour_coord)| neighbour_coord)
    }

    /// Carve the shared wall between a cell and its neighbour in the given
    /// direction: the matching wall on this cell and the opposite wall on the
    /// neighbour are cleared together, so the two views never desynchronise.
    ///
    /// Panics if there is no neighbour in that direction - the boundary is
    /// never carved.
    pub fn carve_wall(&mut self, coord: Cartesian2DCoordinate, direction: WallDirection) {
        let neighbour_coord = self
            .neighbour_at_direction(coord, direction)
            .expect("carve target must be an in-bounds neighbour");

        let mut cell = self.get(coord);
        cell.walls.clear(direction);
        self.set(coord, cell);

        let mut neighbour = self.get(neighbour_coord);
        neighbour.walls.clear(direction.opposite());
        self.set(neighbour_coord, neighbour);
    }

    /// Is the wall between a cell and its neighbour in the given direction
    /// carved through? Boundary directions have no passage.
    pub fn passage_open(&self, coord: Cartesian2DCoordinate, direction: WallDirection) -> bool {
        self.neighbour_at_direction(coord, direction).is_some()
            && !self.get(coord).walls.is_standing(direction)
    }

    #[inline]
    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.get(coord).visited
    }

    pub fn mark_visited(&mut self, coord: Cartesian2DCoordinate) {
        let mut cell = self.get(coord);
        cell.visited = true;
        self.set(coord, cell);
    }

    /// The number of carved shared walls. A perfect maze over N cells has
    /// exactly N - 1.
    pub fn passages_count(&self) -> PassagesCount {
        // Each passage is shared by two cells, counting only the Right and
        // Bottom sides visits each one exactly once.
        let carved = self
            .iter()
            .map(|coord| {
                [WallDirection::Right, WallDirection::Bottom]
                    .iter()
                    .filter(|&&dir| self.passage_open(coord, dir))
                    .count()
            })
            .sum();
        PassagesCount(carved)
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_width: self.width.0,
            cells_count: self.size(),
        }
    }

    #[inline]
    fn cell_index(&self, coord: Cartesian2DCoordinate) -> usize {
        (coord.y as usize * self.width.0) + coord.x as usize
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_width: usize,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = index_to_grid_coordinate(self.row_width, self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

fn index_to_grid_coordinate(row_width: usize, one_dimensional_index: usize) -> Cartesian2DCoordinate {
    let y = one_dimensional_index / row_width;
    let x = one_dimensional_index - (y * row_width);
    Cartesian2DCoordinate::new(x as u32, y as u32)
}
