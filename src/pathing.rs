use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, WallDirection, WALL_DIRECTIONS};
use crate::masks::WallMaskGrid;
use crate::utils;
use crate::utils::FnvHashMap;

/// Flood-fill distances from a start cell to every cell reachable through
/// carved passages of an exported maze.
///
/// Every step costs one, so a breadth-first frontier sweep sets each cell's
/// distance the first time it is reached and never needs to revisit it. The
/// distances map doubles as the visited set.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Cartesian2DCoordinate,
    distances: FnvHashMap<Cartesian2DCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Returns None if the start coordinate is outside the mask grid.
    pub fn new(masks: &WallMaskGrid, start_coordinate: Cartesian2DCoordinate) -> Option<Distances> {
        if start_coordinate.x >= masks.width || start_coordinate.y >= masks.height {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(masks.size());
        distances.insert(start_coordinate, 0);

        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {
            let mut new_frontier = vec![];

            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for linked_coord in passage_neighbours(masks, *cell_coord) {
                    if !distances.contains_key(&linked_coord) {
                        distances.insert(linked_coord, distance_to_cell + 1);
                        new_frontier.push(linked_coord);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Cartesian2DCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// How many cells, start included, are reachable from the start through
    /// carved passages. Equals the maze size for any perfect maze.
    #[inline]
    pub fn reachable_cells_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points_on_grid(&self) -> SmallVec<[Cartesian2DCoordinate; 8]> {
        let mut furthest = SmallVec::<[Cartesian2DCoordinate; 8]>::new();
        let furthest_distance = self.max();

        for (coord, distance) in self.distances.iter() {
            if *distance == furthest_distance {
                furthest.push(*coord);
            }
        }
        furthest
    }
}

/// Cells connected to a cell by a carved passage.
fn passage_neighbours(
    masks: &WallMaskGrid,
    coord: Cartesian2DCoordinate,
) -> SmallVec<[Cartesian2DCoordinate; 4]> {
    let mut linked = SmallVec::new();
    for &dir in WALL_DIRECTIONS.iter() {
        if !masks.wall_present(coord.x, coord.y, dir) {
            if let Some(neighbour) = step(masks, coord, dir) {
                linked.push(neighbour);
            }
        }
    }
    linked
}

fn step(
    masks: &WallMaskGrid,
    coord: Cartesian2DCoordinate,
    dir: WallDirection,
) -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        WallDirection::Top => {
            if y > 0 {
                Some(Cartesian2DCoordinate::new(x, y - 1))
            } else {
                None
            }
        }
        WallDirection::Bottom => {
            if y + 1 < masks.height {
                Some(Cartesian2DCoordinate::new(x, y + 1))
            } else {
                None
            }
        }
        WallDirection::Right => {
            if x + 1 < masks.width {
                Some(Cartesian2DCoordinate::new(x + 1, y))
            } else {
                None
            }
        }
        WallDirection::Left => {
            if x > 0 {
                Some(Cartesian2DCoordinate::new(x - 1, y))
            } else {
                None
            }
        }
    }
}
