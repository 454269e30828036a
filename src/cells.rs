use std::convert::From;

/// The four wall segments around a rectangular cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallDirection {
    Top,
    Right,
    Bottom,
    Left,
}

pub const WALL_DIRECTIONS: [WallDirection; 4] = [
    WallDirection::Top,
    WallDirection::Right,
    WallDirection::Bottom,
    WallDirection::Left,
];

impl WallDirection {
    /// The direction of the same shared wall as seen from the neighbouring cell.
    /// A fixed involution: Top↔Bottom and Right↔Left.
    pub fn opposite(self) -> WallDirection {
        match self {
            WallDirection::Top => WallDirection::Bottom,
            WallDirection::Bottom => WallDirection::Top,
            WallDirection::Right => WallDirection::Left,
            WallDirection::Left => WallDirection::Right,
        }
    }

    /// Fixed bit assignment of the exported wall mask.
    pub fn bit(self) -> u8 {
        match self {
            WallDirection::Top => 1,
            WallDirection::Right => 2,
            WallDirection::Bottom => 4,
            WallDirection::Left => 8,
        }
    }
}

/// Which of a cell's four walls are still standing.
///
/// One named slot per direction rather than a packed bitflag integer - the
/// opposite direction pairing above carries the symmetry, not any numeric
/// shift property of the flag values.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallSet {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
}

impl WallSet {
    pub fn all_standing() -> WallSet {
        WallSet {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub fn all_carved() -> WallSet {
        WallSet {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    pub fn is_standing(&self, dir: WallDirection) -> bool {
        *self.slot(dir)
    }

    /// Carve the wall in the given direction.
    ///
    /// The wall must still be standing: each shared wall is only ever carved
    /// once during generation, so clearing a cleared wall is an internal
    /// invariant violation.
    pub fn clear(&mut self, dir: WallDirection) {
        let slot = self.slot_mut(dir);
        debug_assert!(*slot, "carving a wall that was already carved: {:?}", dir);
        *slot = false;
    }

    pub fn standing_count(&self) -> usize {
        WALL_DIRECTIONS
            .iter()
            .filter(|&&dir| self.is_standing(dir))
            .count()
    }

    /// The 4-bit wall mask handed to external consumers:
    /// bit0=Top, bit1=Right, bit2=Bottom, bit3=Left (1/2/4/8).
    pub fn as_mask(&self) -> u8 {
        WALL_DIRECTIONS
            .iter()
            .filter(|&&dir| self.is_standing(dir))
            .map(|dir| dir.bit())
            .sum()
    }

    fn slot(&self, dir: WallDirection) -> &bool {
        match dir {
            WallDirection::Top => &self.top,
            WallDirection::Right => &self.right,
            WallDirection::Bottom => &self.bottom,
            WallDirection::Left => &self.left,
        }
    }

    fn slot_mut(&mut self, dir: WallDirection) -> &mut bool {
        match dir {
            WallDirection::Top => &mut self.top,
            WallDirection::Right => &mut self.right,
            WallDirection::Bottom => &mut self.bottom,
            WallDirection::Left => &mut self.left,
        }
    }
}

/// Per-cell state during generation: the standing walls plus the traversal
/// visited marker. The marker never reaches the exported mask as the mask is
/// derived from the `WallSet` alone.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellState {
    pub walls: WallSet,
    pub visited: bool,
}

impl CellState {
    pub fn initial() -> CellState {
        CellState {
            walls: WallSet::all_standing(),
            visited: false,
        }
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for &dir in WALL_DIRECTIONS.iter() {
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(WallDirection::Top.opposite(), WallDirection::Bottom);
        assert_eq!(WallDirection::Bottom.opposite(), WallDirection::Top);
        assert_eq!(WallDirection::Right.opposite(), WallDirection::Left);
        assert_eq!(WallDirection::Left.opposite(), WallDirection::Right);
    }

    #[test]
    fn mask_bit_assignment() {
        assert_eq!(WallDirection::Top.bit(), 1);
        assert_eq!(WallDirection::Right.bit(), 2);
        assert_eq!(WallDirection::Bottom.bit(), 4);
        assert_eq!(WallDirection::Left.bit(), 8);
    }

    #[test]
    fn initial_walls_all_standing() {
        let walls = WallSet::all_standing();
        assert_eq!(walls.standing_count(), 4);
        assert_eq!(walls.as_mask(), 15);
        assert_eq!(WallSet::all_carved().as_mask(), 0);
    }

    #[test]
    fn clearing_walls_updates_the_mask() {
        let mut walls = WallSet::all_standing();

        walls.clear(WallDirection::Right);
        assert!(!walls.is_standing(WallDirection::Right));
        assert_eq!(walls.as_mask(), 1 + 4 + 8);
        assert_eq!(walls.standing_count(), 3);

        walls.clear(WallDirection::Top);
        assert_eq!(walls.as_mask(), 4 + 8);
        assert_eq!(walls.standing_count(), 2);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn clearing_a_carved_wall_panics() {
        let mut walls = WallSet::all_standing();
        walls.clear(WallDirection::Left);
        walls.clear(WallDirection::Left);
    }

    #[test]
    fn initial_cell_state_is_unvisited() {
        let state = CellState::initial();
        assert!(!state.visited);
        assert_eq!(state.walls, WallSet::all_standing());
    }
}
