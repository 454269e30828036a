use crate::cells::WallDirection;
use crate::grid::CellGrid;

/// The read-only export artifact of a generation run: one 4-bit wall mask per
/// cell (bit0=Top, bit1=Right, bit2=Bottom, bit3=Left), row-major.
///
/// The traversal visited marker never appears here - masks are derived from
/// the wall sets alone, so every value is at most 15.
#[derive(Debug)]
pub struct WallMaskGrid {
    masks: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl WallMaskGrid {
    /// Flatten a finished cell grid into the plain numeric handoff grid.
    pub fn from_grid(grid: &CellGrid) -> WallMaskGrid {
        let masks = grid
            .iter()
            .map(|coord| grid.get(coord).walls.as_mask())
            .collect();

        WallMaskGrid {
            masks,
            width: grid.width().0 as u32,
            height: grid.height().0 as u32,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.masks.len()
    }

    /// The wall mask of one cell. Panics if the coordinate is outside the grid.
    #[inline]
    pub fn mask_at(&self, x: u32, y: u32) -> u8 {
        self.masks[(y * self.width + x) as usize]
    }

    /// Is the given wall of a cell still standing?
    ///
    /// Coordinates outside the grid's 2d space report the wall as present, so
    /// passage walks never escape the grid.
    pub fn wall_present(&self, x: u32, y: u32, dir: WallDirection) -> bool {
        if x < self.width && y < self.height {
            self.mask_at(x, y) & dir.bit() != 0
        } else {
            true
        }
    }

    /// All masks in row-major order.
    #[inline]
    pub fn masks(&self) -> &[u8] {
        &self.masks
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cartesian2DCoordinate;
    use crate::units::{Height, Width};

    fn grid(w: usize, h: usize) -> CellGrid {
        CellGrid::new(Width(w), Height(h)).expect("valid dimensions")
    }

    #[test]
    fn untouched_grid_exports_all_walls() {
        let masks = WallMaskGrid::from_grid(&grid(2, 3));
        assert_eq!(masks.size(), 6);
        assert_eq!(masks.width, 2);
        assert_eq!(masks.height, 3);
        assert!(masks.masks().iter().all(|&m| m == 15));
    }

    #[test]
    fn export_is_row_major_and_mirrors_carves() {
        let mut g = grid(2, 2);
        g.carve_wall(Cartesian2DCoordinate::new(0, 0), WallDirection::Right);

        let masks = WallMaskGrid::from_grid(&g);
        assert_eq!(masks.mask_at(0, 0), 15 - 2); // right wall carved
        assert_eq!(masks.mask_at(1, 0), 15 - 8); // left wall carved
        assert_eq!(masks.mask_at(0, 1), 15);
        assert_eq!(masks.mask_at(1, 1), 15);
        assert_eq!(masks.masks(), &[13, 7, 15, 15]);
    }

    #[test]
    fn visited_marker_is_not_exported() {
        let mut g = grid(2, 1);
        g.mark_visited(Cartesian2DCoordinate::new(0, 0));
        g.mark_visited(Cartesian2DCoordinate::new(1, 0));

        let masks = WallMaskGrid::from_grid(&g);
        assert!(masks.masks().iter().all(|&m| m <= 15));
        assert_eq!(masks.mask_at(0, 0), 15);
    }

    #[test]
    fn out_of_bounds_queries_report_standing_walls() {
        let masks = WallMaskGrid::from_grid(&grid(2, 2));
        assert!(masks.wall_present(2, 0, WallDirection::Left));
        assert!(masks.wall_present(0, 2, WallDirection::Top));
        assert!(masks.wall_present(99, 99, WallDirection::Bottom));
    }
}
