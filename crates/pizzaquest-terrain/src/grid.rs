//! Grid: the level's terrain codes with classification queries.

use std::collections::BTreeSet;

use pizzaquest_core::constants::DEFAULT_BURNT_TERRAIN;
use pizzaquest_core::types::GridPos;

use crate::error::LevelError;

/// Integer identifying a cell's static terrain type.
pub type TerrainCode = u16;

/// Terrain lookup for one level.
///
/// Dimensions and classification sets are fixed at load. The only
/// runtime change is a flammable cell burning down to `burnt_code`.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Terrain codes, row-major.
    cells: Vec<TerrainCode>,
    unwalkable: BTreeSet<TerrainCode>,
    flammable: BTreeSet<TerrainCode>,
    burnt_code: TerrainCode,
}

impl Grid {
    /// Build a grid, checking the cell array matches the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        cells: Vec<TerrainCode>,
        unwalkable: impl IntoIterator<Item = TerrainCode>,
        flammable: impl IntoIterator<Item = TerrainCode>,
    ) -> Result<Self, LevelError> {
        if width == 0 || height == 0 {
            return Err(LevelError::EmptyGrid);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(LevelError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
            unwalkable: unwalkable.into_iter().collect(),
            flammable: flammable.into_iter().collect(),
            burnt_code: DEFAULT_BURNT_TERRAIN,
        })
    }

    /// Override the code flammable cells turn into when burnt.
    pub fn with_burnt_code(mut self, code: TerrainCode) -> Self {
        self.burnt_code = code;
        self
    }

    /// A grid of a single terrain code (handy for tests and demos).
    pub fn filled(width: u32, height: u32, code: TerrainCode) -> Result<Self, LevelError> {
        let cells = vec![code; width as usize * height as usize];
        Self::new(width, height, cells, [], [])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn burnt_code(&self) -> TerrainCode {
        self.burnt_code
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Row-major index of a position, `None` outside the grid.
    pub fn position_to_index(&self, pos: GridPos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.x as usize + pos.y as usize * self.width as usize)
    }

    /// Inverse of `position_to_index`.
    pub fn index_to_position(&self, index: usize) -> GridPos {
        let w = self.width as usize;
        GridPos::new((index % w) as i32, (index / w) as i32)
    }

    /// Terrain code at (x, y), `None` outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<TerrainCode> {
        self.tile_at(GridPos::new(x, y))
    }

    pub fn tile_at(&self, pos: GridPos) -> Option<TerrainCode> {
        self.position_to_index(pos).map(|i| self.cells[i])
    }

    pub fn is_unwalkable(&self, code: TerrainCode) -> bool {
        self.unwalkable.contains(&code)
    }

    pub fn is_flammable(&self, code: TerrainCode) -> bool {
        self.flammable.contains(&code)
    }

    /// True when the cell exists and its terrain blocks walking.
    pub fn blocks_walking(&self, pos: GridPos) -> bool {
        self.tile_at(pos).is_some_and(|c| self.is_unwalkable(c))
    }

    /// True when the cell exists and its terrain can burn.
    pub fn is_flammable_at(&self, pos: GridPos) -> bool {
        self.tile_at(pos).is_some_and(|c| self.is_flammable(c))
    }

    /// Burn a flammable cell down. Returns the new code, or `None` if
    /// the cell is outside the grid or not flammable.
    pub fn burn_cell(&mut self, pos: GridPos) -> Option<TerrainCode> {
        let index = self.position_to_index(pos)?;
        if !self.is_flammable(self.cells[index]) {
            return None;
        }
        self.cells[index] = self.burnt_code;
        Some(self.burnt_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRASS: TerrainCode = 0;
    const TREE: TerrainCode = 2;
    const ROCK: TerrainCode = 3;

    /// 4x3 grid with a tree and a rock.
    fn make_test_grid() -> Grid {
        #[rustfmt::skip]
        let cells = vec![
            GRASS, GRASS, GRASS, GRASS,
            GRASS, TREE,  GRASS, ROCK,
            GRASS, GRASS, GRASS, GRASS,
        ];
        Grid::new(4, 3, cells, [TREE, ROCK], [TREE]).unwrap()
    }

    #[test]
    fn test_tile_lookup_row_major() {
        let grid = make_test_grid();
        assert_eq!(grid.tile(1, 1), Some(TREE));
        assert_eq!(grid.tile(3, 1), Some(ROCK));
        assert_eq!(grid.tile(0, 0), Some(GRASS));
        assert_eq!(grid.tile(4, 0), None);
        assert_eq!(grid.tile(-1, 0), None);
        assert_eq!(grid.tile(0, 3), None);
    }

    #[test]
    fn test_index_position_inverse() {
        let grid = make_test_grid();
        for i in 0..12 {
            let pos = grid.index_to_position(i);
            assert_eq!(grid.position_to_index(pos), Some(i));
        }
        assert_eq!(grid.index_to_position(7), GridPos::new(3, 1));
    }

    #[test]
    fn test_classification() {
        let grid = make_test_grid();
        assert!(grid.is_unwalkable(TREE) && grid.is_flammable(TREE));
        assert!(grid.is_unwalkable(ROCK) && !grid.is_flammable(ROCK));
        assert!(!grid.is_unwalkable(GRASS));
        assert!(grid.blocks_walking(GridPos::new(3, 1)));
        assert!(!grid.blocks_walking(GridPos::new(9, 9)));
    }

    #[test]
    fn test_burn_cell_only_flammable() {
        let mut grid = make_test_grid();
        assert_eq!(grid.burn_cell(GridPos::new(3, 1)), None, "rock does not burn");
        assert_eq!(grid.burn_cell(GridPos::new(1, 1)), Some(GRASS));
        assert_eq!(grid.tile(1, 1), Some(GRASS));
        assert!(!grid.blocks_walking(GridPos::new(1, 1)));
        assert_eq!(grid.burn_cell(GridPos::new(1, 1)), None, "already burnt");
    }

    #[test]
    fn test_custom_burnt_code() {
        let mut grid = make_test_grid().with_burnt_code(9);
        assert_eq!(grid.burn_cell(GridPos::new(1, 1)), Some(9));
        assert_eq!(grid.tile(1, 1), Some(9));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = Grid::new(4, 3, vec![0; 11], [], []).unwrap_err();
        assert!(matches!(
            err,
            LevelError::DimensionMismatch {
                expected: 12,
                actual: 11
            }
        ));
        assert!(matches!(
            Grid::new(0, 3, vec![], [], []),
            Err(LevelError::EmptyGrid)
        ));
    }
}
