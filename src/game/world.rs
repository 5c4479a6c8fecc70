//! # World Representation
//!
//! The static tile grid with its circle-vs-tile collision test, and the
//! [`World`] container holding the grid together with every live entity.

use crate::game::{Enemy, Item, Player, Position, Projectile};
use crate::{SkirmishError, SkirmishResult};
use serde::{Deserialize, Serialize};

/// Kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Open,
    Wall,
}

impl TileType {
    /// Returns true if movers may occupy this cell.
    pub fn is_passable(self) -> bool {
        matches!(self, TileType::Open)
    }
}

/// Fixed-size grid of tiles. The border row and column are always walls and
/// the layout never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<TileType>,
}

impl Grid {
    /// Creates an open grid surrounded by a wall border.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish::{Grid, TileType};
    ///
    /// let grid = Grid::new(5, 4, 10.0).unwrap();
    /// assert_eq!(grid.tile(0, 0), Some(TileType::Wall));
    /// assert_eq!(grid.tile(2, 2), Some(TileType::Open));
    /// ```
    pub fn new(width: usize, height: usize, tile_size: f32) -> SkirmishResult<Self> {
        Self::with_walls(width, height, tile_size, std::iter::empty())
    }

    /// Creates a bordered grid with additional interior walls at `walls`
    /// (cell coordinates).
    pub fn with_walls(
        width: usize,
        height: usize,
        tile_size: f32,
        walls: impl IntoIterator<Item = (usize, usize)>,
    ) -> SkirmishResult<Self> {
        if width < 3 || height < 3 {
            return Err(SkirmishError::InvalidWorld(format!(
                "grid must be at least 3x3, got {}x{}",
                width, height
            )));
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(SkirmishError::InvalidWorld(format!(
                "tile size must be positive, got {}",
                tile_size
            )));
        }

        let mut tiles = vec![TileType::Open; width * height];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    tiles[y * width + x] = TileType::Wall;
                }
            }
        }
        for (x, y) in walls {
            if x >= width || y >= height {
                return Err(SkirmishError::InvalidWorld(format!(
                    "wall ({}, {}) lies outside the {}x{} grid",
                    x, y, width, height
                )));
            }
            tiles[y * width + x] = TileType::Wall;
        }

        Ok(Self {
            width,
            height,
            tile_size,
            tiles,
        })
    }

    /// Parses a grid from rows of `#` (wall) and `.` (open).
    ///
    /// Every row must have the same length and the border must be walls.
    pub fn from_ascii(rows: &[&str], tile_size: f32) -> SkirmishResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);

        let mut walls = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(SkirmishError::InvalidWorld(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                match ch {
                    '#' => walls.push((x, y)),
                    '.' if border => {
                        return Err(SkirmishError::InvalidWorld(format!(
                            "border cell ({}, {}) must be a wall",
                            x, y
                        )));
                    }
                    '.' => {}
                    other => {
                        return Err(SkirmishError::InvalidWorld(format!(
                            "unknown tile '{}' at ({}, {})",
                            other, x, y
                        )));
                    }
                }
            }
        }

        Self::with_walls(width, height, tile_size, walls)
    }

    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Edge length of a tile in world units.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World extent as (width, height) in world units.
    pub fn world_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    /// Tile at the given cell, or `None` outside the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<TileType> {
        if x < self.width && y < self.height {
            self.tiles.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Returns true if every border cell is a wall.
    pub fn has_closed_border(&self) -> bool {
        if self.width < 3 || self.height < 3 {
            return false;
        }
        (0..self.width).all(|x| {
            self.tile(x, 0) == Some(TileType::Wall)
                && self.tile(x, self.height - 1) == Some(TileType::Wall)
        }) && (0..self.height).all(|y| {
            self.tile(0, y) == Some(TileType::Wall)
                && self.tile(self.width - 1, y) == Some(TileType::Wall)
        })
    }

    /// Cell containing a world position, or `None` when outside the grid.
    pub fn cell_at(&self, position: Position) -> Option<(usize, usize)> {
        if !(position.x.is_finite() && position.y.is_finite()) {
            return None;
        }
        if position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let cx = (position.x / self.tile_size).floor() as usize;
        let cy = (position.y / self.tile_size).floor() as usize;
        if cx < self.width && cy < self.height {
            Some((cx, cy))
        } else {
            None
        }
    }

    /// Wall test on signed cell coordinates; anything off the grid is solid.
    fn is_solid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        match self.tile(x as usize, y as usize) {
            Some(tile) => !tile.is_passable(),
            None => true,
        }
    }

    /// Returns true if a circle of `radius` centred at `position` may not
    /// stand there.
    ///
    /// Out-of-grid and wall cells are blocked. Inside an open cell the circle
    /// is blocked when it reaches across an edge whose neighbour is a wall, or
    /// over a corner point whose diagonal neighbour is a wall.
    pub fn is_blocked(&self, position: Position, radius: f32) -> bool {
        let Some((cx, cy)) = self.cell_at(position) else {
            return true;
        };
        let (cx, cy) = (cx as i64, cy as i64);
        if self.is_solid(cx, cy) {
            return true;
        }

        let tile = self.tile_size;
        let local_x = position.x - cx as f32 * tile;
        let local_y = position.y - cy as f32 * tile;

        let (step_x, edge_dx) = if local_x < radius {
            (-1, local_x)
        } else if local_x > tile - radius {
            (1, tile - local_x)
        } else {
            (0, tile)
        };
        let (step_y, edge_dy) = if local_y < radius {
            (-1, local_y)
        } else if local_y > tile - radius {
            (1, tile - local_y)
        } else {
            (0, tile)
        };

        if step_x != 0 && self.is_solid(cx + step_x, cy) {
            return true;
        }
        if step_y != 0 && self.is_solid(cx, cy + step_y) {
            return true;
        }
        step_x != 0
            && step_y != 0
            && self.is_solid(cx + step_x, cy + step_y)
            && edge_dx.hypot(edge_dy) < radius
    }
}

/// The grid plus every live entity at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub grid: Grid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub projectiles: Vec<Projectile>,
}

impl World {
    /// Assembles a world with no projectiles in flight.
    pub fn new(grid: Grid, player: Player, enemies: Vec<Enemy>, items: Vec<Item>) -> Self {
        Self {
            grid,
            player,
            enemies,
            items,
            projectiles: Vec::new(),
        }
    }

    /// Returns true if `position` lies inside the world rectangle (edges
    /// included).
    pub fn contains(&self, position: Position) -> bool {
        let (width, height) = self.grid.world_size();
        position.x >= 0.0 && position.y >= 0.0 && position.x <= width && position.y <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> Grid {
        Grid::new(6, 6, 40.0).unwrap()
    }

    #[test]
    fn test_border_is_wall() {
        let grid = open_grid();
        assert!(grid.has_closed_border());
        assert_eq!(grid.tile(0, 3), Some(TileType::Wall));
        assert_eq!(grid.tile(5, 3), Some(TileType::Wall));
        assert_eq!(grid.tile(3, 3), Some(TileType::Open));
        assert_eq!(grid.tile(6, 3), None);
    }

    #[test]
    fn test_rejects_small_grid() {
        assert!(Grid::new(2, 5, 40.0).is_err());
        assert!(Grid::new(5, 5, 0.0).is_err());
    }

    #[test]
    fn test_rejects_wall_outside_grid() {
        assert!(Grid::with_walls(5, 5, 40.0, vec![(7, 1)]).is_err());
    }

    #[test]
    fn test_from_ascii() {
        let grid = Grid::from_ascii(&["#####", "#.#.#", "#...#", "#####"], 10.0).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.tile(2, 1), Some(TileType::Wall));
        assert_eq!(grid.tile(1, 1), Some(TileType::Open));
    }

    #[test]
    fn test_from_ascii_rejects_open_border() {
        let result = Grid::from_ascii(&["#####", "....#", "#####"], 10.0);
        assert!(matches!(result, Err(SkirmishError::InvalidWorld(_))));
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        assert!(Grid::from_ascii(&["####", "#..", "####"], 10.0).is_err());
        assert!(Grid::from_ascii(&["###", "#x#", "###"], 10.0).is_err());
    }

    #[test]
    fn test_cell_at() {
        let grid = open_grid();
        assert_eq!(grid.cell_at(Position::new(45.0, 85.0)), Some((1, 2)));
        assert_eq!(grid.cell_at(Position::new(-0.5, 85.0)), None);
        assert_eq!(grid.cell_at(Position::new(240.0, 10.0)), None);
        assert_eq!(grid.cell_at(Position::new(f32::NAN, 10.0)), None);
    }

    #[test]
    fn test_out_of_grid_is_blocked() {
        let grid = open_grid();
        assert!(grid.is_blocked(Position::new(-10.0, 100.0), 1.0));
        assert!(grid.is_blocked(Position::new(100.0, 1000.0), 1.0));
    }

    #[test]
    fn test_wall_cell_is_blocked() {
        let grid = open_grid();
        assert!(grid.is_blocked(Position::new(20.0, 100.0), 1.0));
    }

    #[test]
    fn test_cell_centre_is_free() {
        let grid = open_grid();
        assert!(!grid.is_blocked(Position::new(100.0, 100.0), 18.0));
    }

    #[test]
    fn test_edge_against_wall_is_blocked() {
        let grid = open_grid();
        // Cell (1, 2) touches the left border wall.
        assert!(grid.is_blocked(Position::new(50.0, 100.0), 18.0));
        assert!(!grid.is_blocked(Position::new(58.0, 100.0), 18.0));
    }

    #[test]
    fn test_edge_against_open_cell_is_free() {
        let grid = open_grid();
        // Cell (2, 2) boundary with open cell (1, 2).
        assert!(!grid.is_blocked(Position::new(82.0, 100.0), 18.0));
    }

    #[test]
    fn test_corner_clipping() {
        let grid = Grid::with_walls(6, 6, 40.0, vec![(3, 3)]).unwrap();
        // Inside cell (2, 2), near the corner shared with wall (3, 3).
        assert!(grid.is_blocked(Position::new(115.0, 115.0), 18.0));
        // Near both edges, but the corner point is farther than the radius.
        assert!(!grid.is_blocked(Position::new(106.0, 106.0), 18.0));
    }

    #[test]
    fn test_world_contains() {
        let world = World::new(
            open_grid(),
            Player::new(Position::new(100.0, 100.0)),
            Vec::new(),
            Vec::new(),
        );
        assert!(world.contains(Position::new(0.0, 0.0)));
        assert!(world.contains(Position::new(240.0, 240.0)));
        assert!(!world.contains(Position::new(240.1, 10.0)));
        assert!(!world.contains(Position::new(10.0, -0.1)));
    }
}
