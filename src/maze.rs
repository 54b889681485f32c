//! Grid model: cells, walls and the maze under construction

use crate::errors::MazeError;

/// Location in the maze, `(x, y)` with `x` growing east and `y` growing south.
pub type Coordinate = (usize, usize);

/// Role of a cell in the finished maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// A regular walkable cell.
    #[default]
    Open,
    /// A cell reserved by the "42" pattern; never carved, never traversed.
    Blocked,
    /// A cell on the solved entry-to-exit path.
    Path,
    /// The maze entry.
    Entry,
    /// The maze exit.
    Exit,
}

/// A single maze cell: four wall flags plus the cell role.
///
/// A wall flag is `true` when the wall is present. New cells start fully
/// walled. The wall between two adjacent cells is stored on both sides and
/// kept consistent by [`Maze::set_wall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub kind: CellKind,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
            kind: CellKind::Open,
        }
    }
}

impl Cell {
    /// Pack the four wall flags into a 4-bit value:
    /// `west<<3 | south<<2 | east<<1 | north`, wall present = 1.
    pub fn wall_bits(&self) -> u8 {
        (u8::from(self.west) << 3)
            | (u8::from(self.south) << 2)
            | (u8::from(self.east) << 1)
            | u8::from(self.north)
    }

    /// Whether the cell belongs to the embedded "42" pattern.
    pub fn is_blocked(&self) -> bool {
        self.kind == CellKind::Blocked
    }
}

/// Rectangular maze grid.
///
/// Cells are stored in a flat vector indexed `y * width + x`. The maze is
/// owned exclusively by one generation run; the generator phases mutate it
/// in sequence and the finished maze is immutable from the caller's side.
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    path: Vec<Coordinate>,
}

impl Maze {
    /// Create a grid of `width` × `height` cells with every wall closed.
    pub fn new(width: usize, height: usize) -> Self {
        Maze {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            path: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn index(&self, coord: Coordinate) -> usize {
        debug_assert!(self.in_bounds(coord));
        coord.1 * self.width + coord.0
    }

    /// Cell at `(x, y)`. Panics when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> &Cell {
        &self.cells[self.index(coord)]
    }

    /// Mutable cell at `(x, y)`. Panics when out of bounds.
    pub fn cell_mut(&mut self, coord: Coordinate) -> &mut Cell {
        let idx = self.index(coord);
        &mut self.cells[idx]
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    /// Coordinates of all pattern-blocked cells, row-major.
    pub fn blocked_cells(&self) -> Vec<Coordinate> {
        self.coordinates()
            .filter(|&c| self.cell(c).is_blocked())
            .collect()
    }

    /// In-bounds orthogonal neighbors of `coord`.
    ///
    /// The order is fixed (north, west, south, east) so that callers that do
    /// not shuffle, such as the BFS solver, stay deterministic.
    pub fn neighbors(&self, coord: Coordinate) -> Vec<Coordinate> {
        let (x, y) = coord;
        let mut result = Vec::with_capacity(4);
        if y > 0 {
            result.push((x, y - 1));
        }
        if x > 0 {
            result.push((x - 1, y));
        }
        if y + 1 < self.height {
            result.push((x, y + 1));
        }
        if x + 1 < self.width {
            result.push((x + 1, y));
        }
        result
    }

    fn check_adjacent(&self, from: Coordinate, to: Coordinate) -> Result<(), MazeError> {
        let adjacent = self.in_bounds(from)
            && self.in_bounds(to)
            && from.0.abs_diff(to.0) + from.1.abs_diff(to.1) == 1;
        if adjacent {
            Ok(())
        } else {
            Err(MazeError::InvalidAdjacency { from, to })
        }
    }

    /// Add or remove the wall between two adjacent cells.
    ///
    /// Both sides of the shared wall are updated together, so the two-sided
    /// representation can never go out of sync.
    pub fn set_wall(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        present: bool,
    ) -> Result<(), MazeError> {
        self.check_adjacent(from, to)?;
        if to.1 < from.1 {
            self.cell_mut(to).south = present;
            self.cell_mut(from).north = present;
        } else if to.1 > from.1 {
            self.cell_mut(to).north = present;
            self.cell_mut(from).south = present;
        } else if to.0 > from.0 {
            self.cell_mut(to).west = present;
            self.cell_mut(from).east = present;
        } else {
            self.cell_mut(to).east = present;
            self.cell_mut(from).west = present;
        }
        Ok(())
    }

    /// Carve the wall between two adjacent cells open.
    pub fn open_wall(&mut self, from: Coordinate, to: Coordinate) -> Result<(), MazeError> {
        self.set_wall(from, to, false)
    }

    /// Restore the wall between two adjacent cells.
    pub fn close_wall(&mut self, from: Coordinate, to: Coordinate) -> Result<(), MazeError> {
        self.set_wall(from, to, true)
    }

    /// Whether the wall between two adjacent cells is open.
    pub fn is_open(&self, from: Coordinate, to: Coordinate) -> Result<bool, MazeError> {
        self.check_adjacent(from, to)?;
        let wall = if to.1 < from.1 {
            self.cell(from).north
        } else if to.1 > from.1 {
            self.cell(from).south
        } else if to.0 > from.0 {
            self.cell(from).east
        } else {
            self.cell(from).west
        };
        Ok(!wall)
    }

    /// Number of open walls, counting each shared wall once.
    pub fn open_wall_count(&self) -> usize {
        self.coordinates()
            .map(|(x, y)| {
                let cell = self.cell((x, y));
                // East and south edges cover every interior wall exactly once
                usize::from(x + 1 < self.width && !cell.east)
                    + usize::from(y + 1 < self.height && !cell.south)
            })
            .sum()
    }

    /// Copy every cell of `source` into this maze at the given offset.
    ///
    /// The source must fit inside the grid at that offset.
    pub fn paste(&mut self, source: &Maze, offset_x: usize, offset_y: usize) {
        for (x, y) in source.coordinates() {
            *self.cell_mut((offset_x + x, offset_y + y)) = *source.cell((x, y));
        }
    }

    /// Store the solved entry-to-exit path.
    pub fn set_path(&mut self, path: Vec<Coordinate>) {
        self.path = path;
    }

    /// The solved path, ordered from entry to exit.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maze_is_fully_walled() {
        let maze = Maze::new(4, 3);
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        for coord in maze.coordinates() {
            assert_eq!(maze.cell(coord).wall_bits(), 0xF);
            assert_eq!(maze.cell(coord).kind, CellKind::Open);
        }
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn open_wall_updates_both_sides() {
        let mut maze = Maze::new(3, 3);
        maze.open_wall((1, 1), (2, 1)).unwrap();
        assert!(!maze.cell((1, 1)).east);
        assert!(!maze.cell((2, 1)).west);
        assert!(maze.is_open((1, 1), (2, 1)).unwrap());
        assert!(maze.is_open((2, 1), (1, 1)).unwrap());

        maze.open_wall((1, 1), (1, 0)).unwrap();
        assert!(!maze.cell((1, 1)).north);
        assert!(!maze.cell((1, 0)).south);
        assert_eq!(maze.open_wall_count(), 2);
    }

    #[test]
    fn close_wall_restores_both_sides() {
        let mut maze = Maze::new(3, 3);
        maze.open_wall((0, 0), (0, 1)).unwrap();
        maze.close_wall((0, 1), (0, 0)).unwrap();
        assert!(maze.cell((0, 0)).south);
        assert!(maze.cell((0, 1)).north);
        assert!(!maze.is_open((0, 0), (0, 1)).unwrap());
    }

    #[test]
    fn non_adjacent_wall_operations_fail() {
        let mut maze = Maze::new(3, 3);
        assert_eq!(
            maze.open_wall((0, 0), (2, 0)),
            Err(MazeError::InvalidAdjacency {
                from: (0, 0),
                to: (2, 0)
            })
        );
        assert_eq!(
            maze.open_wall((0, 0), (1, 1)),
            Err(MazeError::InvalidAdjacency {
                from: (0, 0),
                to: (1, 1)
            })
        );
        // Out of bounds counts as invalid adjacency as well
        assert!(maze.is_open((2, 2), (3, 2)).is_err());
        // Identical coordinates are not adjacent
        assert!(maze.open_wall((1, 1), (1, 1)).is_err());
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let maze = Maze::new(3, 3);
        assert_eq!(maze.neighbors((1, 1)), vec![(1, 0), (0, 1), (1, 2), (2, 1)]);
        assert_eq!(maze.neighbors((0, 0)), vec![(0, 1), (1, 0)]);
        assert_eq!(maze.neighbors((2, 2)), vec![(2, 1), (1, 2)]);
    }

    #[test]
    fn paste_copies_cells() {
        let mut small = Maze::new(2, 2);
        small.cell_mut((0, 0)).kind = CellKind::Blocked;
        small.open_wall((0, 1), (1, 1)).unwrap();

        let mut maze = Maze::new(5, 5);
        maze.paste(&small, 2, 1);
        assert!(maze.cell((2, 1)).is_blocked());
        assert!(maze.is_open((2, 2), (3, 2)).unwrap());
        assert_eq!(maze.blocked_cells(), vec![(2, 1)]);
    }

    #[test]
    fn wall_bits_encoding() {
        let mut cell = Cell::default();
        assert_eq!(cell.wall_bits(), 0xF);
        cell.north = false;
        assert_eq!(cell.wall_bits(), 0xE);
        cell.west = false;
        assert_eq!(cell.wall_bits(), 0x6);
        cell.south = false;
        cell.east = false;
        assert_eq!(cell.wall_bits(), 0x0);
    }
}
