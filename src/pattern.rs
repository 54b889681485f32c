//! The hidden "42" glyph embedded into large enough mazes
//!
//! The glyph is a fixed 7×5 bitmap of blocked cells. When the grid leaves at
//! least a one-cell margin around it, the glyph is pasted into the center of
//! the grid before carving. Blocked cells keep all four walls, are skipped by
//! the carver and the solver, and come out of generation untouched.

use tracing::debug;

use crate::maze::{CellKind, Coordinate, Maze};

/// Glyph width in cells.
pub const GLYPH_WIDTH: usize = 7;
/// Glyph height in cells.
pub const GLYPH_HEIGHT: usize = 5;

/// Blocked cells of the glyph, listed stroke by stroke: first the "4",
/// then the "2".
const GLYPH_BLOCKED: [Coordinate; 20] = [
    // 4
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
    (2, 3),
    (2, 4),
    // 2
    (4, 0),
    (5, 0),
    (6, 0),
    (6, 1),
    (6, 2),
    (5, 2),
    (4, 2),
    (4, 3),
    (4, 4),
    (5, 4),
    (6, 4),
];

/// Build the glyph as a mini maze of fully walled cells.
pub fn glyph() -> Maze {
    let mut maze = Maze::new(GLYPH_WIDTH, GLYPH_HEIGHT);
    for &coord in &GLYPH_BLOCKED {
        maze.cell_mut(coord).kind = CellKind::Blocked;
    }
    maze
}

/// Embed the "42" glyph in the center of the grid.
///
/// Returns the absolute coordinates of the blocked cells in row-major order;
/// the carver seeds its visited set with them. The embedding is skipped
/// entirely (empty result) when the grid cannot hold the glyph with a
/// one-cell margin, or when a blocked cell would land on entry or exit.
pub fn embed(maze: &mut Maze, entry: Coordinate, exit: Coordinate) -> Vec<Coordinate> {
    if maze.width() < GLYPH_WIDTH + 2 || maze.height() < GLYPH_HEIGHT + 2 {
        debug!(
            width = maze.width(),
            height = maze.height(),
            "maze too small for the '42' pattern, skipping"
        );
        return Vec::new();
    }
    let offset_x = (maze.width() - GLYPH_WIDTH) / 2;
    let offset_y = (maze.height() - GLYPH_HEIGHT) / 2;

    let glyph = glyph();
    let blocked: Vec<Coordinate> = glyph
        .blocked_cells()
        .into_iter()
        .map(|(x, y)| (offset_x + x, offset_y + y))
        .collect();
    if blocked.contains(&entry) || blocked.contains(&exit) {
        debug!(?entry, ?exit, "entry or exit inside the '42' pattern, skipping");
        return Vec::new();
    }

    maze.paste(&glyph, offset_x, offset_y);
    blocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_centers_glyph_in_10x10() {
        let mut maze = Maze::new(10, 10);
        let blocked = embed(&mut maze, (0, 0), (9, 9));
        // Offset is (1, 2); coordinates row-major
        assert_eq!(
            blocked,
            vec![
                (1, 2),
                (3, 2),
                (5, 2),
                (6, 2),
                (7, 2),
                (1, 3),
                (3, 3),
                (7, 3),
                (1, 4),
                (2, 4),
                (3, 4),
                (5, 4),
                (6, 4),
                (7, 4),
                (3, 5),
                (5, 5),
                (3, 6),
                (5, 6),
                (6, 6),
                (7, 6)
            ]
        );
        assert_eq!(maze.blocked_cells(), blocked);
        for &coord in &blocked {
            assert_eq!(maze.cell(coord).wall_bits(), 0xF);
        }
    }

    #[test]
    fn embed_skips_small_grids() {
        let mut maze = Maze::new(8, 8);
        assert!(embed(&mut maze, (0, 0), (7, 7)).is_empty());
        assert!(maze.blocked_cells().is_empty());

        let mut maze = Maze::new(20, 6);
        assert!(embed(&mut maze, (0, 0), (19, 5)).is_empty());
    }

    #[test]
    fn embed_skips_when_entry_or_exit_inside_glyph() {
        // (1, 2) is the glyph's top-left blocked cell in a 10x10 grid
        let mut maze = Maze::new(10, 10);
        assert!(embed(&mut maze, (1, 2), (9, 9)).is_empty());
        assert!(maze.blocked_cells().is_empty());

        let mut maze = Maze::new(10, 10);
        assert!(embed(&mut maze, (0, 0), (6, 6)).is_empty());
    }

    #[test]
    fn glyph_has_twenty_blocked_cells() {
        assert_eq!(glyph().blocked_cells().len(), 20);
    }
}
