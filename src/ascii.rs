//! ASCII rendering of a maze with box-drawing characters
//!
//! Each cell is drawn three characters wide. Every maze row becomes two text
//! rows (north walls, then west walls plus the cell interior) and a closing
//! border line is added after the last row. Cell interiors are colour-coded:
//! the "42" glyph, the solution path (when toggled on) and the entry and
//! exit cells each get their own background colour.

use crate::maze::{CellKind, Maze};

const HOR: char = '━';
const VER: char = '┃';
const CELL_WIDTH: usize = 3;
const RESET: &str = "\x1b[0m";

/// Renders mazes as coloured ASCII art.
pub struct AsciiPrinter {
    /// Wall colours; the first entry is the active one.
    foreground: Vec<&'static str>,
    /// Background colours: path, "42" glyph, entry, exit.
    background: Vec<&'static str>,
    include_path: bool,
}

impl Default for AsciiPrinter {
    fn default() -> Self {
        AsciiPrinter {
            foreground: vec![
                "\x1b[37m", // white
                "\x1b[33m", // yellow
                "\x1b[36m", // cyan
            ],
            background: vec![
                "\x1b[44m", // blue
                "\x1b[45m", // magenta
                "\x1b[42m", // green
                "\x1b[41m", // red
            ],
            include_path: false,
        }
    }
}

impl AsciiPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle rendering of the solution path.
    pub fn toggle_path(&mut self) {
        self.include_path = !self.include_path;
    }

    /// Rotate both colour lists one step to the left.
    pub fn rotate_colours(&mut self) {
        self.foreground.rotate_left(1);
        self.background.rotate_left(1);
    }

    fn wall(&self, s: &str) -> String {
        format!("{}{}{}", self.foreground[0], s, RESET)
    }

    fn interior(&self, kind: CellKind) -> String {
        let space = " ".repeat(CELL_WIDTH);
        let background = match kind {
            CellKind::Blocked => Some(self.background[1]),
            CellKind::Path if self.include_path => Some(self.background[0]),
            CellKind::Entry => Some(self.background[2]),
            CellKind::Exit => Some(self.background[3]),
            _ => None,
        };
        match background {
            Some(colour) => format!("{colour}{space}{RESET}"),
            None => space,
        }
    }

    /// Render the maze to a string, one text line per `\n`.
    pub fn render(&self, maze: &Maze) -> String {
        let hor_wall: String = HOR.to_string().repeat(CELL_WIDTH);
        let hor_open = " ".repeat(CELL_WIDTH);
        let mut out = String::new();

        for y in 0..maze.height() {
            // North walls
            for x in 0..maze.width() {
                out.push_str(&self.wall(&VER.to_string()));
                if maze.cell((x, y)).north {
                    out.push_str(&self.wall(&hor_wall));
                } else {
                    out.push_str(&hor_open);
                }
            }
            out.push_str(&self.wall(&VER.to_string()));
            out.push('\n');

            // West walls and cell interiors
            for x in 0..maze.width() {
                if maze.cell((x, y)).west {
                    out.push_str(&self.wall(&VER.to_string()));
                } else {
                    out.push(' ');
                }
                out.push_str(&self.interior(maze.cell((x, y)).kind));
            }
            // The east boundary is always walled
            out.push_str(&self.wall(&VER.to_string()));
            out.push('\n');
        }

        // Bottom border
        for _ in 0..maze.width() {
            out.push_str(&self.wall(&VER.to_string()));
            out.push_str(&self.wall(&hor_wall));
        }
        out.push_str(&self.wall(&VER.to_string()));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for d in chars.by_ref() {
                    if d == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn render_shape() {
        let maze = Maze::new(4, 3);
        let rendered = strip_ansi(&AsciiPrinter::new().render(&maze));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3 * 2 + 1);
        for line in &lines {
            assert_eq!(line.chars().count(), 4 * (CELL_WIDTH + 1) + 1);
        }
    }

    #[test]
    fn open_walls_render_as_gaps() {
        let mut maze = Maze::new(2, 2);
        maze.open_wall((0, 0), (1, 0)).unwrap();
        maze.open_wall((0, 0), (0, 1)).unwrap();
        let rendered = strip_ansi(&AsciiPrinter::new().render(&maze));
        let lines: Vec<&str> = rendered.lines().collect();
        // West wall of (1, 0) is gone
        assert_eq!(lines[1], "┃       ┃");
        // North wall of (0, 1) is gone
        assert_eq!(lines[2], "┃   ┃━━━┃");
    }

    #[test]
    fn path_rendering_is_toggled() {
        let mut maze = Maze::new(3, 2);
        maze.cell_mut((1, 0)).kind = CellKind::Path;

        let mut printer = AsciiPrinter::new();
        let plain = printer.render(&maze);
        assert!(!plain.contains("\x1b[44m"));

        printer.toggle_path();
        let with_path = printer.render(&maze);
        assert!(with_path.contains("\x1b[44m"));
    }

    #[test]
    fn entry_exit_and_pattern_always_coloured() {
        let mut maze = Maze::new(3, 2);
        maze.cell_mut((0, 0)).kind = CellKind::Entry;
        maze.cell_mut((2, 1)).kind = CellKind::Exit;
        maze.cell_mut((1, 0)).kind = CellKind::Blocked;
        let rendered = AsciiPrinter::new().render(&maze);
        assert!(rendered.contains("\x1b[42m"));
        assert!(rendered.contains("\x1b[41m"));
        assert!(rendered.contains("\x1b[45m"));
    }

    #[test]
    fn rotate_colours_changes_wall_colour() {
        let mut printer = AsciiPrinter::new();
        let maze = Maze::new(2, 2);
        let before = printer.render(&maze);
        printer.rotate_colours();
        let after = printer.render(&maze);
        assert!(before.contains("\x1b[37m"));
        assert!(after.contains("\x1b[33m"));
        assert_ne!(before, after);
    }
}
