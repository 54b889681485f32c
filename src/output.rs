//! Compact text export of a finished maze
//!
//! The export packs each cell's wall configuration into one uppercase hex
//! digit (`west<<3 | south<<2 | east<<1 | north`, wall present = 1), one row
//! of digits per maze row. A blank line separates the grid from the entry,
//! exit and solution path records.

use std::fs;

use anyhow::Context;
use itertools::Itertools;

use crate::config::Config;
use crate::maze::{Cell, Maze};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode a cell's four wall flags as one uppercase hex digit.
pub fn cell_to_hex(cell: &Cell) -> char {
    HEX_DIGITS[cell.wall_bits() as usize] as char
}

/// Build the full export text for a maze.
pub fn render_output(maze: &Maze, config: &Config) -> String {
    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            out.push(cell_to_hex(maze.cell((x, y))));
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("ENTRY={},{}\n", config.entry.0, config.entry.1));
    out.push_str(&format!("EXIT={},{}\n", config.exit.0, config.exit.1));
    let path = maze.path().iter().map(|(x, y)| format!("{x},{y}")).join(" ");
    out.push_str(&format!("PATH={path}\n"));
    out
}

/// Write the export to `config.output_file`.
pub fn write_output(maze: &Maze, config: &Config) -> anyhow::Result<()> {
    fs::write(&config.output_file, render_output(maze, config))
        .with_context(|| format!("ERROR while writing {}", config.output_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_2x2() -> Config {
        Config::new(2, 2, (0, 0), (1, 1), "maze.txt", true, None).unwrap()
    }

    #[test]
    fn hex_digit_per_wall_combination() {
        let mut cell = Cell::default();
        assert_eq!(cell_to_hex(&cell), 'F');
        cell.north = false;
        assert_eq!(cell_to_hex(&cell), 'E');
        cell.east = false;
        assert_eq!(cell_to_hex(&cell), 'C');
        cell.south = false;
        assert_eq!(cell_to_hex(&cell), '8');
        cell.west = false;
        assert_eq!(cell_to_hex(&cell), '0');
    }

    #[test]
    fn export_format() {
        let mut maze = Maze::new(2, 2);
        maze.open_wall((0, 0), (1, 0)).unwrap();
        maze.open_wall((1, 0), (1, 1)).unwrap();
        maze.set_path(vec![(0, 0), (1, 0), (1, 1)]);

        let out = render_output(&maze, &config_2x2());
        // (0,0): east open -> 0b1101; (1,0): west and south open -> 0b0011
        // (1,0) row 2: north open on (1,1) -> 0b1110
        assert_eq!(out, "D3\nFE\n\nENTRY=0,0\nEXIT=1,1\nPATH=0,0 1,0 1,1\n");
    }

    #[test]
    fn fully_walled_grid_is_all_f() {
        let maze = Maze::new(3, 2);
        let out = render_output(&maze, &config_2x2());
        assert!(out.starts_with("FFF\nFFF\n"));
    }
}
