//! Generate rectangular mazes and solve them
//!
//! A maze is described by a small configuration: dimensions, entry and exit
//! cells, a perfection flag and an optional random seed. Generation carves a
//! fully walled grid with a randomized depth-first search, embeds a hidden
//! "42" glyph when the grid is large enough, optionally removes extra walls
//! to introduce loops, and solves the result with a breadth-first search.
//! With a fixed seed, the maze and its solution are reproducible bit for bit.
//!
//! # Examples
//! ## Generate and solve a seeded maze
//! ```
//! use amazeing::{Config, MazeGenerator};
//!
//! let config = Config::parse(
//!     "WIDTH=12
//!      HEIGHT=12
//!      ENTRY=0,0
//!      EXIT=11,11
//!      OUTPUT_FILE=maze.txt
//!      PERFECT=True
//!      SEED=1",
//! )
//! .unwrap();
//!
//! let mut generator = MazeGenerator::new(config);
//! let maze = generator.generate().unwrap();
//! assert_eq!(maze.path().first(), Some(&(0, 0)));
//! assert_eq!(maze.path().last(), Some(&(11, 11)));
//! ```
//!
//! ## Render a maze as ASCII art
//! ```
//! use amazeing::{AsciiPrinter, Config, MazeGenerator};
//!
//! let config = Config::new(8, 6, (0, 0), (7, 5), "maze.txt", true, Some(42)).unwrap();
//! let maze = MazeGenerator::new(config).generate().unwrap();
//!
//! let mut printer = AsciiPrinter::new();
//! printer.toggle_path();
//! println!("{}", printer.render(&maze));
//! ```

pub mod ascii;
pub mod config;
pub mod errors;
pub mod maze;
pub mod maze_generator;
pub mod output;
pub mod pattern;

pub use ascii::AsciiPrinter;
pub use config::Config;
pub use errors::{ConfigError, MazeError};
pub use maze::{Cell, CellKind, Coordinate, Maze};
pub use maze_generator::MazeGenerator;
