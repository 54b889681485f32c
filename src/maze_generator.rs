//! Maze generation: DFS carving, loop carving and BFS solving
//!
//! [`MazeGenerator`] drives the whole pipeline for one configuration: build a
//! fully walled grid, embed the "42" pattern when it fits, carve passages
//! with a randomized depth-first search, optionally knock out extra walls to
//! introduce loops, and finally solve the maze with a breadth-first search.
//! All randomness comes from one seedable generator, so a fixed seed
//! reproduces the maze and its solution bit for bit.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::MazeError;
use crate::maze::{CellKind, Coordinate, Maze};
use crate::pattern;

/// Chance of removing any given candidate wall in the imperfection pass.
const LOOP_PROBABILITY: f64 = 0.1;

/// Generate mazes from a validated [`Config`].
pub struct MazeGenerator {
    config: Config,
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a generator; the RNG is seeded from `config.seed`, or from
    /// entropy when no seed is given.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MazeGenerator { config, rng }
    }

    /// Generate a complete, solved maze.
    ///
    /// Runs grid construction, pattern embedding, carving, the optional
    /// imperfection pass and the solver in order. Any sub-step failure
    /// propagates unchanged; nothing is retried, since with a fixed seed a
    /// retry would reproduce the same failure.
    pub fn generate(&mut self) -> Result<Maze, MazeError> {
        info!(
            width = self.config.width,
            height = self.config.height,
            perfect = self.config.perfect,
            seed = ?self.config.seed,
            "generating maze"
        );
        let mut maze = Maze::new(self.config.width, self.config.height);
        let blocked = pattern::embed(&mut maze, self.config.entry, self.config.exit);
        self.carve(&mut maze, &blocked)?;
        if !self.config.perfect {
            let removed = self.make_imperfect(&mut maze)?;
            debug!(removed, "imperfection pass removed walls");
        }
        self.solve(&mut maze)?;
        debug!(path_len = maze.path().len(), "maze solved");
        Ok(maze)
    }

    /// Carve passages with an iterative randomized depth-first search.
    ///
    /// Pattern cells are seeded into the visited set, so the walk never
    /// enters them. Every other cell is visited exactly once and the opened
    /// walls form a spanning tree over the non-blocked cells.
    fn carve(&mut self, maze: &mut Maze, blocked: &[Coordinate]) -> Result<(), MazeError> {
        let mut visited: HashSet<Coordinate> = blocked.iter().copied().collect();
        visited.insert(self.config.entry);
        let mut stack = vec![self.config.entry];

        while let Some(&current) = stack.last() {
            let unvisited: Vec<Coordinate> = maze
                .neighbors(current)
                .into_iter()
                .filter(|c| !visited.contains(c))
                .collect();
            match unvisited.as_slice() {
                [] => {
                    stack.pop();
                }
                candidates => {
                    let next = candidates[self.rng.gen_range(0..candidates.len())];
                    maze.open_wall(current, next)?;
                    visited.insert(next);
                    stack.push(next);
                }
            }
        }
        Ok(())
    }

    /// Remove extra walls so the maze gains loops and alternate routes.
    ///
    /// Every still-closed wall towards a south or east neighbor is a
    /// candidate; each is removed with probability [`LOOP_PROBABILITY`],
    /// unless removal would leave a fully open 3×3 region. Walls touching
    /// pattern cells are never candidates. Returns the number of walls
    /// removed.
    fn make_imperfect(&mut self, maze: &mut Maze) -> Result<usize, MazeError> {
        let mut removed = 0;
        let coords: Vec<Coordinate> = maze.coordinates().collect();
        for (x, y) in coords {
            if maze.cell((x, y)).is_blocked() {
                continue;
            }
            for next in [(x, y + 1), (x + 1, y)] {
                if !maze.in_bounds(next) || maze.cell(next).is_blocked() {
                    continue;
                }
                if maze.is_open((x, y), next)? {
                    continue;
                }
                if self.rng.gen_bool(LOOP_PROBABILITY)
                    && remove_wall_if_valid(maze, (x, y), next)?
                {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    /// Find the shortest entry-to-exit path with a breadth-first search.
    ///
    /// Neighbors are expanded in the fixed grid order, so the chosen path is
    /// deterministic even when loops give several shortest paths. Path cells
    /// are marked on the maze and the ordered path is stored on it.
    fn solve(&self, maze: &mut Maze) -> Result<(), MazeError> {
        let entry = self.config.entry;
        let exit = self.config.exit;

        let mut predecessors: HashMap<Coordinate, Coordinate> = HashMap::new();
        let mut visited: HashSet<Coordinate> = HashSet::from([entry]);
        let mut queue = VecDeque::from([entry]);

        while let Some(current) = queue.pop_front() {
            if current == exit {
                break;
            }
            for next in maze.neighbors(current) {
                if visited.contains(&next) || maze.cell(next).is_blocked() {
                    continue;
                }
                if !maze.is_open(current, next)? {
                    continue;
                }
                visited.insert(next);
                predecessors.insert(next, current);
                queue.push_back(next);
            }
        }

        if !visited.contains(&exit) {
            return Err(MazeError::Unreachable { entry, exit });
        }

        let mut path = vec![exit];
        let mut current = exit;
        while let Some(&previous) = predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        for &coord in &path {
            maze.cell_mut(coord).kind = CellKind::Path;
        }
        maze.cell_mut(entry).kind = CellKind::Entry;
        maze.cell_mut(exit).kind = CellKind::Exit;
        maze.set_path(path);
        Ok(())
    }
}

/// Open the wall between two adjacent cells unless that leaves a fully open
/// 3×3 region; in that case the wall is put back. Returns whether the wall
/// stayed open.
fn remove_wall_if_valid(
    maze: &mut Maze,
    from: Coordinate,
    to: Coordinate,
) -> Result<bool, MazeError> {
    maze.open_wall(from, to)?;
    for corner in squares_containing(maze, from, to) {
        if region_fully_open(maze, corner)? {
            maze.close_wall(from, to)?;
            return Ok(false);
        }
    }
    Ok(true)
}

/// Top-left corners of every in-bounds 3×3 region containing both cells.
fn squares_containing(maze: &Maze, a: Coordinate, b: Coordinate) -> Vec<Coordinate> {
    if maze.width() < 3 || maze.height() < 3 {
        return Vec::new();
    }
    let min_x = a.0.min(b.0);
    let max_x = a.0.max(b.0);
    let min_y = a.1.min(b.1);
    let max_y = a.1.max(b.1);

    let x_range = max_x.saturating_sub(2)..=min_x.min(maze.width() - 3);
    let y_range = max_y.saturating_sub(2)..=min_y.min(maze.height() - 3);

    let mut corners = Vec::new();
    for y in y_range {
        for x in x_range.clone() {
            corners.push((x, y));
        }
    }
    corners
}

/// Whether the 3×3 region with the given top-left corner has no interior
/// wall at all.
fn region_fully_open(maze: &Maze, corner: Coordinate) -> Result<bool, MazeError> {
    let (cx, cy) = corner;
    for x in cx..cx + 3 {
        for y in cy..cy + 2 {
            if !maze.is_open((x, y), (x, y + 1))? {
                return Ok(false);
            }
        }
    }
    for x in cx..cx + 2 {
        for y in cy..cy + 3 {
            if !maze.is_open((x, y), (x + 1, y))? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
