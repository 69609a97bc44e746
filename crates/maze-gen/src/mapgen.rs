//! Random maze generation on a wall lattice.
//!
//! Even rows and columns form the wall lattice; cells at odd/odd
//! positions are passages. Every interior wall segment between two
//! passages is knocked out with a fixed probability, so the result is a
//! loose, loopy maze that is *not* guaranteed to connect start and goal.

use maze_core::{Coord, Grid, GridError, symbol};
use maze_paths::bfs_distance;
use rand::Rng;
use thiserror::Error;

/// Probability that an interior wall segment is opened.
pub const DEFAULT_CARVE_PROBABILITY: f64 = 0.75;

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Chance, in `[0, 1]`, that each interior wall segment between two
    /// passage cells is removed.
    pub carve_probability: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            carve_probability: DEFAULT_CARVE_PROBABILITY,
        }
    }
}

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// Dimensions must be odd, at least 3, and leave room for two
    /// distinct passage cells.
    #[error("invalid maze dimensions {width}x{height}: need odd sizes of at least 3 with two or more passage cells")]
    InvalidDimensions { width: usize, height: usize },
    #[error("carve probability {0} is outside [0, 1]")]
    InvalidCarveProbability(f64),
    #[error("no solvable maze after {attempts} attempts")]
    Unsolvable { attempts: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Maze generator drawing from a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GenConfig::default())
    }

    /// Create a generator with the given configuration.
    pub fn with_config(rng: R, config: GenConfig) -> Self {
        Self { rng, config }
    }

    /// Generate a `width` × `height` maze with one start and one goal.
    ///
    /// Start and goal are picked uniformly among the passage cells and
    /// are always distinct. No check is made that one reaches the other;
    /// see [`generate_solvable`](Self::generate_solvable).
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Grid, GenError> {
        check_dimensions(width, height)?;
        let p = self.config.carve_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(GenError::InvalidCarveProbability(p));
        }

        let mut rows: Vec<Vec<char>> = Vec::with_capacity(height);
        let mut segments = 0usize;
        let mut carved = 0usize;

        for r in 0..height {
            let mut row = Vec::with_capacity(width);
            for c in 0..width {
                let border = r == 0 || c == 0 || r == height - 1 || c == width - 1;
                let ch = match (r & 1 == 1, c & 1 == 1) {
                    (true, true) => symbol::OPEN,
                    (false, false) => symbol::CORNER,
                    (odd_row, _) => {
                        let wall = if odd_row {
                            symbol::VERTICAL
                        } else {
                            symbol::HORIZONTAL
                        };
                        if border {
                            wall
                        } else {
                            segments += 1;
                            if self.rng.random_bool(p) {
                                carved += 1;
                                symbol::OPEN
                            } else {
                                wall
                            }
                        }
                    }
                };
                row.push(ch);
            }
            rows.push(row);
        }

        let start = self.random_passage(width, height);
        let mut goal = self.random_passage(width, height);
        while goal == start {
            goal = self.random_passage(width, height);
        }
        rows[start.row as usize][start.col as usize] = symbol::START;
        rows[goal.row as usize][goal.col as usize] = symbol::GOAL;

        log::debug!(
            "generated {width}x{height} maze: carved {carved}/{segments} walls, start {start}, goal {goal}"
        );

        let grid = Grid::from_rows(rows.iter().map(|r| r.iter().collect::<String>()))?;
        Ok(grid)
    }

    /// Generate mazes until one connects start and goal, giving up after
    /// `max_attempts` tries.
    pub fn generate_solvable(
        &mut self,
        width: usize,
        height: usize,
        max_attempts: usize,
    ) -> Result<Grid, GenError> {
        for attempt in 1..=max_attempts {
            let grid = self.generate(width, height)?;
            if bfs_distance(&grid, grid.start(), grid.goal()).is_some() {
                return Ok(grid);
            }
            log::debug!("attempt {attempt}: goal unreachable, regenerating");
        }
        Err(GenError::Unsolvable {
            attempts: max_attempts,
        })
    }

    /// A uniformly random passage cell (odd row, odd column).
    fn random_passage(&mut self, width: usize, height: usize) -> Coord {
        let row = 2 * self.rng.random_range(0..height / 2) + 1;
        let col = 2 * self.rng.random_range(0..width / 2) + 1;
        Coord::new(row as i32, col as i32)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GenError> {
    let valid = width >= 3
        && height >= 3
        && width % 2 == 1
        && height % 2 == 1
        && (width / 2) * (height / 2) >= 2;
    if valid {
        Ok(())
    } else {
        Err(GenError::InvalidDimensions { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::CellKind;
    use maze_paths::{Solver, bfs_map, manhattan, solve};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn default_probability_preserved() {
        assert_eq!(GenConfig::default().carve_probability, 0.75);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mut mg = seeded(1);
        for (w, h) in [(4, 5), (5, 4), (1, 5), (5, 1), (3, 3), (0, 0), (2, 2)] {
            assert_eq!(
                mg.generate(w, h),
                Err(GenError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
        assert!(mg.generate(5, 3).is_ok());
        assert!(mg.generate(3, 5).is_ok());
    }

    #[test]
    fn rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let mut mg = MazeGen::with_config(
                StdRng::seed_from_u64(1),
                GenConfig {
                    carve_probability: p,
                },
            );
            assert!(matches!(
                mg.generate(7, 7),
                Err(GenError::InvalidCarveProbability(_))
            ));
        }
    }

    #[test]
    fn structure_holds_for_many_sizes_and_seeds() {
        for seed in 0..20 {
            let mut mg = seeded(seed);
            for (w, h) in [(3, 5), (5, 3), (5, 5), (7, 11), (29, 29), (31, 9)] {
                let g = mg.generate(w, h).unwrap();
                assert_eq!(g.width(), w);
                assert_eq!(g.height(), h);
                assert!(g.rows().all(|r| r.chars().count() == w));
                assert_ne!(g.start(), g.goal());
                assert!(g.start().is_passage_parity());
                assert!(g.goal().is_passage_parity());
                let starts = g.iter().filter(|(_, k)| *k == CellKind::Start).count();
                let goals = g.iter().filter(|(_, k)| *k == CellKind::Goal).count();
                assert_eq!((starts, goals), (1, 1));
            }
        }
    }

    #[test]
    fn border_is_solid_and_lattice_fixed() {
        let g = seeded(7).generate(9, 7).unwrap();
        for (at, kind) in g.iter() {
            let border = at.row == 0 || at.col == 0 || at.row == 6 || at.col == 8;
            if border {
                assert_eq!(kind, CellKind::Wall, "border open at {at}");
            }
            if at.row % 2 == 0 && at.col % 2 == 0 {
                assert_eq!(g.symbol_at(at), Some(symbol::CORNER));
            }
            if at.is_passage_parity() {
                assert!(kind.is_open());
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = seeded(42).generate(21, 15).unwrap();
        let b = seeded(42).generate(21, 15).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn nothing_carved_means_no_path() {
        let mut mg = MazeGen::with_config(
            StdRng::seed_from_u64(3),
            GenConfig {
                carve_probability: 0.0,
            },
        );
        let g = mg.generate(11, 11).unwrap();
        assert!(solve(&g).unwrap().is_empty());
    }

    #[test]
    fn everything_carved_gives_straight_route() {
        let mut mg = MazeGen::with_config(
            StdRng::seed_from_u64(3),
            GenConfig {
                carve_probability: 1.0,
            },
        );
        for _ in 0..10 {
            let g = mg.generate(15, 9).unwrap();
            let path = solve(&g).unwrap();
            assert_eq!(path.len() as i32, manhattan(g.start(), g.goal()));
        }
    }

    #[test]
    fn generate_solvable_connects_endpoints() {
        let mut mg = seeded(11);
        for _ in 0..10 {
            let g = mg.generate_solvable(15, 15, 100).unwrap();
            assert!(!solve(&g).unwrap().is_empty());
        }
    }

    #[test]
    fn generate_solvable_gives_up() {
        let mut mg = MazeGen::with_config(
            StdRng::seed_from_u64(5),
            GenConfig {
                carve_probability: 0.0,
            },
        );
        assert_eq!(
            mg.generate_solvable(7, 7, 4),
            Err(GenError::Unsolvable { attempts: 4 })
        );
    }

    // -----------------------------------------------------------------------
    // Solver cross-checks on generated mazes
    // -----------------------------------------------------------------------

    #[test]
    fn astar_matches_bfs_on_generated_mazes() {
        let solver = Solver::new();
        for seed in 0..200 {
            let g = seeded(seed).generate(21, 17).unwrap();
            let path = solver.solve(&g).unwrap();
            let dist = bfs_map(&g, g.start());
            match dist.get(&g.goal()) {
                Some(&d) => assert_eq!(path.len() as u32, d, "seed {seed}"),
                None => assert!(path.is_empty(), "seed {seed}"),
            }
        }
    }

    #[test]
    fn solutions_walk_open_cells_to_goal() {
        for seed in 0..100 {
            let g = seeded(seed).generate(29, 29).unwrap();
            let path = solve(&g).unwrap();
            if path.is_empty() {
                continue;
            }
            let cells = path.trace(g.start());
            assert!(cells.iter().all(|&c| g.is_open(c)), "seed {seed}");
            assert_eq!(cells.last(), Some(&g.goal()), "seed {seed}");
        }
    }

    #[test]
    fn solve_is_idempotent() {
        for seed in 0..20 {
            let g = seeded(seed).generate(15, 15).unwrap();
            let first = solve(&g).unwrap();
            let second = solve(&g).unwrap();
            assert_eq!(first.len(), second.len());
            assert_eq!(first.is_empty(), second.is_empty());
        }
    }
}
