use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use maze_core::Coord;

use crate::moves::{Path, encode};
use crate::traits::{AstarPather, Maze};
use crate::SolveError;

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Frontier entry, ordered by `f` for use in `BinaryHeap`.
///
/// Equal `f` values pop in insertion order (`seq`), which makes the search
/// fully deterministic for a given neighbor order.
#[derive(Clone, Copy, Debug)]
struct Entry {
    coord: Coord,
    g: u32,
    f: f64,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// Per-search bookkeeping. A missing key means "not yet discovered",
/// i.e. infinite cost.
#[derive(Default)]
struct Ledger {
    came_from: HashMap<Coord, Coord>,
    g_score: HashMap<Coord, u32>,
    f_score: HashMap<Coord, f64>,
}

impl Ledger {
    fn g(&self, p: Coord) -> u32 {
        self.g_score.get(&p).copied().unwrap_or(u32::MAX)
    }

    fn f(&self, p: Coord) -> f64 {
        self.f_score.get(&p).copied().unwrap_or(f64::INFINITY)
    }

    fn record(&mut self, p: Coord, parent: Option<Coord>, g: u32, f: f64) {
        if let Some(parent) = parent {
            self.came_from.insert(p, parent);
        }
        self.g_score.insert(p, g);
        self.f_score.insert(p, f);
    }

    /// Walk predecessors from `to` back to `from`, returning the cells in
    /// start→goal order.
    fn cells_to(&self, from: Coord, to: Coord) -> Result<Vec<Coord>, SolveError> {
        let mut cells = vec![to];
        let mut at = to;
        while at != from {
            // A chain longer than the ledger must contain a cycle.
            if cells.len() > self.came_from.len() + 1 {
                return Err(SolveError::BrokenChain { at });
            }
            at = *self
                .came_from
                .get(&at)
                .ok_or(SolveError::BrokenChain { at })?;
            cells.push(at);
        }
        cells.reverse();
        Ok(cells)
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// A* maze solver.
///
/// The solver itself holds only configuration; every search owns its
/// frontier and ledger, so one `Solver` can serve many grids, including
/// from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    max_expansions: Option<usize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Solver {
    /// A solver with no expansion limit and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop with [`SolveError::Interrupted`] once `n` cells have been
    /// expanded without reaching the goal.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Stop with [`SolveError::Cancelled`] as soon as `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Solve a maze, returning the moves from its start to its goal.
    ///
    /// An unreachable goal yields an empty [`Path`]; that is a valid
    /// outcome, not an error.
    pub fn solve<M: Maze + ?Sized>(&self, maze: &M) -> Result<Path, SolveError> {
        let start = maze.find_start().ok_or(SolveError::MissingStart)?;
        let goal = maze.find_goal().ok_or(SolveError::MissingGoal)?;

        match self.astar_path(maze, start, goal)? {
            Some(cells) => {
                let path = encode(&cells)?;
                log::debug!("solved {start} -> {goal} in {} moves", path.len());
                Ok(path)
            }
            None => {
                log::debug!("no path from {start} to {goal}");
                Ok(Path::empty())
            }
        }
    }

    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if the
    /// frontier is exhausted without reaching `to`.
    pub fn astar_path<P: AstarPather + ?Sized>(
        &self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Result<Option<Vec<Coord>>, SolveError> {
        let mut ledger = Ledger::default();
        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        let mut seq: u64 = 0;

        ledger.record(from, None, 0, pather.estimate(from, to));
        open.push(Entry {
            coord: from,
            g: 0,
            f: 0.0,
            seq,
        });

        let mut nbuf = Vec::with_capacity(4);
        let mut expanded = 0usize;

        while let Some(current) = open.pop() {
            // Skip stale entries superseded by a cheaper discovery.
            if current.g > ledger.g(current.coord) {
                continue;
            }

            if current.coord == to {
                log::trace!("reached {to} after {expanded} expansions");
                return ledger.cells_to(from, to).map(Some);
            }

            self.check_interrupt(expanded)?;
            expanded += 1;
            log::trace!("expand {} g={} f={}", current.coord, current.g, current.f);

            nbuf.clear();
            pather.neighbors(current.coord, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current.g + 1;
                if tentative_g >= ledger.g(np) {
                    continue;
                }

                ledger.record(
                    np,
                    Some(current.coord),
                    tentative_g,
                    f64::from(tentative_g) + pather.estimate(np, to),
                );
                seq += 1;
                open.push(Entry {
                    coord: np,
                    g: tentative_g,
                    f: ledger.f(np),
                    seq,
                });
            }
        }

        log::trace!("frontier exhausted after {expanded} expansions");
        Ok(None)
    }

    fn check_interrupt(&self, expanded: usize) -> Result<(), SolveError> {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(AtomicOrdering::Relaxed))
        {
            return Err(SolveError::Cancelled);
        }
        match self.max_expansions {
            Some(max) if expanded >= max => Err(SolveError::Interrupted { expanded }),
            _ => Ok(()),
        }
    }
}

/// Solve a maze with a default [`Solver`].
pub fn solve<M: Maze + ?Sized>(maze: &M) -> Result<Path, SolveError> {
    Solver::new().solve(maze)
}
