use std::collections::{HashMap, VecDeque};

use maze_core::Coord;

use crate::traits::Pather;

/// Compute a breadth-first distance map from `source`.
///
/// Each step has cost 1. Every reachable coordinate maps to its distance
/// from `source`; unreachable ones are absent.
pub fn bfs_map<P: Pather + ?Sized>(pather: &P, source: Coord) -> HashMap<Coord, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    dist.insert(source, 0);
    queue.push_back(source);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    dist
}

/// Length of the shortest path from `from` to `to` found by an uninformed
/// breadth-first search, or `None` if `to` is unreachable.
///
/// Stops as soon as `to` is reached.
pub fn bfs_distance<P: Pather + ?Sized>(pather: &P, from: Coord, to: Coord) -> Option<u32> {
    if from == to {
        return Some(0);
    }

    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    dist.insert(from, 0u32);
    queue.push_back(from);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            if np == to {
                return Some(nd);
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    None
}
