use std::collections::VecDeque;

use maze_core::{Cell, Grid};

/// Breadth-first step distances from `from` to every cell of `grid`.
///
/// The result is indexed like [`Grid::index`]; unreachable cells and walls
/// are `None`. Returns all `None` if `from` itself is not passable.
pub fn bfs_map(grid: &Grid, from: Cell) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.len()];
    if !grid.passable(from) {
        return dist;
    }
    let Some(si) = grid.index(from) else {
        return dist;
    };
    dist[si] = Some(0);

    let mut queue = VecDeque::from([from]);
    while let Some(c) = queue.pop_front() {
        let Some(d) = grid.index(c).and_then(|i| dist[i]) else {
            continue;
        };
        for (_, n) in grid.neighbors(c) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(d + 1);
            queue.push_back(n);
        }
    }
    dist
}

/// Whether `to` can be reached from `from` through passable cells.
pub fn is_reachable(grid: &Grid, from: Cell, to: Cell) -> bool {
    grid.index(to)
        .is_some_and(|i| bfs_map(grid, from)[i].is_some())
}
