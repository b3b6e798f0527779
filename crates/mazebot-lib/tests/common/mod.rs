// Shared fixtures and oracles for mazebot-lib integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use mazebot_lib::{Direction, Grid, Position};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn grid(text: &str) -> Grid {
    Grid::parse(text).expect("fixture maze is valid")
}

/// Shortest number of unit moves from `A` to `B` by breadth-first search over
/// every open cell. Independent of the graph pipeline.
pub fn bfs_distance(grid: &Grid) -> Option<usize> {
    let mut distance = vec![None; grid.width() * grid.height()];
    let index = |p: Position| p.y * grid.width() + p.x;
    let mut queue = VecDeque::new();

    distance[index(grid.start())] = Some(0usize);
    queue.push_back(grid.start());

    while let Some(current) = queue.pop_front() {
        let here = distance[index(current)]?;
        if current == grid.goal() {
            return Some(here);
        }
        for direction in Direction::ALL {
            let Some(next) = grid.step(current, direction) else {
                continue;
            };
            if !grid.is_open(next.x, next.y) || distance[index(next)].is_some() {
                continue;
            }
            distance[index(next)] = Some(here + 1);
            queue.push_back(next);
        }
    }

    None
}

/// xorshift128+ stream; deterministic maze generation for tests.
pub struct XorShift {
    state: [u64; 2],
}

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self {
            state: [seed ^ 0x9E37_79B9_7F4A_7C15, seed.wrapping_mul(31) | 1],
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1].wrapping_add(s0)
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Generate a perfect maze of `cells_x` by `cells_y` rooms with a depth-first
/// carver, then knock out `extra_openings` additional walls to create loops.
/// `A` sits in the top-left room and `B` in the bottom-right room.
pub fn generated_maze(cells_x: usize, cells_y: usize, extra_openings: usize, seed: u64) -> String {
    let width = cells_x * 2 + 1;
    let height = cells_y * 2 + 1;
    let mut map = vec![vec!['X'; width]; height];
    let mut rng = XorShift::new(seed);
    let mut visited = vec![vec![false; cells_x]; cells_y];
    let mut stack = vec![(0usize, 0usize)];
    visited[0][0] = true;
    map[1][1] = ' ';

    while let Some(&(cx, cy)) = stack.last() {
        let mut options = Vec::new();
        if cx > 0 && !visited[cy][cx - 1] {
            options.push((cx - 1, cy));
        }
        if cx + 1 < cells_x && !visited[cy][cx + 1] {
            options.push((cx + 1, cy));
        }
        if cy > 0 && !visited[cy - 1][cx] {
            options.push((cx, cy - 1));
        }
        if cy + 1 < cells_y && !visited[cy + 1][cx] {
            options.push((cx, cy + 1));
        }

        if options.is_empty() {
            stack.pop();
            continue;
        }

        let (nx, ny) = options[rng.below(options.len())];
        visited[ny][nx] = true;
        map[ny * 2 + 1][nx * 2 + 1] = ' ';
        map[cy + ny + 1][cx + nx + 1] = ' ';
        stack.push((nx, ny));
    }

    for _ in 0..extra_openings {
        let x = 1 + rng.below(width - 2);
        let y = 1 + rng.below(height - 2);
        map[y][x] = ' ';
    }

    map[1][1] = 'A';
    map[height - 2][width - 2] = 'B';

    map.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
