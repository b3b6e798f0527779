mod common;

use mazebot_lib::{
    build_graph, prepare_graph, replay, solve, solve_maze, verify_solution, Error, Position,
};

use common::{bfs_distance, generated_maze, grid};

#[test]
fn straight_corridor_links_markers_directly() {
    let maze = grid("A   B");
    let built = build_graph(&maze).expect("graph builds");

    assert_eq!(built.graph.len(), 2);
    assert_eq!(
        built
            .graph
            .label(built.start, built.goal)
            .map(ToString::to_string)
            .as_deref(),
        Some("EEEE")
    );

    let prepared = prepare_graph(&maze).expect("graph prepared");
    let path = solve(&prepared.graph, prepared.start, prepared.goal).expect("reachable");
    assert_eq!(path.to_string(), "EEEE");
    assert_eq!(path.len(), 4);
}

#[test]
fn vertical_corridor_walks_north() {
    let maze = grid("B\n \n \n \nA");
    let solution = solve_maze(&maze).expect("solvable");
    assert_eq!(solution.directions.to_string(), "NNNN");
}

#[test]
fn l_shaped_corridor_length_five() {
    let maze = grid(concat!(
        "XXXXX\n",
        "XA  X\n",
        "XXX X\n",
        "XXX X\n",
        "XXXBX\n",
        "XXXXX",
    ));
    let solution = solve_maze(&maze).expect("solvable");
    assert_eq!(solution.directions.to_string(), "EESSS");
    assert_eq!(solution.moves, 5);
}

#[test]
fn wall_partition_is_unreachable() {
    let maze = grid(concat!(
        "XXXXXXX\n",
        "XA X  X\n",
        "X  X  X\n",
        "X  X BX\n",
        "XXXXXXX",
    ));
    let error = solve_maze(&maze).expect_err("partitioned");
    match error {
        Error::Unreachable { start, goal } => {
            assert_eq!(start, Position::new(1, 1));
            assert_eq!(goal, Position::new(5, 3));
        }
        other => panic!("expected unreachable, got {other:?}"),
    }
    assert_eq!(bfs_distance(&maze), None);
}

#[test]
fn boxed_in_start_is_unreachable() {
    let maze = grid("XXXXX\nXAX B\nXXXXX");
    assert!(matches!(
        solve_maze(&maze),
        Err(Error::Unreachable { .. })
    ));
}

#[test]
fn open_room_is_solved_optimally() {
    let maze = grid(concat!(
        "A    \n",
        "     \n",
        "  X  \n",
        "     \n",
        "    B",
    ));
    let solution = solve_maze(&maze).expect("solvable");
    assert_eq!(Some(solution.moves), bfs_distance(&maze));
    verify_solution(&maze, &solution.directions).expect("valid route");
}

#[test]
fn route_prefers_the_short_loop_side() {
    let maze = grid(concat!(
        "XXXXXXXXX\n",
        "XA      X\n",
        "X XXXXX X\n",
        "X X   X X\n",
        "X X X X X\n",
        "X   X  BX\n",
        "XXXXXXXXX",
    ));
    let solution = solve_maze(&maze).expect("solvable");
    assert_eq!(Some(solution.moves), bfs_distance(&maze));
    assert_eq!(replay(&maze, &solution.directions).expect("replays"), maze.goal());
}

#[test]
fn generated_perfect_mazes_match_bfs_oracle() {
    for seed in 1..=20 {
        let text = generated_maze(12, 9, 0, seed);
        let maze = grid(&text);
        let solution = solve_maze(&maze).unwrap_or_else(|e| panic!("seed {seed}: {e}"));

        assert_eq!(
            Some(solution.moves),
            bfs_distance(&maze),
            "seed {seed} is not optimal"
        );
        verify_solution(&maze, &solution.directions)
            .unwrap_or_else(|e| panic!("seed {seed} walks badly: {e}"));
        assert_eq!(
            solution.graph.reduced_vertices, 2,
            "a perfect maze reduces to its two markers"
        );
    }
}

#[test]
fn generated_mazes_with_loops_match_bfs_oracle() {
    for seed in 1..=30 {
        let text = generated_maze(15, 10, 40, seed);
        let maze = grid(&text);
        let solution = solve_maze(&maze).unwrap_or_else(|e| panic!("seed {seed}: {e}"));

        assert_eq!(
            Some(solution.moves),
            bfs_distance(&maze),
            "seed {seed} is not optimal"
        );
        verify_solution(&maze, &solution.directions)
            .unwrap_or_else(|e| panic!("seed {seed} walks badly: {e}"));
    }
}

#[test]
fn solving_is_deterministic() {
    let maze = grid(&generated_maze(10, 10, 25, 7));
    let first = solve_maze(&maze).expect("solvable");
    let second = solve_maze(&maze).expect("solvable");
    assert_eq!(first.directions, second.directions);
}
