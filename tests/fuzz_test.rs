/// Fuzzes the engine on many random levels, checking the grid, scene, visibility and search
/// properties that must hold for any input. Both solvers are tested.
use platform_pathfinding::{
    is_clear_path, manhattan_distance, Grid, LevelGrid, PathEngine, PathPoint, PathStatus, Point,
    SceneGrid, SearchConfig, SearchStrategy, Tile, WayGrid, REACH_DISTANCE,
};
use rand::prelude::*;

fn random_level(w: usize, h: usize, rng: &mut StdRng) -> Vec<Vec<char>> {
    (0..w)
        .map(|_| {
            (0..h)
                .map(|_| if rng.gen_bool(0.35) { '1' } else { '0' })
                .collect()
        })
        .collect()
}

fn random_point(w: usize, h: usize, rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..w) as i32, rng.gen_range(0..h) as i32)
}

fn visualize_level(level: &LevelGrid, path: &[PathPoint]) {
    for y in (0..level.height() as i32).rev() {
        for x in 0..level.width() as i32 {
            let p = Point::new(x, y);
            if let Some(point) = path.iter().find(|pp| pp.point() == p) {
                print!("{}", point.kind);
            } else {
                print!("{}", level.grid.get_point(p));
            }
        }
        println!();
    }
}

fn path_cost(path: &[PathPoint]) -> i64 {
    path.windows(2)
        .map(|pair| manhattan_distance(&pair[0].point(), &pair[1].point()))
        .sum()
}

/// Every segment but the last was reachable when it was taken; the last one only if the
/// search reached the target.
fn assert_segments_reachable(level: &LevelGrid, path: &[PathPoint], status: PathStatus) {
    let n = path.len();
    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0].point(), pair[1].point());
        if i + 2 == n && status == PathStatus::Exhausted {
            continue;
        }
        let reachable =
            manhattan_distance(&from, &to) < i64::from(REACH_DISTANCE)
            && is_clear_path(level, from, to);
        if !reachable {
            visualize_level(level, path);
        }
        assert!(reachable, "segment {} -> {} is not reachable", from, to);
    }
}

#[test]
fn fuzz_grid_accessors() {
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let (w, h) = (rng.gen_range(1..20), rng.gen_range(1..20));
        let level = LevelGrid::from_columns(&random_level(w, h, &mut rng)).unwrap();
        let grid = &level.grid;
        let (w, h) = (w as i32, h as i32);
        for y in 0..h {
            for x in 0..w - 1 {
                let (here, next) = (Point::new(x, y), Point::new(x + 1, y));
                assert_eq!(grid.right(x, y), Some(grid.get_point(next)));
                assert_eq!(grid.left(x + 1, y), Some(grid.get_point(here)));
            }
            assert_eq!(grid.right(w - 1, y), None);
            assert_eq!(grid.left(0, y), None);
        }
        for x in 0..w {
            for y in 0..h - 1 {
                let (here, next) = (Point::new(x, y), Point::new(x, y + 1));
                assert_eq!(grid.above(x, y), Some(grid.get_point(next)));
                assert_eq!(grid.below(x, y + 1), Some(grid.get_point(here)));
            }
            assert_eq!(grid.above(x, h - 1), None);
            assert_eq!(grid.below(x, 0), None);
        }
        for (x, y) in [(-1, 0), (0, -1), (w, 0), (0, h), (w + 3, h + 3), (-5, -5)] {
            assert_eq!(grid.tile_at(x, y), None);
            assert_eq!(grid.left(x + 1, y), None);
            assert_eq!(grid.right(x - 1, y), None);
            assert_eq!(grid.above(x, y - 1), None);
            assert_eq!(grid.below(x, y + 1), None);
        }
        // Neighbour offsets must not overflow at the ends of the coordinate range
        let extremes = [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX];
        for (x, y) in extremes
            .iter()
            .flat_map(|&e| [(e, 0), (0, e), (e, e), (e, -e.saturating_add(1))])
        {
            assert_eq!(grid.tile_at(x, y), None);
            assert_eq!(grid.left(x, y), None);
            assert_eq!(grid.right(x, y), None);
            assert_eq!(grid.above(x, y), None);
            assert_eq!(grid.below(x, y), None);
        }
    }
}

#[test]
fn fuzz_scene_analysis() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let columns = random_level(16, 12, &mut rng);
        let level = LevelGrid::from_columns(&columns).unwrap();
        let mut scene = SceneGrid::from_columns(&columns).unwrap();
        let way = WayGrid::from_columns(&columns).unwrap();
        // All three grids agree before any annotation
        assert_eq!(level.grid, scene.grid);
        assert_eq!(level.grid, way.grid);

        scene.analyze();
        let analyzed = scene.clone();
        scene.analyze();
        assert_eq!(scene, analyzed);

        for p in level.grid.positions() {
            let tile = scene.grid.get_point(p);
            match level.grid.get_point(p) {
                Tile::Wall => assert!(matches!(
                    tile,
                    Tile::Wall | Tile::Floor | Tile::Corner | Tile::WallClimb
                )),
                _ => assert!(matches!(tile, Tile::Empty | Tile::Node)),
            }
        }
        for anchor in scene.anchors() {
            assert_eq!(scene.grid.get_point(*anchor), Tile::Node);
            assert_eq!(scene.grid.below(anchor.x, anchor.y), Some(Tile::Corner));
        }
        assert_eq!(scene.anchors().len(), scene.count(Tile::Corner));
    }
}

#[test]
fn fuzz_visibility_symmetry() {
    const N_PAIRS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let level = LevelGrid::from_columns(&vec![vec!['0'; 25]; 25]).unwrap();
    for _ in 0..N_PAIRS {
        let a = random_point(25, 25, &mut rng);
        let b = random_point(25, 25, &mut rng);
        assert_eq!(is_clear_path(&level, a, b), is_clear_path(&level, b, a));
        assert_eq!(is_clear_path(&level, a, b), a != b);
    }
}

#[test]
fn fuzz_path_search() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let columns = random_level(24, 16, &mut rng);
        let origin = random_point(24, 16, &mut rng);
        let target = random_point(24, 16, &mut rng);
        let mut results = Vec::new();
        for strategy in [SearchStrategy::Greedy, SearchStrategy::VisibilityGraph] {
            let mut engine = PathEngine::with_config(SearchConfig {
                strategy,
                ..SearchConfig::default()
            });
            engine.ingest(&columns).unwrap();
            engine.set_origin(origin.x, origin.y);
            engine.set_target(target.x, target.y);
            engine.update_path();
            let path = engine.path_points().to_vec();
            assert_eq!(path[0], PathPoint::new(Tile::Origin, origin));
            assert_eq!(path[path.len() - 1], PathPoint::new(Tile::Target, target));
            assert!(path.len() <= engine.anchors().len() + 2);
            assert!(path[1..path.len() - 1]
                .iter()
                .all(|p| p.kind == Tile::Up && engine.anchors().contains(&p.point())));
            assert_segments_reachable(engine.level(), &path, engine.path_status());
            results.push((path, engine.path_status()));
        }
        let (greedy, greedy_status) = &results[0];
        let (graph, graph_status) = &results[1];
        if *greedy_status == PathStatus::Reached {
            assert_eq!(*graph_status, PathStatus::Reached);
            assert!(path_cost(graph) <= path_cost(greedy));
        }
    }
}
