use platform_pathfinding::{columns_from_rows, PathEngine, SearchConfig, SearchStrategy};

// In this example a path is found over three pillars on a floor
//
//     S marks the origin
//     E marks the target
//
// |                         |
// |      #      #      #    |
// | S    #      #      #  E |
// |#########################|
fn main() {
    let level = columns_from_rows(
        "0000000000000000000000000
         0000000000000000000000000
         0000001000000100000010000
         0000001000000100000010000
         1111111111111111111111111",
    );
    for strategy in [SearchStrategy::Greedy, SearchStrategy::VisibilityGraph] {
        let mut engine = PathEngine::with_config(SearchConfig {
            strategy,
            ..SearchConfig::default()
        });
        if let Err(e) = engine.ingest(&level) {
            eprintln!("{}", e);
            return;
        }
        println!("Scene:\n{}", engine.scene().grid);
        engine.set_origin(1, 1);
        engine.set_target(23, 1);
        engine.update_path();
        println!("{:?} path ({:?}):", strategy, engine.path_status());
        for p in engine.path_points() {
            println!("{}", p);
        }
        println!("{}", engine.way().grid);
    }
}
