use platform_pathfinding::{columns_from_rows, LogObserver, PathEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Repeatedly moves the target to a random empty cell of a staircase level and reports how
// often the greedy search verifiably reaches it.
fn main() {
    let level = columns_from_rows(
        "00000000000000000000
         00000000000000001100
         00000000000011000000
         00000000110000000000
         00001100000000000000
         00000000000000000000
         11111111111111111111",
    );
    let mut engine = PathEngine::new().with_observer(LogObserver::new());
    engine.ingest(&level).expect("staircase level is well formed");
    engine.set_origin(1, 1);
    let mut rng = StdRng::seed_from_u64(0);
    let mut reached = 0;
    const N_TARGETS: usize = 100;
    for _ in 0..N_TARGETS {
        if engine.set_random_target(&mut rng).is_none() {
            break;
        }
        engine.update_path();
        if engine.is_complete() {
            reached += 1;
        }
    }
    println!("Anchors: {:?}", engine.anchors());
    println!("Reached {} of {} random targets", reached, N_TARGETS);
}
