use itertools::Itertools;
use log::{debug, info};

use crate::engine::PathPoint;
use crate::scene::SceneGrid;
use crate::solver::PathStatus;
use crate::tile::Tile;

/// Receives the results of a [PathEngine](crate::PathEngine) as they are produced. The engine
/// itself never prints anything.
pub trait PathObserver {
    fn scene_analyzed(&mut self, _scene: &SceneGrid) {}
    fn path_updated(&mut self, _path: &[PathPoint], _status: PathStatus) {}
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PathObserver for NoopObserver {}

/// Forwards events to the [log] facade: the rendered scene at debug level and the path at
/// info level. A scene identical to the last one rendered is not rendered again.
#[derive(Clone, Debug, Default)]
pub struct LogObserver {
    last_rendered: Option<String>,
}

impl LogObserver {
    pub fn new() -> LogObserver {
        LogObserver::default()
    }
}

impl PathObserver for LogObserver {
    fn scene_analyzed(&mut self, scene: &SceneGrid) {
        let rendered = scene.grid.to_string();
        if self.last_rendered.as_ref() != Some(&rendered) {
            debug!(
                "Scene with {} anchors, {} floors, {} climbable walls:\n{}",
                scene.anchors().len(),
                scene.count(Tile::Floor) + scene.count(Tile::Corner),
                scene.count(Tile::WallClimb),
                rendered
            );
            self.last_rendered = Some(rendered);
        }
    }

    fn path_updated(&mut self, path: &[PathPoint], status: PathStatus) {
        info!("Path ({:?}): {}", status, path.iter().join(" -> "));
    }
}
