pub mod check;
pub mod export;
pub mod play;
pub mod roll;
pub mod scenes;

use std::path::Path;

use lantern_fiction::SceneGraph;
use lantern_fiction::content::lantern_crossroads;

/// Load an adventure file, or the built-in adventure when no path is given.
fn load_graph(adventure: Option<&Path>) -> Result<SceneGraph, String> {
    match adventure {
        Some(path) => SceneGraph::load(path).map_err(|e| e.to_string()),
        None => Ok(lantern_crossroads()),
    }
}
