//! The scene graph: an identifier-keyed, read-only map of scenes.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Scene;
use crate::error::{FictionError, FictionResult};

/// On-disk shape of an adventure.
#[derive(Debug, Serialize, Deserialize)]
struct AdventureFile {
    title: String,
    start: String,
    scenes: Vec<Scene>,
}

/// A problem in a loaded graph that does not prevent play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// A choice points at a scene that does not exist.
    DanglingDestination {
        /// Scene owning the choice.
        scene: String,
        /// The choice.
        choice: String,
        /// The missing destination.
        destination: String,
    },
    /// A scene no path from the start scene leads to.
    Unreachable {
        /// The orphaned scene.
        scene: String,
    },
}

impl std::fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingDestination {
                scene,
                choice,
                destination,
            } => write!(
                f,
                "choice '{choice}' in scene '{scene}' leads to unknown scene '{destination}'"
            ),
            Self::Unreachable { scene } => {
                write!(f, "scene '{scene}' is unreachable from the start scene")
            }
        }
    }
}

/// A directed, possibly cyclic graph of scenes with one entry point.
///
/// Immutable once built; sessions share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    title: String,
    start: String,
    scenes: HashMap<String, Scene>,
    /// Scene ids in declaration order.
    order: Vec<String>,
}

impl SceneGraph {
    /// Build a graph, rejecting structural errors.
    ///
    /// Dangling destinations are allowed here; see [`SceneGraph::lint`].
    pub fn new(
        title: impl Into<String>,
        start: impl Into<String>,
        scenes: Vec<Scene>,
    ) -> FictionResult<Self> {
        let start = start.into();
        if scenes.is_empty() {
            return Err(FictionError::EmptyGraph);
        }

        let mut seen = HashSet::new();
        for scene in &scenes {
            if !seen.insert(scene.id.as_str()) {
                return Err(FictionError::DuplicateScene(scene.id.clone()));
            }
            let mut choice_ids = HashSet::new();
            for choice in &scene.choices {
                if !choice_ids.insert(choice.id.as_str()) {
                    return Err(FictionError::DuplicateChoice {
                        scene: scene.id.clone(),
                        choice: choice.id.clone(),
                    });
                }
            }
        }
        if !seen.contains(start.as_str()) {
            return Err(FictionError::MissingStartScene(start));
        }

        Ok(Self::assemble(title, start, scenes))
    }

    /// Build a graph from scenes already known to be well-formed.
    pub(crate) fn assemble(title: impl Into<String>, start: String, scenes: Vec<Scene>) -> Self {
        let order = scenes.iter().map(|s| s.id.clone()).collect();
        let scenes = scenes.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self {
            title: title.into(),
            start,
            scenes,
            order,
        }
    }

    /// Parse an adventure from JSON.
    pub fn from_json(json: &str) -> FictionResult<Self> {
        let file: AdventureFile = serde_json::from_str(json)?;
        let graph = Self::new(file.title, file.start, file.scenes)?;
        tracing::debug!(
            title = %graph.title,
            scenes = graph.len(),
            "loaded adventure"
        );
        Ok(graph)
    }

    /// Read and parse an adventure file.
    pub fn load(path: &Path) -> FictionResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| FictionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the graph as pretty JSON, scenes in declaration order.
    pub fn to_json(&self) -> FictionResult<String> {
        let file = AdventureFile {
            title: self.title.clone(),
            start: self.start.clone(),
            scenes: self.scenes().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The adventure's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Identifier of the entry scene.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The entry scene.
    pub fn start_scene(&self) -> Option<&Scene> {
        self.get(&self.start)
    }

    /// Look up a scene.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Whether a scene exists.
    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// Scenes in declaration order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> + '_ {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Report dangling destinations and unreachable scenes.
    pub fn lint(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();

        for scene in self.scenes() {
            for choice in &scene.choices {
                if !self.contains(&choice.destination) {
                    issues.push(GraphIssue::DanglingDestination {
                        scene: scene.id.clone(),
                        choice: choice.id.clone(),
                        destination: choice.destination.clone(),
                    });
                }
            }
        }

        let reachable = self.reachable_from(&self.start);
        for id in &self.order {
            if !reachable.contains(id.as_str()) {
                issues.push(GraphIssue::Unreachable { scene: id.clone() });
            }
        }

        issues
    }

    /// Breadth-first walk over existing scenes.
    fn reachable_from<'a>(&'a self, start: &'a str) -> HashSet<&'a str> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        if self.contains(start) {
            visited.insert(start);
            queue.push_back(start);
        }

        while let Some(id) = queue.pop_front() {
            let Some(scene) = self.scenes.get(id) else {
                continue;
            };
            for choice in &scene.choices {
                let next = choice.destination.as_str();
                if self.contains(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        visited
    }
}
