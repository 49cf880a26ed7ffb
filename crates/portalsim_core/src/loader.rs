//! Map and level-list loading
//!
//! [`SceneLoader`] turns a map path into a ready-to-run [`Scene`];
//! [`LevelList`] supplies the ordered list of maps making up the game.
//! Both have file-backed implementations reading from the data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::assets::TextureLoader;
use crate::map::MapFile;
use crate::scene::{Scene, SceneError};

/// Builds scenes from map paths
pub trait SceneLoader {
    /// Load the map at `path`
    ///
    /// A map that does not exist must be reported as
    /// [`SceneError::NotFound`] so callers can fall back to another map.
    fn load(&mut self, path: &str, textures: &mut dyn TextureLoader) -> Result<Scene, SceneError>;
}

/// Ordered list of level paths
pub trait LevelList {
    fn list(&self) -> Result<Vec<String>, SceneError>;
}

/// Reads RON map files relative to a data directory
#[derive(Clone, Debug)]
pub struct RonSceneLoader {
    data_dir: PathBuf,
}

impl RonSceneLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl SceneLoader for RonSceneLoader {
    fn load(&mut self, path: &str, textures: &mut dyn TextureLoader) -> Result<Scene, SceneError> {
        let full_path = self.data_dir.join(path);
        let contents = read_or_not_found(&full_path, path)?;
        let map = MapFile::from_ron(&contents)?;

        log::info!(
            "Loaded map '{}' from {} ({} walls, {} triggers)",
            map.name,
            full_path.display(),
            map.walls.len(),
            map.triggers.len()
        );
        Ok(map.into_scene(textures))
    }
}

/// Text file listing one map path per line
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Clone, Debug)]
pub struct MapListFile {
    path: PathBuf,
}

impl MapListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the contents of a map list
    pub fn parse(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect()
    }
}

impl LevelList for MapListFile {
    fn list(&self) -> Result<Vec<String>, SceneError> {
        let contents = read_or_not_found(&self.path, &self.path.display().to_string())?;
        let levels = Self::parse(&contents);
        log::debug!("Map list {} has {} levels", self.path.display(), levels.len());
        Ok(levels)
    }
}

fn read_or_not_found(path: &Path, name: &str) -> Result<String, SceneError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SceneError::NotFound(name.to_string()),
        _ => SceneError::Io(e),
    })
}
