//! Texture lookup
//!
//! The simulation never decodes images; it only needs stable handles to hand
//! to the renderer. [`TextureCache`] assigns one handle per texture name and
//! returns the same handle every time that name is requested again.

use std::collections::HashMap;

/// Unique identifier for a texture in the cache.
///
/// IDs are assigned sequentially starting from 1. An ID of 0 is reserved and
/// never handed out.
pub type TextureId = u64;

/// A lightweight handle to a named texture.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TextureHandle {
    id: TextureId,
    name: String,
}

impl TextureHandle {
    /// Get the texture ID
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Get the texture file name this handle was requested with
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Source of texture handles
pub trait TextureLoader {
    /// Look up (or register) the texture with the given file name
    fn get_texture(&mut self, name: &str) -> TextureHandle;
}

/// In-memory texture registry with name deduplication.
#[derive(Debug)]
pub struct TextureCache {
    by_name: HashMap<String, TextureHandle>,
    next_id: TextureId,
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            next_id: 1, // 0 is reserved as "no texture"
        }
    }

    /// Look up a texture without registering it
    pub fn get(&self, name: &str) -> Option<&TextureHandle> {
        self.by_name.get(name)
    }

    /// Number of distinct textures registered
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether no texture has been requested yet
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl TextureLoader for TextureCache {
    fn get_texture(&mut self, name: &str) -> TextureHandle {
        if let Some(handle) = self.by_name.get(name) {
            return handle.clone();
        }

        let handle = TextureHandle {
            id: self.next_id,
            name: name.to_string(),
        };
        self.next_id += 1;
        log::debug!("Registered texture '{}' as #{}", name, handle.id);

        self.by_name.insert(name.to_string(), handle.clone());
        handle
    }
}
