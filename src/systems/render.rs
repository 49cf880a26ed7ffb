//! Renderer contract
//!
//! The simulation hands the active scene and camera to a [`Renderer`] once per
//! frame and reads the viewport size back for the camera aspect ratio.
//! [`HeadlessRenderer`] draws nothing; it records what it was given.

use portalsim_core::{Camera, Scene};

/// Frame output backend
pub trait Renderer {
    /// Resize the output surface
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Current output size in pixels
    fn viewport_size(&self) -> (u32, u32);

    /// Scene to draw on the next frame
    fn set_scene(&mut self, scene: &Scene);

    /// Draw one frame from `camera`
    fn render(&mut self, camera: &Camera);
}

/// Renderer for runs without a window
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    frames: u64,
    scene_name: Option<String>,
    last_camera: Option<Camera>,
}

impl HeadlessRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: 0,
            scene_name: None,
            last_camera: None,
        }
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Name of the scene last passed to `set_scene`
    pub fn scene_name(&self) -> Option<&str> {
        self.scene_name.as_deref()
    }

    pub fn last_camera(&self) -> Option<&Camera> {
        self.last_camera.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn set_viewport(&mut self, width: u32, height: u32) {
        log::debug!("Viewport resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_scene(&mut self, scene: &Scene) {
        if self.scene_name.as_deref() != Some(scene.name.as_str()) {
            log::debug!("Renderer switched to scene '{}'", scene.name);
            self.scene_name = Some(scene.name.clone());
        }
    }

    fn render(&mut self, camera: &Camera) {
        self.frames += 1;
        self.last_camera = Some(*camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portalsim_core::Marker;

    #[test]
    fn test_viewport() {
        let mut renderer = HeadlessRenderer::new(640, 480);
        assert_eq!(renderer.viewport_size(), (640, 480));
        renderer.set_viewport(1920, 1080);
        assert_eq!(renderer.viewport_size(), (1920, 1080));
    }

    #[test]
    fn test_render_records_frames() {
        let mut renderer = HeadlessRenderer::new(640, 480);
        let scene = Scene::new("lab", Marker::default(), Marker::default());

        renderer.set_scene(&scene);
        renderer.render(&scene.camera);
        renderer.render(&scene.camera);

        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.scene_name(), Some("lab"));
        assert_eq!(renderer.last_camera(), Some(&scene.camera));
    }
}
