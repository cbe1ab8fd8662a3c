/// Where the current image is drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySurface {
    /// Screen rect the image is painted into.
    pub rect: egui::Rect,
    /// Size of the downscaled image in display pixels.
    pub size: egui::Vec2,
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Downscaled image size, in display pixels.
    pub display_size: Option<[usize; 2]>,
    /// Ordinal of the image the texture was built from.
    pub shown: Option<usize>,
    /// Set by the viewport panel each frame.
    pub surface: Option<DisplaySurface>,
}

impl ViewportState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.display_size = None;
        self.shown = None;
        self.surface = None;
    }
}
