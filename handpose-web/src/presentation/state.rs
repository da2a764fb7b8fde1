//! Presentation state snapshot read by the renderer

/// AR asset that a "show" gesture reveals
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Cube,
    Video,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Video => "video",
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Shape::Cube => 0,
            Shape::Video => 1,
        }
    }
}

/// Derived view of the visibility flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    None,
    CubeVisible,
    VideoVisible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationState {
    pub selected: Shape,
    pub cube_visible: bool,
    pub video_visible: bool,
    /// Render scale; 0 suppresses drawing
    pub scale: f32,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            selected: Shape::Cube,
            cube_visible: false,
            video_visible: false,
            scale: 0.0,
        }
    }
}

impl PresentationState {
    pub fn mode(&self) -> PresentationMode {
        match (self.cube_visible, self.video_visible) {
            (true, _) => PresentationMode::CubeVisible,
            (false, true) => PresentationMode::VideoVisible,
            (false, false) => PresentationMode::None,
        }
    }

    /// Asset currently on screen, if any
    pub fn visible_shape(&self) -> Option<Shape> {
        match self.mode() {
            PresentationMode::CubeVisible => Some(Shape::Cube),
            PresentationMode::VideoVisible => Some(Shape::Video),
            PresentationMode::None => None,
        }
    }
}
