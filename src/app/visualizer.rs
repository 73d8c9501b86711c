use rand::Rng;

/// Shapes drawn per frame.
pub const SHAPES_PER_FRAME: usize = 5;
/// Side length of the square canvas the shapes live on.
pub const CANVAS_EXTENT: f64 = 100.0;
/// Upper bound for a shape's radius / half side.
pub const MAX_SHAPE_SIZE: f64 = 25.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Circle,
    Square,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: (u8, u8, u8),
}

impl Shape {
    fn random<R: Rng>(rng: &mut R) -> Self {
        let kind = if rng.random_bool(0.5) {
            ShapeKind::Circle
        } else {
            ShapeKind::Square
        };
        Self {
            kind,
            x: rng.random_range(0.0..CANVAS_EXTENT),
            y: rng.random_range(0.0..CANVAS_EXTENT),
            size: rng.random_range(1.0..MAX_SHAPE_SIZE),
            color: (rng.random(), rng.random(), rng.random()),
        }
    }
}

/// The current visualizer frame.
#[derive(Clone, Debug, Default)]
pub struct Visualizer {
    shapes: Vec<Shape>,
    frames: u64,
}

impl Visualizer {
    /// Replace the frame with a fresh set of random shapes.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.shapes = (0..SHAPES_PER_FRAME).map(|_| Shape::random(rng)).collect();
        self.frames += 1;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of frames generated so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
