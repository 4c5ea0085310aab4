use glium::implement_vertex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position2 {
    pub position: [f32; 2],
}

impl Position2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

implement_vertex!(Position2, position);

/// Wound clockwise. Drawn without face culling.
pub const TRIANGLE: [Position2; 3] = [
    Position2::new(-0.5, -0.5),
    Position2::new(0.0, 0.5),
    Position2::new(0.5, -0.5),
];
