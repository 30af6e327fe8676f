// View pose: position on the map plane, eye height and heading in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub heading: f64,
}

impl Camera {
    pub fn new(x: f64, y: f64, height: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            height,
            heading,
        }
    }

    // Same position, different heading (turntable frames)
    pub fn with_heading(self, heading: f64) -> Self {
        Self { heading, ..self }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0, 120.0, 0.0)
    }
}
