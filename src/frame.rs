use glam::DVec2;

pub type Color = [f32; 4];

pub const WHITE: Color = [1., 1., 1., 1.];
pub const GREY: Color = [0.35, 0.35, 0.4, 1.];
pub const YELLOW: Color = [1., 0.85, 0.2, 1.];
pub const CYAN: Color = [0.3, 0.85, 1., 1.];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
    pub color: Color,
}

impl Segment {
    pub fn new(from: DVec2, to: DVec2, color: Color) -> Self {
        Self { from, to, color }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: DVec2,
    pub color: Color,
}

/// Everything one tick wants on screen, in y-down pixel coordinates.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub points: Vec<Point>,
    pub lines: Vec<Segment>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(&mut self, pos: DVec2, color: Color) {
        self.points.push(Point { pos, color });
    }

    pub fn extend_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = Segment>,
    {
        self.lines.extend(lines);
    }
}
