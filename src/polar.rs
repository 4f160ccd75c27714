use glam::DVec2;

const FULL_TURN: f64 = 360.;

/// An angle in degrees that always stays inside `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    position: f64,
}

impl Orbit {
    pub fn new(position: f64) -> Self {
        let mut orbit = Self::default();
        orbit.move_by(position);
        orbit
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Adds `delta` degrees and wraps with a floor-based modulo, so negative
    /// deltas land on the far side of zero instead of going negative.
    pub fn move_by(&mut self, delta: f64) {
        assert!(delta.is_finite(), "orbit delta must be finite, got {}", delta);
        let wrapped = (self.position + delta).rem_euclid(FULL_TURN);
        // rem_euclid can round up to the modulus for tiny negative inputs,
        // and yields -0.0 for negative multiples of a full turn
        self.position = if wrapped >= FULL_TURN { 0. } else { wrapped + 0. };
    }

    /// Offset from the orbit center. Sine drives x and cosine drives y, so
    /// 0 degrees is `(0, radius)`.
    pub fn to_cartesian(&self, radius: f64) -> DVec2 {
        let (sin, cos) = self.position.to_radians().sin_cos();
        DVec2::new(radius * sin, radius * cos)
    }

    /// Where the character sits on a y-down surface. The cartesian y is
    /// flipped so 0 degrees points up.
    pub fn screen_position(&self, center: DVec2, radius: f64) -> DVec2 {
        let offset = self.to_cartesian(radius);
        DVec2::new(center.x + offset.x, center.y - offset.y)
    }
}
