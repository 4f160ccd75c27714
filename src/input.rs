use glam::DVec2;
use winit::event::{ElementState, VirtualKeyCode};

pub struct InputState {
    /* A scalar that is 1. if the key is down or 0. if the key is not */
    pub left_down: f64,
    pub right_down: f64,
    pub up_down: f64,
    pub down_down: f64,
    pub w_down: f64,
    pub a_down: f64,
    pub s_down: f64,
    pub d_down: f64,

    pub cursor: Option<DVec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            left_down: 0.,
            right_down: 0.,
            up_down: 0.,
            down_down: 0.,
            w_down: 0.,
            a_down: 0.,
            s_down: 0.,
            d_down: 0.,
            cursor: None,
        }
    }

    pub fn key(&mut self, code: VirtualKeyCode, state: ElementState) {
        use VirtualKeyCode::*;
        let down = match state {
            ElementState::Pressed => 1.,
            ElementState::Released => 0.,
        };
        match code {
            Left => self.left_down = down,
            Right => self.right_down = down,
            Up => self.up_down = down,
            Down => self.down_down = down,
            W => self.w_down = down,
            A => self.a_down = down,
            S => self.s_down = down,
            D => self.d_down = down,
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some(DVec2::new(x, y));
    }

    /// -1, 0 or 1 depending on which orbit keys are held.
    pub fn orbit_direction(&self) -> f64 {
        self.right_down - self.left_down
    }

    /// Direction the field center should travel, y-down. Up/Down share the
    /// vertical axis with W/S.
    pub fn center_direction(&self) -> DVec2 {
        let up = self.w_down.max(self.up_down);
        let down = self.s_down.max(self.down_down);
        DVec2::new(self.d_down - self.a_down, down - up)
    }

    pub fn release_all(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::new()
        };
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementState::*;

    #[test]
    fn test_orbit_direction() {
        let mut input = InputState::new();
        assert_eq!(input.orbit_direction(), 0.);

        input.key(VirtualKeyCode::Right, Pressed);
        assert_eq!(input.orbit_direction(), 1.);

        input.key(VirtualKeyCode::Left, Pressed);
        assert_eq!(input.orbit_direction(), 0.);

        input.key(VirtualKeyCode::Right, Released);
        assert_eq!(input.orbit_direction(), -1.);
    }

    #[test]
    fn test_center_direction_is_y_down() {
        let mut input = InputState::new();
        input.key(VirtualKeyCode::W, Pressed);
        input.key(VirtualKeyCode::D, Pressed);
        assert_eq!(input.center_direction(), DVec2::new(1., -1.));
    }

    #[test]
    fn test_vertical_arrows_move_center() {
        let mut input = InputState::new();
        input.key(VirtualKeyCode::Up, Pressed);
        assert_eq!(input.center_direction(), DVec2::new(0., -1.));

        input.key(VirtualKeyCode::W, Pressed);
        assert_eq!(input.center_direction(), DVec2::new(0., -1.));

        input.key(VirtualKeyCode::Down, Pressed);
        assert_eq!(input.center_direction(), DVec2::ZERO);

        input.key(VirtualKeyCode::Up, Released);
        input.key(VirtualKeyCode::W, Released);
        assert_eq!(input.center_direction(), DVec2::new(0., 1.));
        assert_eq!(input.orbit_direction(), 0.);
    }

    #[test]
    fn test_release_all_keeps_cursor() {
        let mut input = InputState::new();
        input.key(VirtualKeyCode::A, Pressed);
        input.cursor_moved(12., 34.);
        input.release_all();
        assert_eq!(input.center_direction(), DVec2::ZERO);
        assert_eq!(input.cursor, Some(DVec2::new(12., 34.)));
    }
}
