use failure::{format_err, Error};
use glam::DVec2;

use crate::frame::{Color, CYAN, GREY, WHITE, YELLOW};
use crate::polygon::RayTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Drifting stars around the orbiting character.
    Starfield,
    /// Static octagon outline with decorative rays.
    Octagon,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub variant: Variant,
    pub title: &'static str,
    pub width: u32,
    pub height: u32,

    pub orbit_radius: f64,
    /// Degrees per second while an orbit key is held.
    pub orbit_speed: f64,
    /// Pixels per second while a center key is held.
    pub center_speed: f64,
    pub show_orbit_path: bool,

    pub polygon_sides: usize,
    pub polygon_offset: f64,
    pub rays: RayTable,

    pub star_count: usize,
    pub star_max_speed: f64,

    pub background: Color,
    pub character_color: Color,
    pub polygon_color: Color,
    pub ray_color: Color,
    pub star_color: Color,
    pub path_color: Color,
}

impl DemoConfig {
    pub fn starfield() -> Self {
        Self {
            variant: Variant::Starfield,
            title: "Orbit - Starfield",
            width: 640,
            height: 480,
            orbit_radius: 60.,
            orbit_speed: 180.,
            center_speed: 120.,
            show_orbit_path: true,
            polygon_sides: 8,
            polygon_offset: 40.,
            rays: RayTable::default(),
            star_count: 150,
            star_max_speed: 25.,
            background: [0., 0., 0.04, 1.],
            character_color: YELLOW,
            polygon_color: WHITE,
            ray_color: CYAN,
            star_color: WHITE,
            path_color: GREY,
        }
    }

    pub fn octagon() -> Self {
        Self {
            variant: Variant::Octagon,
            title: "Orbit - Octagon",
            width: 640,
            height: 640,
            show_orbit_path: false,
            rays: RayTable::octagon(),
            star_count: 0,
            ..Self::starfield()
        }
    }

    pub fn window_center(&self) -> DVec2 {
        DVec2::new(self.width as f64 / 2., self.height as f64 / 2.)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(format_err!(
                "window must not be empty, got {}x{}",
                self.width,
                self.height
            ));
        }
        if !(self.orbit_radius.is_finite() && self.orbit_radius > 0.) {
            return Err(format_err!("orbit radius must be positive, got {}", self.orbit_radius));
        }
        if !self.orbit_speed.is_finite() || !self.center_speed.is_finite() {
            return Err(format_err!("speeds must be finite"));
        }
        if !(self.star_max_speed.is_finite() && self.star_max_speed >= 0.) {
            return Err(format_err!(
                "star speed must be finite and non-negative, got {}",
                self.star_max_speed
            ));
        }
        if self.polygon_sides < 3 {
            return Err(format_err!(
                "polygon needs at least 3 sides, got {}",
                self.polygon_sides
            ));
        }
        if !(self.polygon_offset.is_finite() && self.polygon_offset > 0.) {
            return Err(format_err!(
                "polygon offset must be positive, got {}",
                self.polygon_offset
            ));
        }
        if let Some(index) = self.rays.max_index() {
            if index >= self.polygon_sides {
                return Err(format_err!(
                    "ray index {} out of range for {} sides",
                    index,
                    self.polygon_sides
                ));
            }
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::octagon()
    }
}
