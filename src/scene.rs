use glam::DVec2;
use log::debug;
use rand::Rng;

use crate::config::{DemoConfig, Variant};
use crate::frame::Frame;
use crate::input::InputState;
use crate::polar::Orbit;
use crate::polygon::{decorative_rays, generate_unit_vertices, outline, translate_to_screen};
use crate::starfield::Starfield;

const CHARACTER_SIDES: usize = 12;
const CHARACTER_SIZE: f64 = 6.;
const PATH_SIDES: usize = 64;

/// All state owned by the frame loop.
pub struct Scene {
    pub config: DemoConfig,
    pub orbit: Orbit,
    pub center: DVec2,
    pub starfield: Option<Starfield>,
    polygon: Vec<DVec2>,
    marker: Vec<DVec2>,
    path: Vec<DVec2>,
}

impl Scene {
    pub fn new<R: Rng>(config: DemoConfig, rng: &mut R) -> Self {
        let starfield = match config.variant {
            Variant::Starfield => Some(Starfield::new(
                config.star_count,
                DVec2::new(config.width as f64, config.height as f64),
                config.star_max_speed,
                rng,
            )),
            Variant::Octagon => None,
        };

        Self {
            orbit: Orbit::default(),
            center: config.window_center(),
            starfield,
            polygon: generate_unit_vertices(config.polygon_sides),
            marker: generate_unit_vertices(CHARACTER_SIDES),
            path: generate_unit_vertices(PATH_SIDES),
            config,
        }
    }

    pub fn update(&mut self, elapsed: f64, input: &InputState) {
        assert!(
            elapsed.is_finite() && elapsed >= 0.,
            "elapsed time must be non-negative, got {}",
            elapsed
        );

        let turn = input.orbit_direction();
        if turn != 0. {
            self.orbit.move_by(turn * self.config.orbit_speed * elapsed);
        }

        self.center += input.center_direction() * self.config.center_speed * elapsed;

        if let Some(starfield) = self.starfield.as_mut() {
            starfield.update(elapsed);
        }
    }

    pub fn relocate_center(&mut self, center: DVec2) {
        debug!("Field center moved to {:?}", center);
        self.center = center;
    }

    pub fn character_position(&self) -> DVec2 {
        self.orbit
            .screen_position(self.center, self.config.orbit_radius)
    }

    pub fn frame(&self) -> Frame {
        let config = &self.config;
        let mut frame = Frame::new();

        if let Some(starfield) = &self.starfield {
            for star in starfield.points() {
                frame.point(star, config.star_color);
            }
        }

        if config.show_orbit_path {
            let path = translate_to_screen(&self.path, self.center, config.orbit_radius);
            frame.extend_lines(outline(&path, config.path_color));
        }

        if config.variant == Variant::Octagon {
            let polygon = translate_to_screen(&self.polygon, self.center, config.polygon_offset);
            frame.extend_lines(outline(&polygon, config.polygon_color));
            frame.extend_lines(decorative_rays(&polygon, &config.rays, config.ray_color));
        }

        let character = self.character_position();
        let marker = translate_to_screen(&self.marker, character, CHARACTER_SIZE);
        frame.extend_lines(outline(&marker, config.character_color));
        frame.point(character, config.character_color);

        frame
    }
}
