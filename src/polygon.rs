use std::collections::BTreeMap;
use std::f64::consts::PI;

use glam::DVec2;

use crate::frame::{Color, Segment};

/// Rotation applied to every vertex so a flat edge of the octagon faces up.
pub const VERTEX_SHIFT: f64 = PI / 180. * 45. * 0.5;

/// Hand-tuned ray offsets for the octagon, keyed by vertex index.
const OCTAGON_RAYS: [(usize, (f64, f64)); 8] = [
    (0, (18., 8.)),
    (1, (8., 18.)),
    (2, (-8., 18.)),
    (3, (-18., 8.)),
    (4, (-18., -8.)),
    (5, (-8., -18.)),
    (6, (8., -18.)),
    (7, (18., -8.)),
];

/// Unit circle corners of a regular `n`-gon, in generation order.
pub fn generate_unit_vertices(n: usize) -> Vec<DVec2> {
    assert!(n >= 3, "a polygon needs at least 3 sides, got {}", n);
    let step = 2. * PI / n as f64;
    (0..n)
        .map(|i| {
            let (sin, cos) = (i as f64 * step + VERTEX_SHIFT).sin_cos();
            DVec2::new(cos, sin)
        })
        .collect()
}

pub fn translate_to_screen(unit_vertices: &[DVec2], center: DVec2, offset: f64) -> Vec<DVec2> {
    unit_vertices.iter().map(|v| *v * offset + center).collect()
}

/// Closed outline: every vertex joins the next and the last joins vertex 0.
pub fn outline(points: &[DVec2], color: Color) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(from, to)| Segment::new(*from, *to, color))
        .collect()
}

/// Per-vertex decoration offsets. Vertices without an entry get no ray.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RayTable(pub BTreeMap<usize, DVec2>);

impl RayTable {
    pub fn octagon() -> Self {
        Self(
            OCTAGON_RAYS
                .iter()
                .map(|(i, (dx, dy))| (*i, DVec2::new(*dx, *dy)))
                .collect(),
        )
    }

    pub fn max_index(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }
}

pub fn decorative_rays(points: &[DVec2], table: &RayTable, color: Color) -> Vec<Segment> {
    table
        .0
        .iter()
        .filter_map(|(i, delta)| points.get(*i).map(|p| Segment::new(*p, *p + *delta, color)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::WHITE;

    #[test]
    fn test_octagon_vertices() {
        let vertices = generate_unit_vertices(8);
        assert_eq!(vertices.len(), 8);

        for (i, v) in vertices.iter().enumerate() {
            assert!((v.length() - 1.).abs() < 1e-12);
            let expected = (i as f64 * 45. + 22.5).to_radians();
            assert!((v.x - expected.cos()).abs() < 1e-12);
            assert!((v.y - expected.sin()).abs() < 1e-12);
        }

        for pair in vertices.windows(2) {
            let angle = pair[0].angle_between(pair[1]);
            assert!((angle - PI / 4.).abs() < 1e-9);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        assert_eq!(generate_unit_vertices(5), generate_unit_vertices(5));
    }

    #[test]
    #[should_panic]
    fn test_degenerate_polygon_panics() {
        generate_unit_vertices(2);
    }

    #[test]
    fn test_translated_octagon_radius() {
        let center = DVec2::new(320., 320.);
        let points = translate_to_screen(&generate_unit_vertices(8), center, 40.);
        assert_eq!(points.len(), 8);
        for p in points {
            assert!((p.distance(center) - 40.).abs() < 1e-9);
        }
    }

    #[test]
    fn test_translate_is_affine() {
        let unit = generate_unit_vertices(8);
        let center = DVec2::new(100., 50.);

        let base = translate_to_screen(&unit, center, 10.);
        let scaled = translate_to_screen(&unit, center, 30.);
        for (b, s) in base.iter().zip(scaled.iter()) {
            assert!(((*s - center) - (*b - center) * 3.).length() < 1e-9);
        }

        let shift = DVec2::new(-7., 12.5);
        let moved = translate_to_screen(&unit, center + shift, 10.);
        for (b, m) in base.iter().zip(moved.iter()) {
            assert!((*m - *b - shift).length() < 1e-9);
        }
    }

    #[test]
    fn test_outline_closes_loop() {
        let points = translate_to_screen(&generate_unit_vertices(8), DVec2::ZERO, 1.);
        let lines = outline(&points, WHITE);
        assert_eq!(lines.len(), 8);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.from, points[i]);
            assert_eq!(line.to, points[(i + 1) % 8]);
        }
    }

    #[test]
    fn test_rays_follow_table() {
        let points = translate_to_screen(&generate_unit_vertices(8), DVec2::new(5., 5.), 40.);
        let mut table = RayTable::default();
        table.0.insert(3, DVec2::new(1., -2.));
        table.0.insert(20, DVec2::new(9., 9.));

        let rays = decorative_rays(&points, &table, WHITE);
        assert_eq!(rays.len(), 1);
        assert_eq!(rays[0].from, points[3]);
        assert_eq!(rays[0].to, points[3] + DVec2::new(1., -2.));
    }

    #[test]
    fn test_octagon_table_covers_every_vertex() {
        let table = RayTable::octagon();
        assert_eq!(table.0.len(), 8);
        assert_eq!(table.max_index(), Some(7));
    }
}
