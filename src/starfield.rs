use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    pub velocity: DVec2,
}

pub struct Starfield {
    pub bounds: DVec2,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng>(count: usize, bounds: DVec2, max_speed: f64, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: DVec2::new(rng.gen::<f64>() * bounds.x, rng.gen::<f64>() * bounds.y),
                velocity: DVec2::new(
                    rng.gen_range(-max_speed..=max_speed),
                    rng.gen_range(-max_speed..=max_speed),
                ),
            })
            .collect();
        Self { bounds, stars }
    }

    pub fn from_stars(stars: Vec<Star>, bounds: DVec2) -> Self {
        Self { bounds, stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn update(&mut self, elapsed: f64) {
        let bounds = self.bounds;
        for star in self.stars.iter_mut() {
            star.pos += star.velocity * elapsed;
            star.pos.x = wrap(star.pos.x, bounds.x);
            star.pos.y = wrap(star.pos.y, bounds.y);
        }
    }

    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.stars.iter().map(|star| star.pos)
    }
}

fn wrap(value: f64, limit: f64) -> f64 {
    let wrapped = value.rem_euclid(limit);
    if wrapped >= limit {
        0.
    } else {
        wrapped + 0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_stars_start_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = DVec2::new(640., 480.);
        let field = Starfield::new(200, bounds, 30., &mut rng);
        assert_eq!(field.len(), 200);
        for p in field.points() {
            assert!(p.x >= 0. && p.x < bounds.x);
            assert!(p.y >= 0. && p.y < bounds.y);
        }
    }

    #[test]
    fn test_stars_drift_and_wrap() {
        let bounds = DVec2::new(100., 50.);
        let mut field = Starfield::from_stars(
            vec![
                Star {
                    pos: DVec2::new(95., 10.),
                    velocity: DVec2::new(10., 0.),
                },
                Star {
                    pos: DVec2::new(5., 5.),
                    velocity: DVec2::new(0., -20.),
                },
            ],
            bounds,
        );

        field.update(1.);
        let points: Vec<_> = field.points().collect();
        assert_eq!(points[0], DVec2::new(5., 10.));
        assert_eq!(points[1], DVec2::new(5., 35.));
    }

    #[test]
    fn test_wrap_folds_rounding_edge() {
        assert_eq!(wrap(-1e-20, 100.), 0.);
        assert!(wrap(-1e-20, 100.).is_sign_positive());
        assert!(wrap(-100., 100.).is_sign_positive());
        assert_eq!(wrap(250., 100.), 50.);
    }

    #[test]
    fn test_seeded_fields_match() {
        let bounds = DVec2::new(640., 480.);
        let a = Starfield::new(10, bounds, 5., &mut StdRng::seed_from_u64(1));
        let b = Starfield::new(10, bounds, 5., &mut StdRng::seed_from_u64(1));
        assert!(a.points().eq(b.points()));
    }
}
