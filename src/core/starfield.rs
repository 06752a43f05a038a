//! Drifting star particles behind the landing section.
//!
//! Stars drift rightwards at their own small speed.  One that leaves the
//! right edge is replaced by a fresh star entering from just off the left.

use rand::Rng;

/// Number of colour slots a star can pick from (see `ui::theme::STAR_COLORS`).
pub const PALETTE_LEN: usize = 6;

/// Column at which replacement stars enter.
const SPAWN_X: f64 = -5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// `[0, 1.1)`; decides the glyph.
    pub radius: f64,
    /// Index into the palette.
    pub color: usize,
    /// Columns per frame, `[0, 0.3)`.
    pub dx: f64,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    width: f64,
    height: f64,
    count: usize,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(width: u16, height: u16, count: usize) -> Self {
        let mut field = Self {
            width: f64::from(width),
            height: f64::from(height),
            count,
            stars: Vec::with_capacity(count),
        };
        field.seed();
        field
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Resize the field.  All stars are discarded and reseeded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = f64::from(width);
        self.height = f64::from(height);
        self.seed();
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        let mut rng = rand::rng();
        let (width, height) = (self.width, self.height);
        for star in &mut self.stars {
            if star.x - star.radius > width {
                *star = Self::spawn(&mut rng, Some(SPAWN_X), height, width);
            }
            star.x += star.dx;
        }
    }

    fn seed(&mut self) {
        self.stars.clear();
        if self.width < 1.0 || self.height < 1.0 {
            return;
        }
        let mut rng = rand::rng();
        for _ in 0..self.count {
            self.stars
                .push(Self::spawn(&mut rng, None, self.height, self.width));
        }
    }

    fn spawn(rng: &mut impl Rng, x: Option<f64>, height: f64, width: f64) -> Star {
        Star {
            x: x.unwrap_or_else(|| rng.random_range(0.0..width.max(1.0))),
            y: rng.random_range(0.0..height.max(1.0)),
            radius: rng.random::<f64>() * 1.1,
            color: rng.random_range(0..PALETTE_LEN),
            dx: rng.random::<f64>() * 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_inside_the_field() {
        let field = Starfield::new(80, 24, 50);
        assert_eq!(field.stars().len(), 50);
        for star in field.stars() {
            assert!((0.0..80.0).contains(&star.x));
            assert!((0.0..24.0).contains(&star.y));
            assert!(star.radius < 1.1);
            assert!(star.dx < 0.3);
            assert!(star.color < PALETTE_LEN);
        }
    }

    #[test]
    fn empty_area_has_no_stars() {
        assert!(Starfield::new(0, 24, 50).stars().is_empty());
    }

    #[test]
    fn drifting_off_screen_respawns_on_the_left() {
        let mut field = Starfield::new(10, 5, 1);
        field.stars[0].x = 20.0;
        field.stars[0].radius = 0.5;
        field.tick();
        assert_eq!(field.stars().len(), 1);
        assert!(field.stars()[0].x < 0.0);
    }

    #[test]
    fn tick_moves_right() {
        let mut field = Starfield::new(40, 10, 20);
        let before: Vec<f64> = field.stars().iter().map(|s| s.x).collect();
        field.tick();
        for (star, x) in field.stars().iter().zip(before) {
            assert!(star.x >= x);
        }
    }

    #[test]
    fn resize_reseeds() {
        let mut field = Starfield::new(40, 10, 20);
        field.resize(5, 3);
        assert_eq!(field.stars().len(), 20);
        assert!(field.stars().iter().all(|s| s.x < 5.0 && s.y < 3.0));
    }
}
