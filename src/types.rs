use std::fmt;
use std::ops::{Add, Deref, Neg, Sub};

use crate::constants::CHECKPOINT_RADIUS;

/// Integer course coordinates, as reported by the referee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Multiplies both coordinates and truncates toward zero.
    pub fn scale(&self, factor: f64) -> Self {
        Point::new(
            (self.x as f64 * factor) as i32,
            (self.y as f64 * factor) as i32,
        )
    }

    pub fn magnitude(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other - *self).magnitude()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Polar view over an integer point. Angles are in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector {
    point: Point,
}

impl Vector {
    pub fn new(point: Point) -> Self {
        Vector { point }
    }

    /// Cartesian coordinates are truncated, so the round trip is lossy.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let radians = angle.to_radians();
        Vector::new(Point::new(
            (radians.cos() * magnitude) as i32,
            (radians.sin() * magnitude) as i32,
        ))
    }

    pub fn magnitude(&self) -> f64 {
        self.point.magnitude()
    }

    /// In (-180, 180].
    pub fn angle(&self) -> f64 {
        (self.point.y as f64).atan2(self.point.x as f64).to_degrees()
    }

    /// Same direction as `angle`, normalised to [0, 360).
    pub fn heading(&self) -> f64 {
        self.angle().rem_euclid(360.0)
    }

    pub fn to_point(&self) -> Point {
        self.point
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Vector::new(point)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}°", self.magnitude() as i32, self.angle() as i32)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkpoint {
    point: Point,
}

impl Checkpoint {
    pub const RADIUS: f64 = CHECKPOINT_RADIUS;

    pub fn new(x: i32, y: i32) -> Self {
        Checkpoint { point: Point::new(x, y) }
    }

    pub fn contains(&self, position: Point) -> bool {
        self.point.distance(position) <= Self::RADIUS
    }
}

impl Deref for Checkpoint {
    type Target = Point;

    fn deref(&self) -> &Point {
        &self.point
    }
}

impl From<Point> for Checkpoint {
    fn from(point: Point) -> Self {
        Checkpoint { point }
    }
}

impl From<Checkpoint> for Point {
    fn from(checkpoint: Checkpoint) -> Self {
        checkpoint.point
    }
}

impl Sub<Point> for Checkpoint {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.point - rhs
    }
}

impl Add<Point> for Checkpoint {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.point + rhs
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.point.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_point(rng: &mut impl Rng) -> Point {
        Point::new(rng.gen_range(-20_000..20_000), rng.gen_range(-20_000..20_000))
    }

    #[test]
    fn subtract_undoes_add() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert_eq!((a + b) - b, a);
        }
    }

    #[test]
    fn unit_scale_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = random_point(&mut rng);
            assert_eq!(p.scale(1.0), p);
        }
    }

    #[test]
    fn scale_truncates_toward_zero() {
        assert_eq!(Point::new(100, 0).scale(0.85), Point::new(85, 0));
        assert_eq!(Point::new(7, -7).scale(0.85), Point::new(5, -5));
        assert_eq!(Point::new(-3, 3).scale(0.5), Point::new(-1, 1));
    }

    #[test]
    fn negate_flips_both_coordinates() {
        assert_eq!(-Point::new(3, -4), Point::new(-3, 4));
        assert_eq!(Point::new(3, -4) + -Point::new(3, -4), Point::default());
    }

    #[test]
    fn polar_round_trip_within_truncation() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let magnitude = rng.gen_range(1_000.0..20_000.0);
            let angle = rng.gen_range(0.0..360.0);
            let vector = Vector::from_polar(magnitude, angle);

            assert!((vector.magnitude() - magnitude).abs() < 1.5);
            let drift = (vector.heading() - angle).abs();
            assert!(drift.min(360.0 - drift) < 0.2, "angle {} came back as {}", angle, vector.heading());
        }
    }

    #[test]
    fn from_polar_truncates_components() {
        assert_eq!(Vector::from_polar(1000.0, 0.0).to_point(), Point::new(1000, 0));
        assert_eq!(Vector::from_polar(10.9, 0.0).to_point(), Point::new(10, 0));
        assert_eq!(Vector::from_polar(10.5, 180.0).to_point(), Point::new(-10, 0));
        assert_eq!(Vector::from_polar(10.0, 90.0).to_point(), Point::new(0, 10));
        assert_eq!(Vector::from_polar(0.0, 123.0).to_point(), Point::default());
    }

    #[test]
    fn angle_and_heading() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        let down = Vector::new(Point::new(0, -10));
        assert!(close(down.angle(), -90.0));
        assert!(close(down.heading(), 270.0));
        assert!(close(Vector::new(Point::new(-5, 0)).angle(), 180.0));
        assert_eq!(Vector::default().magnitude(), 0.0);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Point::new(-12, 40).to_string(), "-12 40");
        assert_eq!(Vector::new(Point::new(3, 4)).to_string(), "5 53°");
        assert_eq!(Checkpoint::new(1000, 0).to_string(), "1000 0");
    }

    #[test]
    fn checkpoint_behaves_as_point() {
        let checkpoint = Checkpoint::new(1000, 200);
        assert_eq!(checkpoint - Point::new(255, 0), Point::new(745, 200));
        assert_eq!(checkpoint + Point::new(1, 1), Point::new(1001, 201));
        assert_eq!(checkpoint.x, 1000);
        assert_eq!(Point::from(checkpoint), Point::new(1000, 200));
    }

    #[test]
    fn checkpoint_capture_radius_is_inclusive() {
        let checkpoint = Checkpoint::new(0, 0);
        assert!(checkpoint.contains(Point::new(600, 0)));
        assert!(checkpoint.contains(Point::new(360, 480)));
        assert!(!checkpoint.contains(Point::new(601, 0)));
    }
}
