// src/models/point.rs
//
// Generic 2D point/vector used by the walk generators and the camera

use nannou::prelude::Vec2;
use std::hash::{BuildHasherDefault, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

pub const fn pt<T>(x: T, y: T) -> Point<T> {
    Point { x, y }
}

impl<T> Point<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    /// Multiplies both components by `factor`.
    pub fn scale(self, factor: T) -> Self {
        pt(self.x * factor, self.y * factor)
    }

    /// Component-wise product, same as `self * other`.
    pub fn component_mul(self, other: Self) -> Self {
        pt(self.x * other.x, self.y * other.y)
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl Point<f32> {
    /// Euclidean length, taken from the dot product with itself.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn normalized(self) -> Self {
        self.scale(1.0 / self.length())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point<i32>> for Point<f32> {
    fn from(p: Point<i32>) -> Self {
        pt(p.x as f32, p.y as f32)
    }
}

impl From<Point<f32>> for Vec2 {
    fn from(p: Point<f32>) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Point<f32> {
    fn from(v: Vec2) -> Self {
        pt(v.x, v.y)
    }
}

impl<T: Copy + Add<Output = T>> Add for Point<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        pt(self.x + other.x, self.y + other.y)
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Point<T> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Point<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        pt(self.x - other.x, self.y - other.y)
    }
}

// point * point is component-wise
impl<T: Copy + Mul<Output = T>> Mul for Point<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        pt(self.x * other.x, self.y * other.y)
    }
}

impl Mul<i32> for Point<i32> {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        pt(self.x * factor, self.y * factor)
    }
}

impl Mul<f32> for Point<f32> {
    type Output = Self;

    fn mul(self, factor: f32) -> Self {
        pt(self.x * factor, self.y * factor)
    }
}

impl MulAssign<f32> for Point<f32> {
    fn mul_assign(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
    }
}

/************************* Combining hash ********************/

const GOLDEN_RATIO: u64 = 0x9e37_79b9;

/// Order-sensitive combining hasher for integer points.
///
/// Each written integer is sign-extended to 64 bits and folded into the seed
/// with `seed ^= v + 0x9e3779b9 + (seed << 6) + (seed >> 2)`, so `(x, y)` and
/// `(y, x)` land in different buckets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombineHasher {
    seed: u64,
}

impl CombineHasher {
    fn combine(&mut self, value: u64) {
        self.seed ^= value
            .wrapping_add(GOLDEN_RATIO)
            .wrapping_add(self.seed << 6)
            .wrapping_add(self.seed >> 2);
    }
}

impl Hasher for CombineHasher {
    fn finish(&self) -> u64 {
        self.seed
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.combine(u64::from(b));
        }
    }

    fn write_i32(&mut self, value: i32) {
        self.combine(i64::from(value) as u64);
    }

    fn write_i64(&mut self, value: i64) {
        self.combine(value as u64);
    }

    fn write_u32(&mut self, value: u32) {
        self.combine(u64::from(value));
    }

    fn write_u64(&mut self, value: u64) {
        self.combine(value);
    }
}

pub type BuildCombineHasher = BuildHasherDefault<CombineHasher>;

impl Point<i32> {
    /// The combined hash of both components, x first.
    pub fn combined_hash(&self) -> u64 {
        let mut hasher = CombineHasher::default();
        hasher.write_i32(self.x);
        hasher.write_i32(self.y);
        hasher.finish()
    }
}
