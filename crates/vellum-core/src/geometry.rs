use std::ops::{Add, Mul, Sub};

use glam::Vec2;

/// An axis-aligned rectangle defined by its top-left corner and its size.
///
/// Width and height may be negative; containment and intersection tests
/// normalize the corners first.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

/// Rectangle with `f32` coordinates.
pub type FloatRect = Rect<f32>;
/// Rectangle with `i32` coordinates.
pub type IntRect = Rect<i32>;

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect { x, y, width, height }
    }

    pub fn from_position_size(position: Pos<T>, size: Size<T>) -> Self {
        Rect {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }
}

impl<T> Rect<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    pub fn position(&self) -> Pos<T> {
        Pos { x: self.x, y: self.y }
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> T {
        self.x + self.width
    }

    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// `(min_x, min_y, max_x, max_y)` with negative sizes accounted for.
    fn normalized(&self) -> (T, T, T, T) {
        let (x0, x1) = min_max(self.x, self.right());
        let (y0, y1) = min_max(self.y, self.bottom());
        (x0, y0, x1, y1)
    }

    /// Whether the point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are not.
    pub fn contains(&self, x: T, y: T) -> bool {
        let (min_x, min_y, max_x, max_y) = self.normalized();
        x >= min_x && x < max_x && y >= min_y && y < max_y
    }

    /// The overlapping area of two rectangles, if any.
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let (a_min_x, a_min_y, a_max_x, a_max_y) = self.normalized();
        let (b_min_x, b_min_y, b_max_x, b_max_y) = other.normalized();

        let left = max(a_min_x, b_min_x);
        let top = max(a_min_y, b_min_y);
        let right = min(a_max_x, b_max_x);
        let bottom = min(a_max_y, b_max_y);

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    pub fn intersects(&self, other: &Rect<T>) -> bool {
        self.intersection(other).is_some()
    }
}

impl FloatRect {
    /// Axis-aligned bounding box of a set of points.
    ///
    /// Returns an empty rectangle at the origin when there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return FloatRect::default();
        };

        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        FloatRect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point.x, point.y)
    }
}

impl From<IntRect> for FloatRect {
    fn from(r: IntRect) -> Self {
        FloatRect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

fn min_max<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let r = IntRect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(5, 10));
    }

    #[test]
    fn test_contains_negative_size() {
        let r = FloatRect::new(10.0, 10.0, -10.0, -10.0);
        assert!(r.contains(5.0, 5.0));
        assert!(!r.contains(10.0, 10.0));
    }

    #[test]
    fn test_intersection() {
        let a = IntRect::new(0, 0, 10, 10);
        let b = IntRect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(IntRect::new(5, 5, 5, 5)));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = FloatRect::new(0.0, 0.0, 1.0, 1.0);
        let b = FloatRect::new(1.0, 0.0, 1.0, 1.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_from_points() {
        let r = FloatRect::from_points([
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.0, 5.0),
            Vec2::new(4.0, -1.0),
        ]);
        assert_eq!(r, FloatRect::new(-3.0, -1.0, 7.0, 6.0));
        assert_eq!(FloatRect::from_points(std::iter::empty()), FloatRect::default());
    }

    #[test]
    fn test_size_mul() {
        assert_eq!(Size::new(2, 3) * 2, Size::new(4, 6));
    }
}
