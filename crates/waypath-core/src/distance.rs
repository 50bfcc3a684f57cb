use crate::geom::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Round a non-negative distance to one decimal place.
#[inline]
pub fn round_tenth(d: f64) -> f64 {
    (d * 10.0).round() / 10.0
}

/// A distance rounded to one decimal, expressed in whole tenths.
///
/// Sums of tenths stay exact, unlike sums of `f64` tenths.
#[inline]
pub fn tenths(d: f64) -> u64 {
    (d * 10.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(4, -3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
    }

    #[test]
    fn euclidean_three_four_five() {
        assert_eq!(euclidean(Point::new(1, 1), Point::new(4, 5)), 5.0);
        assert_eq!(euclidean(Point::new(5, 5), Point::new(5, 8)), 3.0);
    }

    #[test]
    fn rounding_to_tenths() {
        let d = euclidean(Point::new(0, 0), Point::new(1, 1));
        assert_eq!(round_tenth(d), 1.4);
        assert_eq!(tenths(d), 14);
        assert_eq!(round_tenth(2.25), 2.3);
        assert_eq!(tenths(0.0), 0);
    }
}
