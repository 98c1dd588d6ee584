use serde::{Deserialize, Serialize};

/// 2D point with integer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create the origin point
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Linear interpolation towards `target`
    ///
    /// Coordinates are truncated towards zero, so intermediate points may
    /// fall short of the exact line. `progress == 1.0` always lands on
    /// `target`, whatever the distance between the two points.
    pub fn lerp(self, target: Self, progress: f64) -> Self {
        let lerp = |from: i32, to: i32| {
            (f64::from(from) + (f64::from(to) - f64::from(from)) * progress) as i32
        };
        Self {
            x: lerp(self.x, target.x),
            y: lerp(self.y, target.y),
        }
    }
}

/// Width and height of a diagram node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn lerp_truncates_towards_zero() {
        let from = Point::zero();
        let to = Point::new(7, -7);

        assert_eq!(from.lerp(to, 0.5), Point::new(3, -3));
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
    }

    #[test]
    fn lerp_between_arbitrary_points() {
        let from = Point::new(100, 40);
        let to = Point::new(0, 90);

        assert_eq!(from.lerp(to, 0.25), Point::new(75, 52));
    }

    #[test]
    fn lerp_across_the_whole_range() {
        let from = Point::new(i32::MIN + 10, i32::MAX);
        let to = Point::new(i32::MAX - 200, i32::MIN);

        assert_eq!(from.lerp(to, 0.5), Point::new(-95, 0));
        assert_eq!(from.lerp(to, 1.0), to);
    }
}
