use crate::math::vec2::Vec2;

/// A circle in table space. Used for ball footprints and pocket mouths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { center, radius }
    }

    /// True when `point` lies strictly closer than `radius + margin` to the centre.
    pub fn contains(&self, point: Vec2, margin: f64) -> bool {
        let reach = self.radius + margin;
        self.center.distance_squared(point) < reach * reach
    }

    /// True when the two circles interpenetrate. Touching circles do not overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.contains(other.center, other.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains_is_strict() {
        let c = Circle::new(Vec2::new(0.0, 0.0), 5.0);
        assert!(c.contains(Vec2::new(4.9, 0.0), 0.0));
        assert!(!c.contains(Vec2::new(5.0, 0.0), 0.0));
        assert!(c.contains(Vec2::new(6.0, 0.0), 1.5));
    }

    #[test]
    fn test_circle_overlaps() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 9.0);
        let touching = Circle::new(Vec2::new(18.0, 0.0), 9.0);
        let overlapping = Circle::new(Vec2::new(17.0, 0.0), 9.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
    }
}
