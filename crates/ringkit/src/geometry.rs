use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians on the circle of `radius` around `origin`.
    /// Angle zero points along +x; positive angles turn towards +y.
    pub fn on_circle(origin: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            origin.x + radius * angle.cos(),
            origin.y + radius * angle.sin(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Axis-aligned rectangle. Edges are part of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn centered(center: Point, size: Size) -> Self {
        let (hw, hh) = (size.width / 2.0, size.height / 2.0);
        Self {
            min: Point::new(center.x - hw, center.y - hh),
            max: Point::new(center.x + hw, center.y + hh),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_on_circle_quadrants() {
        let origin = Point::new(10.0, 20.0);
        let cases = vec![
            (0.0, Point::new(15.0, 20.0)),
            (PI / 2.0, Point::new(10.0, 25.0)),
            (PI, Point::new(5.0, 20.0)),
            (3.0 * PI / 2.0, Point::new(10.0, 15.0)),
        ];

        for (angle, expected) in cases {
            let p = Point::on_circle(origin, 5.0, angle);
            assert!(close(p.x, expected.x) && close(p.y, expected.y), "{angle}: {p:?}");
        }
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::centered(Point::new(0.0, 0.0), Size::new(4.0, 2.0));

        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(2.0, 1.0)));
        assert!(bounds.contains(Point::new(-2.0, -1.0)));
        assert!(!bounds.contains(Point::new(2.01, 0.0)));
        assert!(!bounds.contains(Point::new(0.0, -1.5)));
    }

    #[test]
    fn test_point_deserialization() {
        let p: Point = serde_json::from_str(r#"{"x": 1.5, "y": -2}"#).unwrap();
        assert_eq!(p, Point::new(1.5, -2.0));
    }
}
