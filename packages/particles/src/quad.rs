use crate::{Angle, Point};

const NUMBER_OF_POINTS: usize = 4;

/// A closed four-sided shape, used as the render geometry of a particle.
///
/// The points are kept in winding order. A quad built from a rectangle starts at the
/// rectangle's origin and proceeds along the x axis first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quad {
    points: [Point; NUMBER_OF_POINTS],
}

impl Quad {
    /// A quad with all four points at the origin.
    pub const ZERO: Self = Self {
        points: [Point::ZERO; NUMBER_OF_POINTS],
    };

    /// Creates a quad from the four corners of an axis-aligned rectangle.
    #[must_use]
    pub fn from_rect(origin: Point, width: f64, height: f64) -> Self {
        Self {
            points: [
                origin,
                Point::new(origin.x + width, origin.y),
                Point::new(origin.x + width, origin.y + height),
                Point::new(origin.x, origin.y + height),
            ],
        }
    }

    /// Creates an axis-aligned square of the given side length, centered on the origin.
    #[must_use]
    pub fn centered_square(size: f64) -> Self {
        let half = size / -2.0;
        Self::from_rect(Point::new(half, half), size, size)
    }

    /// The four points of the quad.
    #[must_use]
    pub fn points(&self) -> &[Point; NUMBER_OF_POINTS] {
        &self.points
    }

    /// Returns the point at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..4`.
    #[must_use]
    pub fn point(&self, index: usize) -> Point {
        *self
            .points
            .get(index)
            .unwrap_or_else(|| panic!("quad point index {index} out of bounds"))
    }

    /// Replaces the point at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..4`.
    pub fn set_point(&mut self, index: usize, point: Point) {
        *self
            .points
            .get_mut(index)
            .unwrap_or_else(|| panic!("quad point index {index} out of bounds")) = point;
    }

    /// Moves every point by `translation`.
    pub fn translate(&mut self, translation: Point) {
        for point in &mut self.points {
            *point += translation;
        }
    }

    /// Rotates every point counter-clockwise around the origin.
    #[cfg_attr(test, mutants::skip)] // Skipping the zero angle gives the same points as rotating by it.
    pub fn rotate(&mut self, angle: Angle) {
        if angle == Angle::ZERO {
            return;
        }

        let (sine, cosine) = angle.radians().sin_cos();

        for point in &mut self.points {
            *point = Point::new(
                cosine * point.x - sine * point.y,
                sine * point.x + cosine * point.y,
            );
        }
    }

    /// Whether `point` lies inside the quad, by the even-odd rule.
    ///
    /// For an axis-aligned quad this includes the left and top edges but excludes the right and
    /// bottom edges, so adjacent quads never both contain a point on their shared edge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        // Pair every point with its predecessor, wrapping around to close the shape.
        let edges = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(NUMBER_OF_POINTS - 1));

        edges.fold(false, |inside, (current, previous)| {
            let straddles = (current.y > point.y) != (previous.y > point.y);

            if straddles
                && point.x
                    < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                        + current.x
            {
                !inside
            } else {
                inside
            }
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use super::*;

    fn square_10_to_20() -> Quad {
        let mut quad = Quad::default();

        quad.set_point(0, Point::new(10.0, 10.0));
        quad.set_point(1, Point::new(20.0, 10.0));
        quad.set_point(2, Point::new(20.0, 20.0));
        quad.set_point(3, Point::new(10.0, 20.0));

        quad
    }

    #[test]
    fn contains_left_and_top_edge() {
        let quad = square_10_to_20();

        assert!(quad.contains(Point::new(10.0, 15.0)));
        assert!(quad.contains(Point::new(15.0, 10.0)));
    }

    #[test]
    fn excludes_right_and_bottom_edge() {
        let quad = square_10_to_20();

        assert!(!quad.contains(Point::new(20.0, 15.0)));
        assert!(!quad.contains(Point::new(15.0, 20.0)));
    }

    #[test]
    fn inside_and_outside() {
        let quad = square_10_to_20();

        assert!(quad.contains(Point::new(15.0, 15.0)));
        assert!(!quad.contains(Point::new(5.0, 15.0)));
        assert!(!quad.contains(Point::new(25.0, 15.0)));
        assert!(!quad.contains(Point::new(15.0, 5.0)));
        assert!(!quad.contains(Point::new(15.0, 25.0)));
    }

    #[test]
    fn centered_square_is_centered() {
        let quad = Quad::centered_square(4.0);

        assert_eq!(
            quad.points(),
            &[
                Point::new(-2.0, -2.0),
                Point::new(2.0, -2.0),
                Point::new(2.0, 2.0),
                Point::new(-2.0, 2.0),
            ]
        );
    }

    #[test]
    fn translate_moves_all_points() {
        let mut quad = Quad::centered_square(2.0);
        quad.translate(Point::new(5.0, -5.0));

        assert_eq!(quad.point(0), Point::new(4.0, -6.0));
        assert_eq!(quad.point(2), Point::new(6.0, -4.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut quad = Quad::centered_square(2.0);
        quad.rotate(Angle::from_degrees(90.0));

        // (-1, -1) rotates to (1, -1) under a counter-clockwise quarter turn.
        let rotated = quad.point(0);
        assert!((rotated.x - 1.0).abs() < 1e-12);
        assert!((rotated.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_by_zero_is_noop() {
        let mut quad = square_10_to_20();
        quad.rotate(Angle::ZERO);

        assert_eq!(quad, square_10_to_20());
    }

    #[test]
    #[should_panic]
    fn point_out_of_bounds_panics() {
        _ = Quad::ZERO.point(4);
    }
}
