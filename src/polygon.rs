use crate::Point;
use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// A closed shape described by an origin and an ordered list of vertices
/// relative to that origin.
pub struct Polygon<T, U = euclid::UnknownUnit> {
    pub origin: Point<T, U>,
    pub points: Vec<Point<T, U>>,
}

impl<T: Clone, U> Clone for Polygon<T, U> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            points: self.points.clone(),
        }
    }
}

impl<T, U> Eq for Polygon<T, U> where T: Eq {}

impl<T, U> PartialEq for Polygon<T, U>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.points == other.points
    }
}

impl<T: fmt::Debug, U> fmt::Debug for Polygon<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Polygon")
            .field("origin", &self.origin)
            .field("points", &self.points)
            .finish()
    }
}

impl<T, U> Hash for Polygon<T, U>
where
    T: Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.points.hash(state);
    }
}

impl<T, U> Polygon<T, U> {
    #[inline]
    pub fn new(origin: Point<T, U>, points: Vec<Point<T, U>>) -> Self {
        Self { origin, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T, U> Polygon<T, U>
where
    T: Copy + Add<Output = T>,
{
    /// Iterates the vertices in absolute coordinates.
    pub fn vertices(&self) -> impl Iterator<Item = Point<T, U>> + '_ {
        let origin = self.origin;
        self.points.iter().map(move |p| origin + p.to_vector())
    }
}

#[test]
fn test_vertices_are_offset_by_origin() {
    let polygon = Polygon::<i32>::new(
        Point::new(5, -5),
        vec![Point::new(0, 0), Point::new(2, 0), Point::new(2, 3)],
    );
    assert_eq!(polygon.len(), 3);
    assert!(!polygon.is_empty());
    let vertices: Vec<_> = polygon.vertices().collect();
    assert_eq!(
        vertices,
        [Point::new(5, -5), Point::new(7, -5), Point::new(7, -2)]
    );
}

#[test]
fn test_empty_polygon() {
    let polygon = Polygon::<f32>::new(Point::zero(), Vec::new());
    assert_eq!(polygon.len(), 0);
    assert!(polygon.is_empty());
}
