use crate::{Edges, Extents, Point, Polygon, Rect, Size};
use bytemuck::{Pod, Zeroable};
use euclid::num::{One, Zero};
use num_traits::NumCast;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Div, Sub};

/// An axis-aligned rectangular region keyed by its top-left corner and size.
///
/// Unlike [`Rect`], the extent is stored rather than derived, so negative
/// `width`/`height` are representable and simply flip the effective
/// right/bottom edges. No operation validates its inputs.
#[repr(C)]
pub struct Quad<T, U = euclid::UnknownUnit> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
    #[doc(hidden)]
    pub _unit: PhantomData<U>,
}

impl<T: Copy, U> Copy for Quad<T, U> {}

impl<T: Clone, U> Clone for Quad<T, U> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
            _unit: PhantomData,
        }
    }
}

impl<T, U> Eq for Quad<T, U> where T: Eq {}

impl<T, U> PartialEq for Quad<T, U>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }
}

impl<T: fmt::Debug, U> fmt::Debug for Quad<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Quad")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<T: fmt::Display, U> fmt::Display for Quad<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{{Quad (x={} y={} width={} height={})}}]",
            self.x, self.y, self.width, self.height
        )
    }
}

impl<T: Default, U> Default for Quad<T, U> {
    fn default() -> Self {
        Self::new(
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
        )
    }
}

impl<T, U> Hash for Quad<T, U>
where
    T: Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.width.hash(state);
        self.height.hash(state);
    }
}

// SAFETY: PhantomData is zero-sized and repr(C) guarantees consistent layout
unsafe impl<T: Zeroable, U> Zeroable for Quad<T, U> {}
unsafe impl<T: Pod, U: 'static> Pod for Quad<T, U> {}

impl<T, U> Quad<T, U> {
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
            _unit: PhantomData,
        }
    }

    /// Overwrites all four fields. Returns `self` for chaining.
    #[inline]
    pub fn set_to(&mut self, x: T, y: T, width: T, height: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Reads `x`/`y`/`width`/`height` off any rectangle-like source and
    /// applies them via [`set_to`](Self::set_to).
    #[inline]
    pub fn copy_from(&mut self, source: &impl Extents<T, U>) -> &mut Self {
        self.set_to(source.x(), source.y(), source.width(), source.height())
    }
}

impl<T, U> Quad<T, U>
where
    T: Zero,
{
    /// Constructor, setting all fields to zero.
    pub fn zero() -> Self {
        Quad::new(T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T, U> Quad<T, U>
where
    T: Copy,
{
    #[inline]
    pub fn from_origin_and_size(origin: Point<T, U>, size: Size<T, U>) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn origin(&self) -> Point<T, U> {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size<T, U> {
        Size::new(self.width, self.height)
    }

    /// Writes this quad's extents into any compatible rectangle type.
    #[inline]
    pub fn copy_to<'a, R: Extents<T, U>>(&self, target: &'a mut R) -> &'a mut R {
        target.set_extents(self.x, self.y, self.width, self.height);
        target
    }
}

impl<T, U> Quad<T, U>
where
    T: Copy + Add<Output = T>,
{
    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }
}

impl<T, U> Quad<T, U>
where
    T: Copy + One + Add<Output = T> + Div<Output = T>,
{
    #[inline]
    pub fn half_width(&self) -> T {
        self.width / (T::one() + T::one())
    }

    #[inline]
    pub fn half_height(&self) -> T {
        self.height / (T::one() + T::one())
    }
}

impl<T, U> Quad<T, U>
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    /// Tests whether the point lies within the closed rectangle; both
    /// boundaries are inclusive.
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

impl<T, U> Quad<T, U>
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    /// Tests whether this quad overlaps another rectangle, with the
    /// comparison widened by `tolerance` on all four sides. Touching
    /// edges count as an intersection.
    pub fn intersects(&self, other: &impl Edges<T, U>, tolerance: T) -> bool {
        self.intersects_raw(
            other.left(),
            other.right(),
            other.top(),
            other.bottom(),
            tolerance,
        )
    }

    /// Same predicate as [`intersects`](Self::intersects), taking the four
    /// edges directly so callers holding scalars avoid building a rectangle.
    pub fn intersects_raw(&self, left: T, right: T, top: T, bottom: T, tolerance: T) -> bool {
        !(left > self.right() + tolerance
            || right < self.left() - tolerance
            || top > self.bottom() + tolerance
            || bottom < self.top() - tolerance)
    }
}

impl<T, U> Quad<T, U>
where
    T: Copy + Zero,
{
    /// Builds a 4-vertex closed polygon tracing this quad's corners,
    /// starting at the top-left.
    pub fn to_polygon(&self) -> Polygon<T, U> {
        Polygon::new(
            Point::new(self.x, self.y),
            vec![
                Point::new(T::zero(), T::zero()),
                Point::new(self.width, T::zero()),
                Point::new(self.width, self.height),
                Point::new(T::zero(), self.height),
            ],
        )
    }
}

impl<T, U> Quad<T, U>
where
    T: NumCast + Copy,
{
    /// Casts the scalar type to `V`.
    ///
    /// Panics if any field fails to cast; see [`try_cast`](Self::try_cast).
    pub fn cast<V: NumCast>(&self) -> Quad<V, U> {
        self.try_cast().unwrap()
    }

    pub fn try_cast<V: NumCast>(&self) -> Option<Quad<V, U>> {
        Some(Quad::new(
            NumCast::from(self.x)?,
            NumCast::from(self.y)?,
            NumCast::from(self.width)?,
            NumCast::from(self.height)?,
        ))
    }
}

impl<T, U> From<Rect<T, U>> for Quad<T, U>
where
    T: Copy + Sub<Output = T>,
{
    #[inline]
    fn from(rect: Rect<T, U>) -> Self {
        Self::new(
            rect.min.x,
            rect.min.y,
            rect.max.x - rect.min.x,
            rect.max.y - rect.min.y,
        )
    }
}

impl<T, U> From<Quad<T, U>> for Rect<T, U>
where
    T: Copy + Add<Output = T>,
{
    #[inline]
    fn from(quad: Quad<T, U>) -> Self {
        Self::new(
            Point::new(quad.x, quad.y),
            Point::new(quad.right(), quad.bottom()),
        )
    }
}

impl<T, U> Edges<T, U> for Quad<T, U>
where
    T: Copy + Add<Output = T>,
{
    #[inline]
    fn left(&self) -> T {
        Quad::left(self)
    }

    #[inline]
    fn right(&self) -> T {
        Quad::right(self)
    }

    #[inline]
    fn top(&self) -> T {
        Quad::top(self)
    }

    #[inline]
    fn bottom(&self) -> T {
        Quad::bottom(self)
    }
}

impl<T: Copy, U> Extents<T, U> for Quad<T, U> {
    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }

    #[inline]
    fn width(&self) -> T {
        self.width
    }

    #[inline]
    fn height(&self) -> T {
        self.height
    }

    #[inline]
    fn set_extents(&mut self, x: T, y: T, width: T, height: T) {
        self.set_to(x, y, width, height);
    }
}

#[test]
fn test_edges_follow_set_to() {
    let mut quad = Quad::<f32>::zero();
    quad.set_to(10.0, 20.0, 30.0, 40.0);
    assert_eq!(quad.left(), 10.0);
    assert_eq!(quad.top(), 20.0);
    assert_eq!(quad.right(), 40.0);
    assert_eq!(quad.bottom(), 60.0);
    assert_eq!(quad.half_width(), 15.0);
    assert_eq!(quad.half_height(), 20.0);
}

#[test]
fn test_set_to_chains() {
    let mut quad = Quad::<i32>::zero();
    let bottom = quad.set_to(1, 2, 3, 4).bottom();
    assert_eq!(bottom, 6);
}

#[test]
fn test_negative_extent_flips_edges() {
    let quad = Quad::<f32>::new(10.0, 0.0, -4.0, 5.0);
    assert_eq!(quad.right(), 6.0);
    assert_eq!(quad.half_width(), -2.0);
}

#[test]
fn test_contains_is_boundary_inclusive() {
    let quad = Quad::<f32>::new(1.0, 2.0, 4.0, 6.0);
    assert!(quad.contains(1.0, 2.0));
    assert!(quad.contains(5.0, 2.0));
    assert!(quad.contains(1.0, 8.0));
    assert!(quad.contains(3.0, 5.0));
    assert!(!quad.contains(5.001, 2.0));
    assert!(!quad.contains(1.0, 8.001));
    assert!(!quad.contains(0.999, 2.0));
}

#[test]
fn test_intersects_touching_edges() {
    let a = Quad::<f32>::new(0.0, 0.0, 10.0, 10.0);
    let b = Quad::<f32>::new(10.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&b, 0.0));
    assert!(b.intersects(&a, 0.0));
}

#[test]
fn test_intersects_tolerance_closes_gap() {
    let a = Quad::<f32>::new(0.0, 0.0, 10.0, 10.0);
    let b = Quad::<f32>::new(11.0, 0.0, 10.0, 10.0);
    assert!(!a.intersects(&b, 0.0));
    assert!(!a.intersects(&b, 0.5));
    assert!(a.intersects(&b, 1.0));
    assert!(a.intersects(&b, 2.0));
}

#[test]
fn test_intersects_is_symmetric() {
    let quads = [
        Quad::<f32>::new(0.0, 0.0, 10.0, 10.0),
        Quad::<f32>::new(5.0, 5.0, 2.0, 2.0),
        Quad::<f32>::new(-3.0, 7.0, 4.0, 100.0),
        Quad::<f32>::new(20.0, 20.0, 1.0, 1.0),
    ];
    for a in &quads {
        for b in &quads {
            assert_eq!(a.intersects(b, 0.0), b.intersects(a, 0.0));
        }
    }
}

#[test]
fn test_intersects_raw_matches_intersects() {
    let a = Quad::<f32>::new(0.0, 0.0, 10.0, 10.0);
    let b = Quad::<f32>::new(4.0, -3.0, 2.0, 2.0);
    assert_eq!(
        a.intersects(&b, 0.0),
        a.intersects_raw(b.left(), b.right(), b.top(), b.bottom(), 0.0)
    );
    assert!(a.intersects_raw(-5.0, 0.0, -5.0, 0.0, 0.0));
    assert!(!a.intersects_raw(-5.0, -1.0, -5.0, 0.0, 0.0));
}

#[test]
fn test_copy_roundtrip() {
    let source = Quad::<f32>::new(1.5, -2.5, 3.0, 4.0);
    let mut via = Quad::<f32>::zero();
    let mut back = Quad::<f32>::zero();
    source.copy_to(&mut via);
    back.copy_from(&via);
    assert_eq!(back, source);
}

#[test]
fn test_rect_interop() {
    struct ScreenSpace;

    let quad = Quad::<f32, ScreenSpace>::new(0.0, 0.0, 10.0, 10.0);
    let rect = Rect::new(Point::new(8.0, 8.0), Point::new(12.0, 12.0));
    assert!(quad.intersects(&rect, 0.0));

    let mut received = Rect::new(Point::zero(), Point::zero());
    quad.copy_to(&mut received);
    assert_eq!(received.max, Point::new(10.0, 10.0));

    let mut back = Quad::zero();
    back.copy_from(&received);
    assert_eq!(back, quad);

    assert_eq!(Quad::from(received), quad);
    assert_eq!(Rect::from(quad), received);
}

#[test]
fn test_to_polygon_traces_corners() {
    let polygon = Quad::<f32>::new(10.0, 20.0, 30.0, 40.0).to_polygon();
    let vertices: Vec<_> = polygon.vertices().collect();
    assert_eq!(
        vertices,
        [
            Point::new(10.0, 20.0),
            Point::new(40.0, 20.0),
            Point::new(40.0, 60.0),
            Point::new(10.0, 60.0),
        ]
    );
}

#[test]
fn test_display() {
    let quad = Quad::<i32>::new(1, 2, 3, 4);
    assert_eq!(quad.to_string(), "[{Quad (x=1 y=2 width=3 height=4)}]");
}

#[test]
fn test_default_is_zero() {
    assert_eq!(Quad::<f32>::default(), Quad::<f32>::zero());
}

#[test]
fn test_cast() {
    let quad = Quad::<f32>::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(quad.cast::<i32>(), Quad::<i32>::new(1, 2, 3, 4));
    assert_eq!(Quad::<f32>::new(f32::NAN, 0.0, 0.0, 0.0).try_cast::<i32>(), None);
}

#[test]
fn test_pod_cast() {
    let quad = Quad::<f32>::new(1.0, 2.0, 3.0, 4.0);
    let raw: [f32; 4] = bytemuck::cast(quad);
    assert_eq!(raw, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_hash_agrees_with_eq() {
    use ordered_float::OrderedFloat;
    use std::hash::{DefaultHasher, Hasher};

    fn hash_of(quad: &Quad<OrderedFloat<f32>>) -> u64 {
        let mut state = DefaultHasher::new();
        quad.hash(&mut state);
        state.finish()
    }

    let a = Quad::new(
        OrderedFloat(1.0),
        OrderedFloat(2.0),
        OrderedFloat(3.0),
        OrderedFloat(4.0),
    );
    let b = a;
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}
