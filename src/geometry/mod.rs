//! Shapes, placements and the coordinate spaces they live in.
//!
//! Flakes live in [`WorldSpace`], with `+y` pointing up and angles measured from the
//! `+y` axis toward `+x`. Unit shapes are centered in the origin and have circumradius 1.

use {
  std::fmt::Debug,
  euclid::{Point2D, Box2D, Vector2D as V2},
  num_traits::{Float, FloatConst},
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Flake coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2<T> = Point2D<T, WorldSpace>;

/// Floating point types the geometry is generic over.
pub trait Real: Float + FloatConst + Debug + Send + Sync + 'static {}
impl <T> Real for T where T: Float + FloatConst + Debug + Send + Sync + 'static {}

pub(crate) fn cast<T: Real>(x: usize) -> T {
  // usize -> float never fails for primitive floats, it may only round
  T::from(x).unwrap_or_else(T::infinity)
}

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape<T>: SDF<T> + BoundingBox<T, WorldSpace> {
  fn translate(self, offset: V2<T, WorldSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Uniform scale around the origin of shape's own frame
  fn scale(self, scale: T) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  fn texture<X>(self, texture: X) -> crate::drawing::Texture<Self, X> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T, S> Shape<T> for S where S: SDF<T> + BoundingBox<T, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S, T: Real> BoundingBox<T, WorldSpace> for Translation<S, T>
  where S: BoundingBox<T, WorldSpace> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Uniform scale around the origin, applied before any translation outside of it
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: T
}
impl <S, T: Real> BoundingBox<T, WorldSpace> for Scale<S, T>
  where S: BoundingBox<T, WorldSpace> {
  fn bounding_box(&self) -> Box2D<T, WorldSpace> {
    self.shape.bounding_box().scale(self.scale, self.scale)
  }
}

/// Rendering role of a placement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
  /// One of the `n` children laid out around the parent.
  Ordinary,
  /// The optional polygon concentric with its parent, or one of its descendants.
  Center
}

/// One polygon of a flake: circumradius, center and role.
///
/// `radius` is always positive; the role is carried separately.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement<T> {
  pub radius: T,
  pub center: P2<T>,
  pub role: Role
}

impl <T: Real> Placement<T> {
  pub fn new(radius: T, center: P2<T>) -> Self {
    Self { radius, center, role: Role::Ordinary }
  }

  pub fn with_role(self, role: Role) -> Self {
    Self { role, ..self }
  }

  pub fn is_center(&self) -> bool {
    self.role == Role::Center
  }

  /// Radius with the role folded into its sign, negative for [`Role::Center`].
  pub fn signed_radius(&self) -> T {
    match self.role {
      Role::Ordinary => self.radius,
      Role::Center => -self.radius
    }
  }

  /// Inverse of [`signed_radius`](Self::signed_radius): a negative radius marks a center polygon.
  pub fn from_signed(radius: T, x: T, y: T) -> Self {
    let role = if radius < T::zero() { Role::Center } else { Role::Ordinary };
    Self { radius: radius.abs(), center: P2::new(x, y), role }
  }

  /// The regular polygon with `sides` sides this placement stands for.
  pub fn to_polygon(&self, sides: usize) -> Translation<Scale<RegularPolygon, T>, T> {
    RegularPolygon::new(sides)
      .scale(self.radius)
      .translate(self.center.to_vector())
  }
}

/// Union of the bounding boxes of `n`-gons at the given placements.
pub fn bounding_box<'a, T: Real>(
  sides: usize,
  placements: impl IntoIterator<Item = &'a Placement<T>>
) -> Option<Box2D<T, WorldSpace>> {
  placements.into_iter()
    .map(|p| p.to_polygon(sides).bounding_box())
    .reduce(|a, b| a.union(&b))
}
