use {
  euclid::Point2D,
  crate::geometry::{WorldSpace, Real, Shape, Scale, Translation}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl <S, T: Real> SDF<T> for Translation<S, T>
  where S: Shape<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S, T: Real> SDF<T> for Scale<S, T>
  where S: Shape<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    self.shape.sdf(pixel / self.scale) * self.scale
  }
}
