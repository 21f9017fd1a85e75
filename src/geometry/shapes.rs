use {
  super::{BoundingBox, Real, WorldSpace, P2, cast},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D}
};

/// Regular polygon with circumradius 1 centered in the origin.
/// Vertex 0 points along `+y`, the rest follow clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegularPolygon {
  pub sides: usize
}

impl RegularPolygon {
  pub fn new(sides: usize) -> Self {
    Self { sides }
  }

  pub fn vertices<T: Real>(&self) -> impl Iterator<Item = P2<T>> {
    let step = (T::PI() + T::PI()) / cast(self.sides);
    (0..self.sides).map(move |i| {
      let angle = step * cast(i);
      P2::new(angle.sin(), angle.cos())
    })
  }
}

impl<T: Real, S> BoundingBox<T, S> for RegularPolygon {
  fn bounding_box(&self) -> Box2D<T, S> {
    Box2D::from_points(self.vertices::<T>().map(|p| Point2D::new(p.x, p.y)))
  }
}

impl<T: Real> SDF<T> for RegularPolygon {
  /// Exact distance: fold the pixel into the sector of one edge, then measure to that
  /// edge segment (or its end vertex once past it).
  fn sdf(&self, pixel: P2<T>) -> T {
    let half_angle = T::PI() / cast(self.sides);
    let apothem = half_angle.cos();
    let half_edge = half_angle.sin();

    let sector = half_angle + half_angle;
    let mut angle = pixel.x.atan2(pixel.y) % sector;
    if angle < T::zero() {
      angle = angle + sector;
    }
    let angle = angle - half_angle; // relative to the edge normal
    let rho = pixel.to_vector().length();
    let normal = rho * angle.cos();
    let tangent = rho * angle.sin().abs();

    if tangent <= half_edge {
      normal - apothem
    } else {
      (normal - apothem).hypot(tangent - half_edge)
    }
  }
}
