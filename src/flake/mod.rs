//! n-flake generator.
//!
//! A parent polygon of circumradius `R` is replaced with `n` children of radius
//! `R / scale_factor(n)`, evenly spaced on a circle around the parent center, plus an
//! optional center polygon. Repeating this on every polygon of the previous step for
//! a number of iterations yields the flake.

use {
  crate::{
    error::{Result, invalid_argument},
    geometry::{Placement, Real, Role, P2, cast},
    util
  },
  log::{debug, trace}
};

#[cfg(test)] mod tests;

/// Frontiers at least this large are expanded on the rayon pool.
const PARALLEL_THRESHOLD: usize = 4096;
/// Center polygons smaller than this fraction of their parent are dropped.
const CENTER_TOLERANCE: f64 = 1e-9;

/// Everything that determines a flake.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlakeConfig<T> {
  /// Number of sides of every polygon
  pub sides: usize,
  pub iterations: u32,
  /// Rotate children by `π/n`, so that they line up with the edges of the parent
  pub edge_centered: bool,
  /// Add a polygon concentric with each parent
  pub include_center: bool,
  /// Only the center polygons of the last iteration keep [`Role::Center`].
  /// Works for even `sides` only, a no-op otherwise.
  pub only_centermost_colored: bool,
  pub top_radius: T,
  pub origin: P2<T>
}

impl <T: Real> FlakeConfig<T> {
  /// Vertex-centered flake without center polygons, unit radius, centered in the origin.
  pub fn new(sides: usize, iterations: u32) -> Self {
    Self {
      sides,
      iterations,
      edge_centered: false,
      include_center: false,
      only_centermost_colored: false,
      top_radius: T::one(),
      origin: P2::origin()
    }
  }

  pub fn with_edge_centered(self, edge_centered: bool) -> Self {
    Self { edge_centered, ..self }
  }

  pub fn with_center(self, include_center: bool) -> Self {
    Self { include_center, ..self }
  }

  pub fn with_only_centermost_colored(self, only_centermost_colored: bool) -> Self {
    Self { only_centermost_colored, ..self }
  }

  pub fn with_top_radius(self, top_radius: T) -> Self {
    Self { top_radius, ..self }
  }

  pub fn with_origin(self, origin: P2<T>) -> Self {
    Self { origin, ..self }
  }

  pub fn with_iterations(self, iterations: u32) -> Self {
    Self { iterations, ..self }
  }

  pub fn validate(&self) -> Result<()> {
    validate_sides(self.sides)?;
    validate_radius(self.top_radius)?;
    if !(self.origin.x.is_finite() && self.origin.y.is_finite()) {
      invalid_argument!("origin must be finite, got {:?}", self.origin);
    }
    Ok(())
  }

  /// The polygon every iteration starts from.
  pub fn root(&self) -> Placement<T> {
    Placement::new(self.top_radius, self.origin)
  }

  pub fn scale_factor(&self) -> Result<T> {
    scale_factor(self.sides, self.edge_centered)
  }

  /// Worst-case number of polygons over all iterations, see [`util::shape_count`].
  pub fn shape_count(&self) -> u64 {
    util::shape_count(self.sides, self.iterations, self.include_center)
  }

  pub fn generate(&self) -> Result<Vec<Placement<T>>> {
    generate_flake(self)
  }

  /// [`generate`](Self::generate), refusing configurations above `max_shapes` polygons.
  pub fn generate_bounded(&self, max_shapes: u64) -> Result<Vec<Placement<T>>> {
    util::ensure_shape_limit(self, max_shapes)?;
    generate_flake(self)
  }
}

pub(crate) fn validate_sides(sides: usize) -> Result<()> {
  if sides < 3 {
    invalid_argument!("polygons must have at least 3 sides, got {sides}");
  }
  Ok(())
}

pub(crate) fn validate_radius<T: Real>(radius: T) -> Result<()> {
  if !(radius.is_finite() && radius > T::zero()) {
    invalid_argument!("radius must be positive and finite, got {radius:?}");
  }
  Ok(())
}

/// Ratio between the radius of a parent polygon and the radius of its children.
///
/// Vertex-centered: `2 (1 + Σ_{i=1}^{⌊n/4⌋} cos(2πi/n))`
///
/// Edge-centered: `3 + 2/cos(π/n) Σ_{i=1}^{⌊(n-2)/4⌋} cos((2i+1)π/n)`
pub fn scale_factor<T: Real>(sides: usize, edge_centered: bool) -> Result<T> {
  validate_sides(sides)?;
  let n: T = cast(sides);
  let two = T::one() + T::one();
  let factor = if edge_centered {
    let sum = (1..=(sides - 2) / 4)
      .map(|i| (cast::<T>(2 * i + 1) * T::PI() / n).cos())
      .fold(T::zero(), |a, b| a + b);
    two + T::one() + two / (T::PI() / n).cos() * sum
  } else {
    let sum = (1..=sides / 4)
      .map(|i| (two * T::PI() * cast(i) / n).cos())
      .fold(T::zero(), |a, b| a + b);
    two * (T::one() + sum)
  };
  Ok(factor)
}

/// Children of a single parent polygon.
///
/// The `n` ring children come first, in angular order starting at the `+y` axis (shifted
/// by `π/n` when edge-centered), followed by the center polygon when requested and when
/// there is room for one. Ring children inherit the role of the parent.
///
/// Vertex-centered squares and edge-centered triangles leave no room in the middle: their
/// center polygon would have radius 0, so it is left out and only `n` children are
/// returned even with `include_center`.
pub fn subflake_layout<T: Real>(
  sides: usize,
  parent: &Placement<T>,
  edge_centered: bool,
  include_center: bool
) -> Result<Vec<Placement<T>>> {
  validate_sides(sides)?;
  validate_radius(parent.radius)?;

  let n: T = cast(sides);
  let half_angle = T::PI() / n;
  let child_radius = parent.radius / scale_factor(sides, edge_centered)?;
  let ring_radius = parent.radius - child_radius;
  let (phase, ring) = if edge_centered {
    (half_angle, ring_radius * half_angle.cos())
  } else {
    (T::zero(), ring_radius)
  };
  let step = half_angle + half_angle;

  let mut children = Vec::with_capacity(sides + include_center as usize);
  children.extend((0..sides).map(|i| {
    let angle = step * cast(i) + phase;
    Placement {
      radius: child_radius,
      center: P2::new(
        parent.center.x + ring * angle.sin(),
        parent.center.y + ring * angle.cos()
      ),
      role: parent.role
    }
  }));

  if include_center {
    let cos = half_angle.cos();
    let center_radius = match (sides % 2 == 1, edge_centered) {
      (true, false) =>
        parent.radius * (T::one() - (T::one() + cos) / scale_factor(sides, false)?) / cos,
      (true, true) =>
        parent.radius * cos - child_radius * (T::one() + cos),
      (false, _) =>
        ring_radius - child_radius
    };
    // e.g. squares (vertex-centered) and triangles (edge-centered) tile the parent
    // without leaving a gap in the middle
    if center_radius > parent.radius * T::from(CENTER_TOLERANCE).unwrap_or_else(T::epsilon) {
      children.push(Placement {
        radius: center_radius,
        center: parent.center,
        role: Role::Center
      });
    } else {
      trace!("no room for a center polygon: n = {sides}, edge_centered = {edge_centered}");
    }
  }
  Ok(children)
}

/// All polygons of the last iteration, or the top polygon alone after 0 iterations.
///
/// Does not check the size of the result, which grows as `n^iterations`; see
/// [`FlakeConfig::generate_bounded`].
pub fn generate_flake<T: Real>(config: &FlakeConfig<T>) -> Result<Vec<Placement<T>>> {
  config.validate()?;
  let FlakeConfig { sides, iterations, edge_centered, include_center, .. } = *config;
  let reset_roles = config.only_centermost_colored && sides % 2 == 0;

  let mut frontier = vec![config.root()];
  for k in 0..iterations {
    let mut next = expand(&frontier, sides, edge_centered, include_center)?;
    if reset_roles && k + 1 < iterations {
      next.iter_mut().for_each(|p| p.role = Role::Ordinary);
    }
    trace!("iteration {}: {} polygons", k + 1, next.len());
    frontier = next;
  }
  debug!(
    "{}-flake, {} iterations (edge_centered = {}, center = {}): {} polygons",
    sides, iterations, edge_centered, include_center, frontier.len()
  );
  Ok(frontier)
}

/// One step: children of every polygon of the frontier, in frontier order.
fn expand<T: Real>(
  frontier: &[Placement<T>],
  sides: usize,
  edge_centered: bool,
  include_center: bool
) -> Result<Vec<Placement<T>>> {
  let layout = |parent: &Placement<T>| subflake_layout(sides, parent, edge_centered, include_center);

  if frontier.len() < PARALLEL_THRESHOLD {
    let mut next = Vec::with_capacity(frontier.len() * (sides + include_center as usize));
    for parent in frontier {
      next.extend(layout(parent)?);
    }
    Ok(next)
  } else {
    use rayon::prelude::*;

    let children = frontier.par_iter()
      .map(layout)
      .collect::<Result<Vec<_>>>()?;
    Ok(children.into_iter().flatten().collect())
  }
}
