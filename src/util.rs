use {
  crate::{
    error::{Error, Result},
    flake::FlakeConfig,
    geometry::{Placement, Real}
  },
  humansize::{FileSize, file_size_opts}
};

/// Log the time spent in a block, at `info` level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    $crate::log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// Upper bound of the number of polygons involved in a flake: `Σ_{i=0}^{iterations} b^i`,
/// where the branching factor `b` is `sides + 1` with center polygons, `sides` otherwise.
///
/// Saturates at `u64::MAX`.
pub fn shape_count(sides: usize, iterations: u32, include_center: bool) -> u64 {
  let base = (sides as u64).saturating_add(include_center as u64);
  let mut term = 1u64;
  let mut total = 1u64;
  for _ in 0..iterations {
    term = term.saturating_mul(base);
    total = total.saturating_add(term);
  }
  total
}

/// Refuse flakes that would involve more than `max_shapes` polygons.
/// Returns the projected count otherwise.
pub fn ensure_shape_limit<T: Real>(config: &FlakeConfig<T>, max_shapes: u64) -> Result<u64> {
  let count = config.shape_count();
  let memory = count
    .saturating_mul(std::mem::size_of::<Placement<T>>() as u64)
    .file_size(file_size_opts::BINARY)
    .unwrap_or_else(|e| e);
  if count > max_shapes {
    log::warn!(
      "{}-flake with {} iterations needs up to {} shapes ({}), limit is {}",
      config.sides, config.iterations, count, memory, max_shapes
    );
    return Err(Error::ResourceLimitExceeded { count, limit: max_shapes });
  }
  log::debug!("{}-flake: up to {} shapes ({})", config.sides, count, memory);
  Ok(count)
}
