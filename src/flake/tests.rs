use {
  super::*,
  crate::error::Error,
  std::f64::consts::{PI, TAU}
};

fn assert_close(a: f64, b: f64) {
  assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

/// Configurations where the children leave no room in the middle.
fn center_fits(sides: usize, edge_centered: bool) -> bool {
  !matches!((sides, edge_centered), (4, false) | (3, true))
}

#[test] fn scale_factor_exceeds_one() -> Result<()> {
  for sides in 3..=64 {
    for edge_centered in [false, true] {
      let factor: f64 = scale_factor(sides, edge_centered)?;
      assert!(factor > 1.0, "n = {sides}, edge_centered = {edge_centered}: {factor}");
    }
  }
  Ok(())
}

#[test] fn scale_factor_known_values() -> Result<()> {
  assert_close(scale_factor(3, false)?, 2.0);
  assert_close(scale_factor(4, false)?, 2.0);
  assert_close(scale_factor(6, false)?, 3.0);
  assert_close(scale_factor(8, false)?, 2.0 + 2f64.sqrt());
  assert_close(scale_factor(3, true)?, 3.0);
  assert_close(scale_factor(6, true)?, 3.0 + 2.0 / (PI / 6.0).cos() * (PI / 2.0).cos());
  assert_close(scale_factor(10, true)?, 3.0 + 2.0 / (PI / 10.0).cos() * (3.0 * PI / 10.0).cos());
  Ok(())
}

#[test] fn scale_factor_single_precision() -> Result<()> {
  let factor: f32 = scale_factor(6, false)?;
  assert!((factor - 3.0).abs() < 1e-5);
  Ok(())
}

#[test] fn too_few_sides() {
  assert!(matches!(scale_factor::<f64>(2, false), Err(Error::InvalidArgument(_))));
  let parent = Placement::new(1.0, P2::origin());
  assert!(matches!(subflake_layout(2, &parent, false, false), Err(Error::InvalidArgument(_))));
  assert!(matches!(FlakeConfig::<f64>::new(0, 3).generate(), Err(Error::InvalidArgument(_))));
}

#[test] fn degenerate_radius() {
  for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
    let parent = Placement::new(radius, P2::origin());
    assert!(subflake_layout(5, &parent, false, true).is_err(), "{radius}");
    assert!(FlakeConfig::new(5, 1).with_top_radius(radius).generate().is_err(), "{radius}");
  }
  assert!(FlakeConfig::new(5, 1).with_origin(P2::new(f64::NAN, 0.0)).generate().is_err());
}

#[test] fn zero_iterations_yields_root() -> Result<()> {
  for sides in 3..=12 {
    for (edge_centered, include_center) in [(false, false), (false, true), (true, false), (true, true)] {
      let config = FlakeConfig::<f64>::new(sides, 0)
        .with_edge_centered(edge_centered)
        .with_center(include_center);
      assert_eq!(config.generate()?, vec![config.root()]);
    }
  }
  let hexaflake = FlakeConfig::<f64>::new(6, 0).generate()?;
  assert_eq!(hexaflake, vec![Placement::new(1.0, P2::new(0.0, 0.0))]);
  Ok(())
}

#[test] fn layout_without_center() -> Result<()> {
  let parent = Placement::new(1.0, P2::new(0.3, -0.2));
  for sides in 3..=16 {
    for edge_centered in [false, true] {
      let children = subflake_layout(sides, &parent, edge_centered, false)?;
      assert_eq!(children.len(), sides);
      assert!(children.iter().all(|c| c.role == Role::Ordinary && c.radius > 0.0));
    }
  }
  Ok(())
}

#[test] fn layout_with_center() -> Result<()> {
  let parent = Placement::<f64>::new(2.0, P2::new(1.0, 1.0));
  for sides in 3..=16 {
    for edge_centered in [false, true] {
      if !center_fits(sides, edge_centered) {
        continue;
      }
      let children = subflake_layout(sides, &parent, edge_centered, true)?;
      assert_eq!(children.len(), sides + 1, "n = {sides}, edge_centered = {edge_centered}");
      let centers = children.iter().filter(|c| c.is_center()).collect::<Vec<_>>();
      assert_eq!(centers.len(), 1);
      assert!(centers[0].radius > 0.0 && centers[0].radius.is_finite());
      assert!(centers[0].signed_radius() < 0.0);
      assert_eq!(centers[0].center, parent.center);
      // the center polygon comes last
      assert!(children[sides].is_center());
    }
  }
  Ok(())
}

#[test] fn no_room_for_center() -> Result<()> {
  let parent = Placement::new(1.0, P2::origin());
  assert_eq!(subflake_layout(4, &parent, false, true)?.len(), 4);
  assert_eq!(subflake_layout(3, &parent, true, true)?.len(), 3);
  Ok(())
}

#[test] fn triangle_center_polygon() -> Result<()> {
  let parent = Placement::new(1.0, P2::origin());
  let children = subflake_layout(3, &parent, false, true)?;
  assert_eq!(children.len(), 4);
  // the inverted triangle of the Sierpinski gasket
  assert_close(children[3].radius, 0.5);
  Ok(())
}

#[test] fn center_polygon_radii() -> Result<()> {
  let parent = Placement::new(1.0, P2::origin());
  let center = |sides, edge_centered| -> Result<f64> {
    Ok(subflake_layout(sides, &parent, edge_centered, true)?[sides].radius)
  };
  // even: ring radius minus child radius
  assert_close(center(6, false)?, 1.0 / 3.0);
  assert_close(center(8, false)?, 1.0 - 2.0 / (2.0 + 2f64.sqrt()));
  assert_close(center(4, true)?, 1.0 / 3.0);
  // odd, vertex-centered
  let cos = (PI / 5.0).cos();
  let s = 2.0 * (1.0 + (TAU / 5.0).cos());
  assert_close(center(5, false)?, (1.0 - (1.0 + cos) / s) / cos);
  // odd, edge-centered
  assert_close(center(5, true)?, cos - (1.0 + cos) / 3.0);
  Ok(())
}

#[test] fn square_scenario() -> Result<()> {
  let children = FlakeConfig::<f64>::new(4, 1).generate()?;
  let expected = [(0.0, 0.5), (0.5, 0.0), (0.0, -0.5), (-0.5, 0.0)];
  assert_eq!(children.len(), 4);
  for (child, (x, y)) in children.iter().zip(expected) {
    assert_close(child.radius, 0.5);
    assert_close(child.center.x, x);
    assert_close(child.center.y, y);
    assert_eq!(child.role, Role::Ordinary);
  }
  Ok(())
}

#[test] fn vertex_centered_spacing() -> Result<()> {
  for sides in 3..=12 {
    let children = subflake_layout(sides, &Placement::<f64>::new(1.0, P2::origin()), false, false)?;
    let angles = children.iter()
      .map(|c| c.center.x.atan2(c.center.y))
      .collect::<Vec<_>>();
    assert_close(angles[0], 0.0);
    angles.windows(2).for_each(|w|
      assert_close((w[1] - w[0]).rem_euclid(TAU), TAU / sides as f64)
    );
    let distance = children[0].center.to_vector().length();
    children.iter().for_each(|c| assert_close(c.center.to_vector().length(), distance));
  }
  Ok(())
}

#[test] fn edge_centered_phase() -> Result<()> {
  let sides = 10;
  let parent = Placement::<f64>::new(1.0, P2::origin());
  let children = subflake_layout(sides, &parent, true, false)?;
  let child_radius = 1.0 / scale_factor::<f64>(sides, true)?;
  let ring = (1.0 - child_radius) * (PI / 10.0).cos();
  assert_close(children[0].center.x.atan2(children[0].center.y), PI / 10.0);
  assert_close(children[0].center.to_vector().length(), ring);
  Ok(())
}

#[test] fn children_stay_inside_parent() -> Result<()> {
  let parent = Placement::new(1.0, P2::origin());
  for sides in 3..=16 {
    for edge_centered in [false, true] {
      subflake_layout(sides, &parent, edge_centered, true)?.iter().for_each(|c|
        assert!(c.center.to_vector().length() + c.radius <= 1.0 + 1e-9)
      );
    }
  }
  Ok(())
}

#[test] fn growth_law() -> Result<()> {
  for sides in 3..=7 {
    for k in 1..=4 {
      let count = FlakeConfig::<f64>::new(sides, k).generate()?.len();
      assert_eq!(count, sides.pow(k));
    }
  }
  for k in 1..=4 {
    let count = FlakeConfig::<f64>::new(6, k).with_center(true).generate()?.len();
    assert_eq!(count, 7usize.pow(k));
  }
  Ok(())
}

#[test] fn origin_and_radius() -> Result<()> {
  let config = FlakeConfig::new(4, 1)
    .with_top_radius(2.0)
    .with_origin(P2::new(2.0, 3.0));
  let children = config.generate()?;
  assert_close(children[0].radius, 1.0);
  assert_close(children[0].center.x, 2.0);
  assert_close(children[0].center.y, 4.0);
  Ok(())
}

#[test] fn center_role_is_inherited() -> Result<()> {
  let center = Placement::new(1.0, P2::origin()).with_role(Role::Center);
  let children = subflake_layout(6, &center, false, true)?;
  assert!(children.iter().all(Placement::is_center));

  // C(k+1) = 6 C(k) + 7^k
  let flake = FlakeConfig::<f64>::new(6, 2).with_center(true).generate()?;
  assert_eq!(flake.iter().filter(|p| p.is_center()).count(), 13);
  Ok(())
}

#[test] fn only_centermost_colored_even() -> Result<()> {
  let config = FlakeConfig::<f64>::new(6, 3)
    .with_center(true)
    .with_only_centermost_colored(true);
  let flake = config.generate()?;
  // one center polygon per parent of the last step
  assert_eq!(flake.iter().filter(|p| p.is_center()).count(), 49);
  // geometry is unaffected
  let plain = config.with_only_centermost_colored(false).generate()?;
  assert!(flake.iter().zip(&plain).all(|(a, b)| a.radius == b.radius && a.center == b.center));
  Ok(())
}

#[test] fn only_centermost_colored_odd_is_noop() -> Result<()> {
  let config = FlakeConfig::<f64>::new(5, 3).with_center(true);
  assert_eq!(
    config.with_only_centermost_colored(true).generate()?,
    config.generate()?
  );
  Ok(())
}

#[test] fn parallel_expansion_matches_serial() -> Result<()> {
  // the last step expands 8^4 = 4096 parents on the rayon pool
  let config = FlakeConfig::<f64>::new(8, 5).with_edge_centered(true);
  let flake = config.generate()?;

  let mut frontier = vec![config.root()];
  for _ in 0..5 {
    let mut next = vec![];
    for parent in &frontier {
      next.extend(subflake_layout(8, parent, true, false)?);
    }
    frontier = next;
  }
  assert_eq!(flake, frontier);
  Ok(())
}
