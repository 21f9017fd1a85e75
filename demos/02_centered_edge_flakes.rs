/// Edge-centered flakes with center polygons, for even polygons from squares to octagons.
/// Every iteration from 0 up to `ITERATIONS` is overlaid in its own color.

use {
  nflake::{
    flake::FlakeConfig,
    drawing::{Figure, Style}
  },
  anyhow::Result,
  image::Rgba,
  log::info
};

const ITERATIONS: u32 = 4;
const RESOLUTION: u32 = 1800;

const PALE_AQUA: Rgba<u8> = Rgba([0xbc, 0xd4, 0xe6, 0xff]);
const STRAW: Rgba<u8> = Rgba([0xea, 0xe2, 0xac, 0xff]);
const RED: Rgba<u8> = Rgba([0xaf, 0x0a, 0x0a, 0xff]);
const LIGHT_GRAY: Rgba<u8> = Rgba([0xdc, 0xdc, 0xdc, 0xff]);
const BLUE: Rgba<u8> = Rgba([0x00, 0x99, 0xcc, 0xff]);

fn name(sides: usize) -> &'static str {
  match sides {
    3 => "Tri", 4 => "Tetra", 5 => "Penta", 6 => "Hexa", 7 => "Hepta", 8 => "Octo",
    9 => "Ennea", 10 => "Deca", 11 => "Hendeca", 12 => "Dodeca", 13 => "Trideca",
    14 => "Tetradeca", 15 => "Pentadeca",
    _ => "N"
  }
}

fn main() -> Result<()> {
  env_logger::init();

  let colors = [PALE_AQUA, STRAW, RED, LIGHT_GRAY, BLUE];

  for sides in (4..=8).step_by(2) {
    let config = FlakeConfig::<f64>::new(sides, 0)
      .with_edge_centered(true)
      .with_center(true);

    let mut figure = Figure::new().with_view_margin(0.001);
    for i in 0..=ITERATIONS {
      figure.add_flake(
        &config.with_iterations(i),
        Style::new(colors[i as usize])
          .with_edge(Rgba([0, 0, 0, 255]))
          .with_edge_width(0.5)
      )?;
    }

    let path = format!(
      "{}flake-{} {} Iterations 00-{:02}.png",
      name(sides),
      if config.include_center { 'C' } else { 'N' },
      if config.edge_centered { "Edge" } else { "Vertex" },
      ITERATIONS
    );
    figure.save(&path, RESOLUTION, RESOLUTION)?;
    info!("{} shapes -> {}", figure.shape_count(), path);
  }
  Ok(())
}
