/// Hexaflake where only the center polygons of the last iteration get a color of their own.
/// Compare with the default, where descendants of center polygons keep the center color.

use {
  nflake::{
    flake::FlakeConfig,
    drawing::{Figure, Style, DEFAULT_MAX_SHAPES}
  },
  anyhow::Result,
  image::{Luma, Pixel, Rgba},
  log::info
};

fn main() -> Result<()> {
  env_logger::init();

  let config = FlakeConfig::<f64>::new(6, 4).with_center(true);
  info!("up to {} shapes, limit {}", config.shape_count(), DEFAULT_MAX_SHAPES);

  let style = Style::new(Rgba([0x19, 0x8c, 0x19, 0xff]))
    .with_center_fill(Rgba([0x8c, 0x19, 0x8c, 0xff]))
    .with_edge_width(0.0);

  for (only_centermost, path) in [(false, "hexaflake_inherited.png"), (true, "hexaflake_centermost.png")] {
    let mut figure = Figure::new().with_background(Luma([255u8]).to_rgba());
    figure.add_flake(&config.with_only_centermost_colored(only_centermost), style)?;
    figure.save(path, 1024, 1024)?;
  }

  open::that("hexaflake_centermost.png")?;
  Ok(())
}
