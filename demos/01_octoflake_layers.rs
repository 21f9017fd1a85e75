/// Overlay the first iterations of an n-flake, one color per iteration.
/// Later iterations are drawn on top of earlier ones.

use {
  nflake::{
    flake::FlakeConfig,
    drawing::{Figure, Style},
    profile
  },
  anyhow::Result,
  image::Rgba
};

const COLORS: [u32; 5] = [0xeeeeee, 0xfcf49f, 0xb6ddc7, 0x0093dd, 0xe32822];
const EDGE: u32 = 0xa8a6a5;
const EDGE_WIDTHS: [f32; 5] = [1.5, 1.0, 0.5, 0.2, 0.0];

fn rgb(code: u32) -> Rgba<u8> {
  let [_, r, g, b] = code.to_be_bytes();
  Rgba([r, g, b, 255])
}

fn layers(config: FlakeConfig<f64>, iterations: u32, colors: [u32; 5]) -> Result<Figure<f64>> {
  let mut figure = Figure::new();
  for i in 0..=iterations {
    figure.add_flake(
      &config.with_iterations(i),
      Style::new(rgb(colors[i as usize]))
        .with_edge(rgb(EDGE))
        .with_edge_width(EDGE_WIDTHS[i as usize])
    )?;
  }
  Ok(figure)
}

fn main() -> Result<()> {
  env_logger::init();

  let octoflake = layers(FlakeConfig::new(8, 0), 4, COLORS)?;
  // the last two colors swapped, as in the decaflake of the original series
  let decaflake = layers(
    FlakeConfig::new(10, 0).with_edge_centered(true),
    4,
    [COLORS[0], COLORS[1], COLORS[2], COLORS[4], COLORS[3]]
  )?;
  let dodecaflake = layers(FlakeConfig::new(12, 0), 3, COLORS)?;

  let path = "Octoflake-NC Iterations 00-04.png";
  profile!("octoflake", { octoflake.save(path, 1920, 1920)?; });
  profile!("decaflake", { decaflake.save("Decaflake-NC Iterations 00-04.png", 1920, 1920)?; });
  profile!("dodecaflake", { dodecaflake.save("Dodecaflake-NC Iterations 00-03.png", 1920, 1920)?; });

  open::that(path)?;
  Ok(())
}
