//! This is a library for generating n-flakes: fractals made of regular polygons.
//!
//! Starting from a single regular `n`-gon, every polygon is replaced with `n` smaller
//! copies laid out around its center (and optionally one more in the middle), over and
//! over again. It is split into [`flake`], which computes the placements of all polygons,
//! and [`drawing`], which renders them (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use nflake::{error::Result, flake::FlakeConfig, geometry::Role};
//! # fn main() -> Result<()> {
//! // Hexaflake, 3 iterations, with a hexagon in the middle of every parent
//! let config = FlakeConfig::<f64>::new(6, 3)
//!   .with_center(true);
//!
//! // refuse to generate anything above 10'000 polygons
//! let placements = config.generate_bounded(10_000)?;
//! assert_eq!(placements.len(), 7 * 7 * 7);
//! // center polygons and all their descendants keep the `Center` role
//! assert_eq!(placements.iter().filter(|p| p.role == Role::Center).count(), 127);
//! # Ok(())
//! # }
//! ```
//! Every [`Placement`](geometry::Placement) holds a circumradius, a center, and a
//! [`Role`](geometry::Role) telling center polygons apart from the others.
//!
//! # Drawing
//! ```ignore
//! # use {
//! #   nflake::{
//! #     flake::FlakeConfig,
//! #     drawing::{Figure, Style}
//! #   },
//! #   image::Rgba
//! # };
//! # fn main() -> anyhow::Result<()> {
//! let colors = [
//!   Rgba([0xee, 0xee, 0xee, 0xff]),
//!   Rgba([0xfc, 0xf4, 0x9f, 0xff]),
//!   Rgba([0xb6, 0xdd, 0xc7, 0xff])
//! ];
//! let mut figure = Figure::new();
//! let config = FlakeConfig::<f64>::new(8, 0);
//! // overlay iterations 0, 1 and 2 of the octaflake
//! for (i, color) in colors.into_iter().enumerate() {
//!   figure.add_flake(
//!     &config.with_iterations(i as u32),
//!     Style::new(color).with_edge(Rgba([0xa8, 0xa6, 0xa5, 0xff]))
//!   )?;
//! }
//! figure.save("octoflake.png", 1024, 1024)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod flake;
pub mod util;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;

#[doc(hidden)]
pub use log;
