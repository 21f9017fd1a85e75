//! Raster rendering of flakes.
//!
//! A [`Figure`] collects flakes (or arbitrary placements) as layers, fits its view around
//! all of them and draws each placement as a filled and stroked regular polygon.
//! Later layers are drawn on top of earlier ones.

use {
  crate::{
    error::{Result, invalid_argument},
    flake::{self, FlakeConfig},
    geometry::{self, BoundingBox, Placement, PixelSpace, Real, Role, Shape, WorldSpace, P2},
    sdf::SDF,
    util
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  std::path::Path
};

mod impl_draw_rgbaimage;
pub use impl_draw_rgbaimage::draw_parallel;

/// Default ceiling of [`Figure::with_max_shapes`].
pub const DEFAULT_MAX_SHAPES: u64 = 1_000_000;
/// Layers with at least this many polygons are drawn with [`draw_parallel`].
const PARALLEL_DRAW_THRESHOLD: usize = 256;

pub trait Draw<T, Backend>: Shape<T> {
  fn draw(&self, image: &mut Backend, viewport: &Viewport<T>);
}

pub trait DrawSync<T, Backend>: Draw<T, Backend> + Send + Sync {}
impl <T, Backend, D> DrawSync<T, Backend> for D where D: Draw<T, Backend> + Send + Sync {}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <F, S, T> SDF<F> for Texture<S, T> where S: SDF<F> {
  fn sdf(&self, pixel: P2<F>) -> F { self.shape.sdf(pixel) } }
impl <F, S, T> BoundingBox<F, WorldSpace> for Texture<S, T> where S: BoundingBox<F, WorldSpace> {
  fn bounding_box(&self) -> Box2D<F, WorldSpace> { self.shape.bounding_box() } }

/// How to paint the polygons of one flake.
///
/// Unset colors fall back when the style is resolved: the edge takes the fill color,
/// center polygons take the fill color. `alpha` multiplies the alpha of every color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
  pub fill: Rgba<u8>,
  pub edge: Option<Rgba<u8>>,
  pub center_fill: Option<Rgba<u8>>,
  /// Stroke width, pixels
  pub edge_width: f32,
  pub alpha: f32
}

impl Default for Style {
  fn default() -> Self {
    Self {
      fill: Rgba([0, 0, 0, 255]),
      edge: None,
      center_fill: None,
      edge_width: 0.5,
      alpha: 1.0
    }
  }
}

impl Style {
  pub fn new(fill: Rgba<u8>) -> Self {
    Self { fill, ..Self::default() }
  }

  pub fn with_edge(self, edge: Rgba<u8>) -> Self {
    Self { edge: Some(edge), ..self }
  }

  pub fn with_center_fill(self, center_fill: Rgba<u8>) -> Self {
    Self { center_fill: Some(center_fill), ..self }
  }

  pub fn with_edge_width(self, edge_width: f32) -> Self {
    Self { edge_width, ..self }
  }

  pub fn with_alpha(self, alpha: f32) -> Self {
    Self { alpha, ..self }
  }

  /// Apply the fallback rules.
  pub fn resolve(&self) -> Result<ResolvedStyle> {
    if !(self.edge_width.is_finite() && self.edge_width >= 0.0) {
      invalid_argument!("edge width must be non-negative, got {}", self.edge_width);
    }
    if !(0.0..=1.0).contains(&self.alpha) {
      invalid_argument!("alpha must be within [0, 1], got {}", self.alpha);
    }
    let fade = |mut color: Rgba<u8>| {
      color.0[3] = (color.0[3] as f32 * self.alpha).round() as u8;
      color
    };
    let fill = fade(self.fill);
    Ok(ResolvedStyle {
      ordinary: Paint {
        fill,
        edge: fade(self.edge.unwrap_or(self.fill)),
        edge_width: self.edge_width
      },
      center: Paint {
        fill: self.center_fill.map(fade).unwrap_or(fill),
        edge: fade(self.edge.unwrap_or(self.fill)),
        edge_width: self.edge_width
      }
    })
  }
}

/// A [`Style`] with all fallbacks applied, one [`Paint`] per role.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedStyle {
  pub ordinary: Paint,
  pub center: Paint
}

impl ResolvedStyle {
  pub fn paint(&self, role: Role) -> Paint {
    match role {
      Role::Ordinary => self.ordinary,
      Role::Center => self.center
    }
  }
}

/// Colors of a single polygon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
  pub fill: Rgba<u8>,
  pub edge: Rgba<u8>,
  pub edge_width: f32
}

/// Maps a rectangle of world space onto an image, preserving aspect ratio.
/// World `+y` points up, pixel `+y` points down.
#[derive(Debug, Copy, Clone)]
pub struct Viewport<T> {
  pub world: Box2D<T, WorldSpace>,
  pub resolution: Size2D<u32, PixelSpace>,
  /// Pixels per world unit
  pub scale: T,
  offset: V2<T, PixelSpace>
}

impl <T: Real> Viewport<T> {
  /// Fit `world`, grown by `margin` times its size on every side, in the center of the image.
  pub fn fit(world: Box2D<T, WorldSpace>, margin: T, resolution: Size2D<u32, PixelSpace>) -> Result<Self> {
    if resolution.is_empty() {
      invalid_argument!("resolution must be positive, got {:?}", resolution);
    }
    if !(margin >= T::zero() && margin.is_finite()) {
      invalid_argument!("view margin must be non-negative, got {:?}", margin);
    }
    let buffer = V2::new(world.width(), world.height()) * margin;
    let world = Box2D::new(world.min - buffer, world.max + buffer);
    if !(world.width() > T::zero() && world.height() > T::zero()) {
      invalid_argument!("cannot fit an empty area: {:?}", world);
    }
    let res = V2::new(geometry::cast::<T>(resolution.width as usize), geometry::cast(resolution.height as usize));
    let scale = (res.x / world.width()).min(res.y / world.height());
    let offset = (res - V2::new(world.width(), world.height()) * scale) / (T::one() + T::one());
    Ok(Self { world, resolution, scale, offset })
  }

  pub fn to_pixel(&self, p: P2<T>) -> Point2D<T, PixelSpace> {
    Point2D::new(
      self.offset.x + (p.x - self.world.min.x) * self.scale,
      self.offset.y + (self.world.max.y - p.y) * self.scale
    )
  }

  pub fn to_world(&self, p: Point2D<T, PixelSpace>) -> P2<T> {
    P2::new(
      self.world.min.x + (p.x - self.offset.x) / self.scale,
      self.world.max.y - (p.y - self.offset.y) / self.scale
    )
  }

  /// Pixels covered by `bounding_box` grown by `padding` pixels, clipped to the image.
  pub fn pixel_box(&self, bounding_box: Box2D<T, WorldSpace>, padding: T) -> Option<Box2D<u32, PixelSpace>> {
    let padding: V2<T, PixelSpace> = V2::splat(padding);
    let (a, b) = (self.to_pixel(bounding_box.min), self.to_pixel(bounding_box.max));
    let image = Box2D::from_size(Size2D::new(
      geometry::cast::<T>(self.resolution.width as usize),
      geometry::cast(self.resolution.height as usize)
    ));
    let (min, max) = (Point2D::new(a.x, b.y) - padding, Point2D::new(b.x, a.y) + padding);
    Box2D::new(
      Point2D::new(min.x.floor(), min.y.floor()),
      Point2D::new(max.x.ceil(), max.y.ceil())
    ).intersection(&image)
      .and_then(|x| x.try_cast())
  }
}

struct Layer<T> {
  sides: usize,
  placements: Vec<Placement<T>>,
  style: ResolvedStyle
}

/// Several flakes on one canvas.
pub struct Figure<T> {
  layers: Vec<Layer<T>>,
  view_margin: T,
  max_shapes: u64,
  background: Rgba<u8>
}

impl <T: Real> Default for Figure<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl <T: Real> Figure<T> {
  /// Transparent background, 2% view margin, [`DEFAULT_MAX_SHAPES`].
  pub fn new() -> Self {
    Self {
      layers: vec![],
      view_margin: T::from(0.02).unwrap_or_else(T::zero),
      max_shapes: DEFAULT_MAX_SHAPES,
      background: Rgba([0, 0, 0, 0])
    }
  }

  pub fn with_view_margin(self, view_margin: T) -> Self {
    Self { view_margin, ..self }
  }

  /// Ceiling on the projected shape count of every flake added afterwards.
  pub fn with_max_shapes(self, max_shapes: u64) -> Self {
    Self { max_shapes, ..self }
  }

  pub fn with_background(self, background: Rgba<u8>) -> Self {
    Self { background, ..self }
  }

  /// Generate a flake and add it as a new layer on top.
  pub fn add_flake(&mut self, config: &FlakeConfig<T>, style: Style) -> Result<&mut Self> {
    let style = style.resolve()?;
    util::ensure_shape_limit(config, self.max_shapes)?;
    let placements = config.generate()?;
    self.layers.push(Layer { sides: config.sides, placements, style });
    Ok(self)
  }

  /// Add already computed placements as a new layer on top.
  pub fn add_placements(&mut self, sides: usize, placements: Vec<Placement<T>>, style: Style) -> Result<&mut Self> {
    flake::validate_sides(sides)?;
    for p in &placements {
      flake::validate_radius(p.radius)?;
      if !(p.center.x.is_finite() && p.center.y.is_finite()) {
        invalid_argument!("polygon center must be finite, got {:?}", p.center);
      }
    }
    let style = style.resolve()?;
    self.layers.push(Layer { sides, placements, style });
    Ok(self)
  }

  pub fn layer_count(&self) -> usize {
    self.layers.len()
  }

  pub fn shape_count(&self) -> usize {
    self.layers.iter().map(|layer| layer.placements.len()).sum()
  }

  /// Union of the bounding boxes of all polygons.
  pub fn bounding_box(&self) -> Option<Box2D<T, WorldSpace>> {
    self.layers.iter()
      .filter_map(|layer| geometry::bounding_box(layer.sides, &layer.placements))
      .reduce(|a, b| a.union(&b))
  }

  pub fn viewport(&self, resolution: Size2D<u32, PixelSpace>) -> Result<Viewport<T>> {
    match self.bounding_box() {
      Some(world) => Viewport::fit(world, self.view_margin, resolution),
      None => invalid_argument!("nothing to draw")
    }
  }

  pub fn render(&self, width: u32, height: u32) -> Result<RgbaImage> {
    let mut image = RgbaImage::from_pixel(width, height, self.background);
    self.render_onto(&mut image)?;
    Ok(image)
  }

  /// Draw all layers over the current content of `image`.
  pub fn render_onto(&self, image: &mut RgbaImage) -> Result<()> {
    let viewport = self.viewport(image.dimensions().into())?;
    for layer in &self.layers {
      let shapes = layer.placements.iter()
        .map(|p| p.to_polygon(layer.sides).texture(layer.style.paint(p.role)));
      if layer.placements.len() >= PARALLEL_DRAW_THRESHOLD {
        draw_parallel(image, shapes.collect(), &viewport);
      } else {
        shapes.for_each(|shape| shape.draw(image, &viewport));
      }
    }
    Ok(())
  }

  pub fn save(&self, path: impl AsRef<Path>, width: u32, height: u32) -> Result<()> {
    self.render(width, height)?.save(path)?;
    Ok(())
  }
}
