#![allow(non_snake_case)]
use {
  euclid::Point2D,
  image::{Pixel, Rgba, RgbaImage},
  num_traits::ToPrimitive,
  crate::{
    drawing::{Draw, Paint, Texture, Viewport},
    geometry::{BoundingBox, PixelSpace, Real, Shape},
    sdf::SDF
  }
};

impl <T, Cutie> Draw<T, RgbaImage> for Texture<Cutie, Paint>
  where T: Real,
        Cutie: Shape<T>
{
  fn draw(&self, image: &mut RgbaImage, viewport: &Viewport<T>) {
    let Paint { fill, edge, edge_width } = self.texture;
    let half_width = 0.5 * edge_width;
    // antialiasing reaches half a pixel past the outline
    let padding = T::from(half_width + 1.0).unwrap_or_else(T::one);
    let bounding_box = match viewport.pixel_box(self.bounding_box(), padding) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let half = T::from(0.5).unwrap_or_else(T::zero);

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let center = Point2D::<_, PixelSpace>::new(
          T::from(x).unwrap_or_else(T::zero) + half,
          T::from(y).unwrap_or_else(T::zero) + half
        );
        // distance in pixels
        let Δ = (self.sdf(viewport.to_world(center)) * viewport.scale)
          .to_f32()
          .unwrap_or(f32::MAX);

        let fill_coverage = (0.5 - Δ).clamp(0.0, 1.0);
        let edge_coverage = if edge_width > 0.0 {
          (half_width + 0.5 - Δ.abs()).clamp(0.0, 1.0)
        } else {
          0.0
        };
        if fill_coverage <= 0.0 && edge_coverage <= 0.0 {
          return;
        }
        let pixel = image.get_pixel_mut(x, y);
        *pixel = overlay_aa(*pixel, fill, fill_coverage);
        *pixel = overlay_aa(*pixel, edge, edge_coverage);
      });
  }
}

/// Blend `col2` over `col1`, with the alpha of `col2` scaled by `coverage`.
fn overlay_aa(mut col1: Rgba<u8>, mut col2: Rgba<u8>, coverage: f32) -> Rgba<u8> {
  col2.0[3] = ((col2.0[3] as f32) * coverage.min(1.0)).round() as u8;
  match col2.0[3] {
    0 => col1,
    255 => col2,
    _ => {
      col1.blend(&col2);
      col1
    }
  }
}

/// Draw shapes on one framebuffer per rayon thread, then overlay them onto `framebuffer`.
///
/// Shapes are shuffled first, so that threads get an even share of large and small shapes.
/// Order between overlapping shapes of the same batch is not preserved.
pub fn draw_parallel<T, S>(framebuffer: &mut RgbaImage, mut shapes: Vec<S>, viewport: &Viewport<T>)
  where T: Real,
        S: Draw<T, RgbaImage> + Send + Sync
{
  use {
    rand::prelude::*,
    rayon::prelude::*
  };

  if shapes.is_empty() {
    return;
  }
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  shapes.shuffle(&mut rng);

  let (width, height) = framebuffer.dimensions();
  let num_threads = rayon::current_num_threads().clamp(1, shapes.len());
  let chunk_size = (shapes.len() + num_threads - 1) / num_threads;

  let partial_buffers = shapes.par_chunks(chunk_size)
    .map(|chunk| {
      let mut buffer = RgbaImage::new(width, height);
      chunk.iter().for_each(|shape| shape.draw(&mut buffer, viewport));
      buffer
    })
    .collect::<Vec<_>>();

  for buffer in &partial_buffers {
    framebuffer.pixels_mut()
      .zip(buffer.pixels())
      .for_each(|(dst, src)| *dst = overlay_aa(*dst, *src, 1.0));
  }
}
