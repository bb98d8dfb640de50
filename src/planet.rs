//! The per-pixel pipeline: walks the disc's bounding square, rebuilds a
//! surface normal for every visible pixel, and shades it either as bare
//! normal-map colors or as noise terrain mapped through the biome bands.

use crate::biome::{self, BiomeStop};
use crate::color::Rgb;
use crate::light::Light;
use crate::render::PixelCanvas;
use crate::sphere;
use crate::terrain::Terrain;

/// Ambient floor for the textured planet.
pub(crate) const AMBIENT_TEXTURED: f32 = 0.2;
/// Ambient floor for the flat normal-map variant.
pub(crate) const AMBIENT_FLAT: f32 = 0.1;

/// Renders one frame of the planet into `canvas`, centered at `(cx, cy)`
/// with the given disc radius. `surface` selects the pipeline: terrain and
/// biome stages when present, bare normal-map shading when not. Every
/// visible pixel is written exactly once; rejected pixels are skipped with
/// no write.
pub(crate) fn render(
    canvas: &mut PixelCanvas,
    cx: i32,
    cy: i32,
    radius: i32,
    light: &Light,
    surface: Option<(&Terrain, &[BiomeStop])>,
) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let Some(normal) = sphere::surface_normal(dx, dy, radius) else {
                continue;
            };

            let (base, shade) = match surface {
                Some((terrain, stops)) => {
                    let height = terrain.height(normal);
                    let base = biome::color_for(stops, height);
                    // Perturb the lighting normal by the terrain height so
                    // relief reads through the shading. A height of zero
                    // collapses the vector; normalized() passes it through
                    // and the shade bottoms out at the ambient floor.
                    let bumped = normal.scale(height).normalized();
                    (base, light.shade(bumped, AMBIENT_TEXTURED))
                }
                None => {
                    let channel = |v: f32| ((v + 1.0) * 127.5) as u8;
                    let base = Rgb::new(channel(normal.x), channel(normal.y), channel(normal.z));
                    (base, light.shade(normal, AMBIENT_FLAT))
                }
            };

            canvas.put(cx + dx, cy + dy, base.scale(shade));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::EARTH;
    use crate::terrain::DEFAULT_SCALE;

    const MARK: Rgb = Rgb::new(1, 2, 3);

    fn marked_canvas(w: i32, h: i32) -> PixelCanvas {
        let mut c = PixelCanvas::new(w, h);
        c.clear(MARK);
        c
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let light = Light::from_angle(0.0, 1.0);
        let terrain = Terrain::new(7, DEFAULT_SCALE);

        let mut a = marked_canvas(120, 120);
        let mut b = marked_canvas(120, 120);
        render(&mut a, 60, 60, 50, &light, Some((&terrain, &EARTH[..])));
        render(&mut b, 60, 60, 50, &light, Some((&terrain, &EARTH[..])));
        assert_eq!(a.px, b.px);

        // And a second pass over an already-rendered canvas changes nothing.
        render(&mut a, 60, 60, 50, &light, Some((&terrain, &EARTH[..])));
        assert_eq!(a.px, b.px);
    }

    #[test]
    fn pixels_outside_the_bounding_square_are_untouched() {
        let light = Light::from_angle(1.3, 1.0);
        let mut canvas = marked_canvas(100, 100);
        let (cx, cy, r) = (50, 50, 20);
        render(&mut canvas, cx, cy, r, &light, None);

        for y in 0..100 {
            for x in 0..100 {
                if (x - cx).abs() > r || (y - cy).abs() > r {
                    assert_eq!(canvas.get(x, y), MARK, "stray write at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn disc_corners_are_skipped() {
        let light = Light::from_angle(0.0, 1.0);
        let mut canvas = marked_canvas(100, 100);
        render(&mut canvas, 50, 50, 40, &light, None);
        // Bounding-square corners fail the disc test and keep the marker.
        assert_eq!(canvas.get(10, 10), MARK);
        assert_eq!(canvas.get(90, 90), MARK);
        // The center is always written.
        assert_ne!(canvas.get(50, 50), MARK);
    }

    #[test]
    fn flat_center_pixel_matches_the_normal_map_formula() {
        // At the disc center the normal is (0, 0, 1) and a light along +x
        // leaves only the ambient floor.
        let light = Light::from_angle(0.0, 1.0);
        let mut canvas = marked_canvas(30, 30);
        render(&mut canvas, 15, 15, 10, &light, None);
        let expected = Rgb::new(127, 127, 255).scale(AMBIENT_FLAT);
        assert_eq!(canvas.get(15, 15), expected);
    }

    #[test]
    fn textured_render_with_fixed_seed_is_deterministic_across_instances() {
        let light = Light::from_angle(0.0, 1.0);
        let t1 = Terrain::new(42, DEFAULT_SCALE);
        let t2 = Terrain::new(42, DEFAULT_SCALE);

        let mut a = marked_canvas(90, 90);
        let mut b = marked_canvas(90, 90);
        render(&mut a, 45, 45, 40, &light, Some((&t1, &EARTH[..])));
        render(&mut b, 45, 45, 40, &light, Some((&t2, &EARTH[..])));
        assert_eq!(a.px, b.px);
    }
}
