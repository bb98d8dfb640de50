//! Reconstructs a hemisphere surface normal from a 2D offset inside the
//! planet's on-screen disc. Orthographic on purpose: the sphere is small
//! enough on screen that perspective buys nothing.

use crate::vec3::Vec3;

/// Maps a pixel offset `(dx, dy)` from the disc center to the unit normal
/// of the camera-facing hemisphere, for a disc of radius `radius`.
///
/// Returns `None` when the pixel is outside the disc, or inside the
/// bounding disc but past the silhouette of the projected unit sphere.
/// Screen y grows downward, so it is flipped to keep +y up in world space.
pub(crate) fn surface_normal(dx: i32, dy: i32, radius: i32) -> Option<Vec3> {
    if dx * dx + dy * dy > radius * radius {
        return None;
    }

    let r = radius as f32;
    let nx = -(r - dx as f32) / r + 1.0;
    let ny = (r - dy as f32) / r - 1.0;

    let d2 = nx * nx + ny * ny;
    if d2 > 1.0 {
        return None;
    }

    let nz = (1.0 - d2).sqrt();
    Some(Vec3::new(nx, ny, nz).normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_disc_is_rejected() {
        let r = 150;
        assert!(surface_normal(r, r, r).is_none());
        assert!(surface_normal(0, r + 1, r).is_none());
        assert!(surface_normal(-r - 1, 0, r).is_none());
    }

    #[test]
    fn hemisphere_test_follows_the_remap() {
        // Disc membership nearly implies hemisphere membership, but float
        // rounding right at the rim can push the remapped point past the
        // unit circle. Whatever the remap says is what the function does.
        let r = 150;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let rf = r as f32;
                let nx = -(rf - dx as f32) / rf + 1.0;
                let ny = (rf - dy as f32) / rf - 1.0;
                let visible = nx * nx + ny * ny <= 1.0;
                assert_eq!(
                    surface_normal(dx, dy, r).is_some(),
                    visible,
                    "mismatch at ({dx}, {dy})"
                );
            }
        }
    }

    #[test]
    fn returned_normals_are_unit_length() {
        let r = 150;
        for dy in -r..=r {
            for dx in -r..=r {
                if let Some(n) = surface_normal(dx, dy, r) {
                    assert!(
                        (n.length() - 1.0).abs() < 1e-6,
                        "non-unit normal at ({dx}, {dy})"
                    );
                }
            }
        }
    }

    #[test]
    fn center_faces_the_camera() {
        let n = surface_normal(0, 0, 100).unwrap();
        assert!(n.x.abs() < 1e-6);
        assert!(n.y.abs() < 1e-6);
        assert!((n.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn screen_y_is_flipped() {
        // A pixel below center (dy > 0) looks at the lower half of the
        // sphere, which has negative world y.
        let n = surface_normal(0, 50, 100).unwrap();
        assert!(n.y < 0.0);
        // And right of center keeps positive x.
        let n = surface_normal(50, 0, 100).unwrap();
        assert!(n.x > 0.0);
    }
}
