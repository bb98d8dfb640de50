//! Directional light orbiting the planet in the horizontal plane, plus the
//! Lambertian-with-ambient-floor shading term.

use crate::vec3::Vec3;

pub(crate) struct Light {
    pub(crate) direction: Vec3,
    pub(crate) intensity: f32,
}

impl Light {
    /// Fresh light for the given orbit angle. The direction is rebuilt
    /// from scratch every frame rather than mutated in place, so the pixel
    /// loop never observes a half-updated vector.
    pub(crate) fn from_angle(angle: f32, intensity: f32) -> Self {
        Self {
            direction: Vec3::new(angle.cos(), 0.0, angle.sin()).normalized(),
            intensity,
        }
    }

    /// Lambertian term with an ambient floor so the night side never goes
    /// fully black.
    pub(crate) fn shade(&self, normal: Vec3, floor: f32) -> f32 {
        let n = normal.normalized();
        let l = (-self.direction).normalized();
        (n.dot(l) * self.intensity).max(floor)
    }
}
