use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend. `t` is intentionally not clamped; band
    /// thresholds keep it in [0, 1] for in-range heights, and the channel
    /// clamp saturates the rare out-of-range sample.
    pub(crate) fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let f = |a: u8, b: u8| -> u8 {
            ((a as f32) + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
        }
    }

    pub(crate) fn scale(self, k: f32) -> Rgb {
        let k = k.max(0.0);
        let f = |a: u8| -> u8 { ((a as f32) * k).round().clamp(0.0, 255.0) as u8 };
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    pub(crate) fn to_color(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_blends_each_channel() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(100, 0, 200);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(50, 50, 200));
    }

    #[test]
    fn scale_clamps_at_white() {
        let c = Rgb::new(200, 200, 200);
        assert_eq!(c.scale(2.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn scale_by_zero_is_black() {
        assert_eq!(Rgb::new(255, 128, 7).scale(0.0), Rgb::new(0, 0, 0));
    }
}
