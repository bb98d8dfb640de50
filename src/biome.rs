//! Height-to-color gradient across ordered biome bands. Adjacent stops
//! share a boundary color, so the gradient is continuous at every
//! threshold crossing.

use crate::color::Rgb;
use anyhow::{bail, Result};

#[derive(Clone, Copy, Debug)]
pub(crate) struct BiomeStop {
    pub(crate) height: f32,
    pub(crate) color: Rgb,
}

/// Earth-ish bands: deep ocean, shallow ocean, beach, grass, mountain,
/// snow. Heights below -0.1 blend shallow into deep ocean, 0.1..0.5 blends
/// grass into rock, everything above 0.5 runs toward snow.
pub(crate) static EARTH: [BiomeStop; 6] = [
    BiomeStop {
        height: -1.0,
        color: Rgb::new(8, 24, 72),
    },
    BiomeStop {
        height: -0.1,
        color: Rgb::new(26, 88, 148),
    },
    BiomeStop {
        height: 0.0,
        color: Rgb::new(212, 196, 140),
    },
    BiomeStop {
        height: 0.1,
        color: Rgb::new(62, 138, 58),
    },
    BiomeStop {
        height: 0.5,
        color: Rgb::new(112, 104, 96),
    },
    BiomeStop {
        height: 1.0,
        color: Rgb::new(240, 246, 250),
    },
];

/// Bad band tables are a programming error; reject them at startup instead
/// of checking per pixel.
pub(crate) fn validate(stops: &[BiomeStop]) -> Result<()> {
    if stops.len() < 2 {
        bail!("biome table needs at least two stops, got {}", stops.len());
    }
    for pair in stops.windows(2) {
        if pair[1].height <= pair[0].height {
            bail!(
                "biome thresholds must increase strictly: {} then {}",
                pair[0].height,
                pair[1].height
            );
        }
    }
    Ok(())
}

/// Locates the band `height` falls into and blends between its boundary
/// colors. Heights past either end of the table extrapolate along the
/// outermost band; the channel clamp in `Rgb::lerp` saturates the result.
pub(crate) fn color_for(stops: &[BiomeStop], height: f32) -> Rgb {
    let mut i = stops.len() - 2;
    for k in 0..stops.len() - 1 {
        if height < stops[k + 1].height {
            i = k;
            break;
        }
    }
    let a = stops[i];
    let b = stops[i + 1];
    let t = (height - a.height) / (b.height - a.height);
    a.color.lerp(b.color, t)
}
