mod app;
mod biome;
mod color;
mod input;
mod light;
mod planet;
mod render;
mod sphere;
mod terrain;
mod vec3;

use anyhow::Result;

fn main() -> Result<()> {
    app::run()
}
