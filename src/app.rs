use crate::biome;
use crate::color::Rgb;
use crate::input::{poll_actions, Action};
use crate::light::Light;
use crate::planet;
use crate::render::{canvas_to_cells, write_str, Terminal};
use crate::terrain::Terrain;
use anyhow::{bail, Result};
use clap::Parser;
use crossterm::style::Color;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

const BACKGROUND: Rgb = Rgb::new(4, 5, 8);

#[derive(Parser, Debug)]
#[command(about = "A rotating, lit, noise-textured planet in your terminal")]
pub(crate) struct Args {
    /// disc radius in pixels (0 = fit to terminal)
    #[arg(long, default_value_t = 0)]
    radius: i32,

    /// frame cap
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// light rotation speed, radians per second
    #[arg(long, default_value_t = 0.6)]
    speed: f32,

    /// base noise scale of the terrain
    #[arg(long, default_value_t = crate::terrain::DEFAULT_SCALE)]
    scale: f64,

    /// terrain seed (0 = randomize)
    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// light intensity
    #[arg(long, default_value_t = 1.0)]
    intensity: f32,

    /// bare normal-map shading, no terrain or biomes
    #[arg(long)]
    flat: bool,
}

struct App {
    term: Terminal,
    terrain: Terrain,
    scale: f64,
    fixed_radius: i32,
    fps: u32,
    speed: f32,
    intensity: f32,
    angle: f32,
    textured: bool,
    paused: bool,
    show_hud: bool,
}

pub(crate) fn run() -> Result<()> {
    let args = Args::parse();
    if args.radius < 0 {
        bail!("--radius must be positive (or 0 for auto-fit), got {}", args.radius);
    }
    if args.intensity < 0.0 {
        bail!("--intensity must be non-negative, got {}", args.intensity);
    }
    if args.fps == 0 {
        bail!("--fps must be at least 1");
    }
    biome::validate(&biome::EARTH)?;

    let seed = if args.seed == 0 {
        rand::random::<u32>()
    } else {
        args.seed
    };

    let mut app = App {
        term: Terminal::begin()?,
        terrain: Terrain::new(seed, args.scale),
        scale: args.scale,
        fixed_radius: args.radius,
        fps: args.fps.clamp(1, 240),
        speed: args.speed,
        intensity: args.intensity,
        angle: 0.0,
        textured: !args.flat,
        paused: false,
        show_hud: true,
    };

    let res = app.frame_loop();
    app.term.end()?;
    res
}

impl App {
    fn frame_loop(&mut self) -> Result<()> {
        let frame_dt = Duration::from_secs_f32(1.0 / self.fps as f32);
        let mut last = Instant::now();

        loop {
            let frame_start = Instant::now();
            self.term.resize_if_needed()?;

            for action in poll_actions(frame_dt)? {
                match action {
                    Action::Quit => return Ok(()),
                    Action::TogglePause => self.paused = !self.paused,
                    Action::SpeedUp => self.speed += 0.1,
                    Action::SpeedDown => self.speed -= 0.1,
                    Action::ToggleTexture => self.textured = !self.textured,
                    Action::Reseed => self.terrain = Terrain::new(rand::random(), self.scale),
                    Action::ToggleHud => self.show_hud = !self.show_hud,
                }
            }

            let now = Instant::now();
            let dt = (now - last).as_secs_f32().min(0.1);
            last = now;
            if !self.paused {
                self.angle = (self.angle + self.speed * dt).rem_euclid(TAU);
            }

            if self.term.cols < 20 || self.term.rows < 10 {
                self.term.cur.clear();
                write_str(
                    &mut self.term.cur,
                    0,
                    0,
                    "terminal too small",
                    Color::White,
                    Color::Black,
                );
                self.term.present()?;
                std::thread::sleep(Duration::from_millis(100));
                continue;
            }

            self.render_frame();
            self.term.present()?;

            spin_sleep(frame_dt.saturating_sub(frame_start.elapsed()), Instant::now());
        }
    }

    fn render_frame(&mut self) {
        let light = Light::from_angle(self.angle, self.intensity);

        self.term.canvas.clear(BACKGROUND);

        let (w, h) = (self.term.canvas.w, self.term.canvas.h);
        let fit = (w.min(h) * 9 / 20).max(1);
        let radius = if self.fixed_radius > 0 {
            self.fixed_radius.min(w.min(h) / 2 - 1).max(1)
        } else {
            fit
        };

        let surface = self
            .textured
            .then_some((&self.terrain, biome::EARTH.as_slice()));
        planet::render(&mut self.term.canvas, w / 2, h / 2, radius, &light, surface);

        canvas_to_cells(&self.term.canvas, &mut self.term.cur, BACKGROUND);

        if self.show_hud {
            let hud = format!(
                " angle {:>5.2}  speed {:>5.2}  seed {:08x}  {}{} | space pause  arrows speed  t texture  r reseed  h hud  q quit ",
                self.angle,
                self.speed,
                self.terrain.seed(),
                if self.textured { "terrain" } else { "flat" },
                if self.paused { " (paused)" } else { "" },
            );
            write_str(
                &mut self.term.cur,
                0,
                0,
                &hud,
                Color::Rgb {
                    r: 160,
                    g: 170,
                    b: 185,
                },
                Color::Black,
            );
        }
    }
}

fn spin_sleep(target: Duration, now: Instant) {
    let end = now + target;
    loop {
        let t = Instant::now();
        if t >= end {
            break;
        }
        if end - t > Duration::from_millis(2) {
            std::thread::sleep(Duration::from_millis(1));
        } else {
            std::hint::spin_loop();
        }
    }
}
