use crate::color::Rgb;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Black,
        }
    }
}

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }

    pub(crate) fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

/// RGB framebuffer the pipeline writes into. One canvas pixel is half a
/// terminal cell tall; see `canvas_to_cells`.
pub(crate) struct PixelCanvas {
    pub(crate) w: i32,
    pub(crate) h: i32,
    pub(crate) px: Vec<Rgb>,
}

impl PixelCanvas {
    pub(crate) fn new(w: i32, h: i32) -> Self {
        Self {
            w,
            h,
            px: vec![Rgb::new(0, 0, 0); (w as usize) * (h as usize)],
        }
    }

    pub(crate) fn clear(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.w || y >= self.h {
            return;
        }
        self.px[(y as usize) * (self.w as usize) + (x as usize)] = color;
    }

    pub(crate) fn get(&self, x: i32, y: i32) -> Rgb {
        self.px[(y as usize) * (self.w as usize) + (x as usize)]
    }
}

/// Packs the canvas into cells using the upper-half-block glyph: each cell
/// shows two vertically stacked pixels, top as foreground and bottom as
/// background. Cells where both pixels equal `bg` stay blank.
pub(crate) fn canvas_to_cells(canvas: &PixelCanvas, out: &mut CellBuffer, bg: Rgb) {
    for cy in 0..out.h {
        for cx in 0..out.w {
            let top = canvas.get(cx as i32, cy as i32 * 2);
            let bottom = canvas.get(cx as i32, cy as i32 * 2 + 1);
            let i = out.idx(cx, cy);
            if top == bg && bottom == bg {
                out.cells[i] = Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg: bg.to_color(),
                };
            } else {
                out.cells[i] = Cell {
                    ch: '▀',
                    fg: top.to_color(),
                    bg: bottom.to_color(),
                };
            }
        }
    }
}

pub(crate) fn write_str(buf: &mut CellBuffer, x: u16, y: u16, s: &str, fg: Color, bg: Color) {
    if y >= buf.h {
        return;
    }
    let mut xi = x;
    for ch in s.chars() {
        if xi >= buf.w {
            break;
        }
        let i = buf.idx(xi, y);
        buf.cells[i] = Cell { ch, fg, bg };
        xi += 1;
    }
}

pub(crate) struct Terminal {
    pub(crate) out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    pub(crate) prev: CellBuffer,
    pub(crate) cur: CellBuffer,
    pub(crate) canvas: PixelCanvas,
}

impl Terminal {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
            canvas: PixelCanvas::new(cols as i32, rows as i32 * 2),
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            EndSynchronizedUpdate,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub(crate) fn resize_if_needed(&mut self) -> anyhow::Result<bool> {
        let (c, r) = terminal::size()?;
        if c == self.cols && r == self.rows {
            return Ok(false);
        }
        self.cols = c;
        self.rows = r;
        self.prev = CellBuffer::new(c, r);
        self.cur = CellBuffer::new(c, r);
        self.canvas = PixelCanvas::new(c as i32, r as i32 * 2);
        execute!(self.out, terminal::Clear(ClearType::All))?;
        Ok(true)
    }

    pub(crate) fn present(&mut self) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bg = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;
                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }
                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}
