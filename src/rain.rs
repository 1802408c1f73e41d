//! Matrix-rain drop state: per-column fall positions and the per-tick
//! advance/draw rules. Rendering and timers live in `overlay.rs`; this module
//! stays pure (entropy comes in as a closure) so the column arithmetic can be
//! tested natively.

/// Glyph cell size in CSS pixels; also the font size and column width.
pub const CELL: u32 = 14;
/// Paint tick period (~30 fps).
pub const TICK_MS: i32 = 33;
/// Wall-clock lifetime of the overlay before auto-teardown.
pub const LIFETIME_MS: i32 = 10_000;
/// A column past the bottom restarts only when `random() > RESTART_BAR`
/// (~2.5% per tick), giving independent variable-length streams.
pub const RESTART_BAR: f64 = 0.975;
/// Two-symbol alphabet the rain is drawn from.
pub const GLYPHS: [char; 2] = ['0', '1'];

/// Fall position of every column, in cells from the top of the surface.
///
/// Column count is fixed at creation (`floor(width / CELL)`) and never
/// recomputed, even if the window resizes while the overlay is live.
pub struct RainField {
    height: u32,
    drops: Vec<u32>,
}

impl RainField {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            height,
            drops: vec![1; (width / CELL) as usize],
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Advance one frame: for each column pick a glyph, hand its pixel
    /// position to `draw`, then move the column down one cell (restarting at
    /// the top with small probability once it has fallen past the bottom).
    ///
    /// `rng` must yield uniform values in `[0, 1)`; per column it is sampled
    /// once for the glyph and, only when the column is past the bottom, once
    /// more for the restart decision.
    pub fn step(&mut self, mut rng: impl FnMut() -> f64, mut draw: impl FnMut(f64, f64, char)) {
        for (col, drop) in self.drops.iter_mut().enumerate() {
            let pick = (rng() * GLYPHS.len() as f64) as usize;
            let glyph = GLYPHS[pick.min(GLYPHS.len() - 1)];
            draw((col as u32 * CELL) as f64, (*drop * CELL) as f64, glyph);

            if *drop * CELL > self.height && rng() > RESTART_BAR {
                *drop = 0;
            }
            *drop += 1;
        }
    }
}
