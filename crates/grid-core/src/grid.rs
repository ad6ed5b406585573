//! Grid population: viewport + cell size -> a flat arena of cells.

use glam::Vec2;
use serde::Deserialize;

use crate::cell::{Cell, CellValues};
use crate::constants::{LARGE_GRID_WARN_CELLS, MIN_CELL_SIZE};

/// How a partial row or column at the viewport edge is counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    #[default]
    Floor,
    Ceil,
}

impl Rounding {
    #[inline]
    pub fn fit(self, extent: f32, size: f32) -> usize {
        if !(extent > 0.0) || !extent.is_finite() || !(size > 0.0) {
            return 0;
        }
        let n = extent / size;
        match self {
            Rounding::Floor => n.floor() as usize,
            Rounding::Ceil => n.ceil() as usize,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Static description of how a variant tiles the viewport.
///
/// Fields:
/// - `cell_width`/`cell_height`: configured pitch in CSS pixels
/// - `rows`/`cols`: rounding applied to `viewport / cell size`
/// - `stretch`: spread the columns/rows evenly over the viewport instead of
///   keeping the configured pitch (CSS `minmax(size, 1fr)` tracks)
/// - `max_cells`: optional hard ceiling on the cell count
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: Rounding,
    pub cols: Rounding,
    pub stretch: bool,
    pub max_cells: Option<usize>,
}

/// Resolved geometry of one populated grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub count: usize,
    pub pitch: Vec2,
}

impl GridLayout {
    /// Layout large enough that populating it will visibly stall the page.
    pub fn is_oversized(&self) -> bool {
        self.count > LARGE_GRID_WARN_CELLS
    }

    pub fn compute(spec: &GridSpec, viewport: Viewport) -> Self {
        let cw = spec.cell_width.max(MIN_CELL_SIZE);
        let ch = spec.cell_height.max(MIN_CELL_SIZE);
        let rows = spec.rows.fit(viewport.height, ch);
        let cols = spec.cols.fit(viewport.width, cw);
        let mut count = rows.saturating_mul(cols);
        if let Some(cap) = spec.max_cells {
            count = count.min(cap);
        }
        let pitch = if spec.stretch && rows > 0 && cols > 0 {
            Vec2::new(viewport.width / cols as f32, viewport.height / rows as f32)
        } else {
            Vec2::new(cw, ch)
        };
        Self {
            rows,
            cols,
            count,
            pitch,
        }
    }

    /// Centre of cell `index` (row-major).
    #[inline]
    pub fn center(&self, index: usize) -> Vec2 {
        let cols = self.cols.max(1);
        let col = (index % cols) as f32;
        let row = (index / cols) as f32;
        Vec2::new((col + 0.5) * self.pitch.x, (row + 0.5) * self.pitch.y)
    }

    /// Cell whose rectangle contains `point`, if any.
    pub fn cell_at(&self, point: Vec2) -> Option<usize> {
        if self.cols == 0 || !(point.x >= 0.0) || !(point.y >= 0.0) {
            return None;
        }
        let col = (point.x / self.pitch.x) as usize;
        let row = (point.y / self.pitch.y) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let index = row * self.cols + col;
        (index < self.count).then_some(index)
    }
}

/// Ordered cell collection tagged with the epoch it was built in. A rebuild
/// replaces the whole grid; no cell survives it.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    epoch: u64,
    layout: GridLayout,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn populate(spec: &GridSpec, viewport: Viewport, epoch: u64, rest: CellValues) -> Self {
        let layout = GridLayout::compute(spec, viewport);
        if layout.is_oversized() {
            log::warn!(
                "[grid] populating {} cells ({}x{}); consider setting maxCells",
                layout.count,
                layout.rows,
                layout.cols
            );
        }
        // Centres are cached once here; the per-frame scan never recomputes geometry.
        let cells = (0..layout.count)
            .map(|i| Cell::new(i, layout.center(i), rest))
            .collect();
        Self {
            epoch,
            layout,
            cells,
        }
    }

    pub fn empty(epoch: u64) -> Self {
        Self {
            epoch,
            ..Self::default()
        }
    }

    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    #[inline]
    pub fn cell_at(&self, point: Vec2) -> Option<usize> {
        self.layout.cell_at(point)
    }
}
