//! Heightfield - 1D snow depth surface across the scene width
//!
//! One `f32` per column, depth in scene units above the bottom edge.
//! Every operation keeps `0 <= heights[i] <= max_depth`.
//!
//! The field is sized once per viewport. A resize builds a new field; the old
//! pile is discarded rather than resampled.

mod relax;
mod scoop;


/// Default column width in scene units.
pub const DEFAULT_COLUMN_WIDTH: f32 = 6.0;

/// Column layout, exported alongside the heights for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnMeta {
    pub cols: usize,
    pub col_w: f32,
    pub width: f32,
    pub height: f32,
}

pub struct Heightfield {
    cols: usize,
    col_w: f32,
    width: f32,
    height: f32,
    max_depth: f32,
    heights: Vec<f32>,
    // Relaxation output, swapped with `heights` after each smoothing pass
    scratch: Vec<f32>,
}

impl Heightfield {
    pub fn new(cols: usize, col_w: f32, width: f32, height: f32, max_depth: f32) -> Self {
        let cols = cols.max(1);
        Self {
            cols,
            col_w: col_w.max(f32::EPSILON),
            width,
            height,
            max_depth: max_depth.max(0.0),
            heights: vec![0.0; cols],
            scratch: vec![0.0; cols],
        }
    }

    /// Field covering a `width` x `height` viewport with `ceil(width / col_w)` columns.
    pub fn for_viewport(width: f32, height: f32, col_w: f32, max_depth: f32) -> Self {
        let cols = (width / col_w).ceil().max(1.0) as usize;
        Self::new(cols, col_w, width, height, max_depth)
    }

    pub fn cols(&self) -> usize { self.cols }

    pub fn col_w(&self) -> f32 { self.col_w }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn max_depth(&self) -> f32 { self.max_depth }

    pub fn heights(&self) -> &[f32] { &self.heights }

    pub fn meta(&self) -> ColumnMeta {
        ColumnMeta {
            cols: self.cols,
            col_w: self.col_w,
            width: self.width,
            height: self.height,
        }
    }

    /// Column under world x. Off-screen coordinates clamp to the edge columns.
    #[inline]
    pub fn column_at(&self, x: f32) -> usize {
        let idx = (x / self.col_w).floor();
        // NaN falls through both comparisons and lands on column 0
        if idx >= (self.cols - 1) as f32 {
            self.cols - 1
        } else if idx > 0.0 {
            idx as usize
        } else {
            0
        }
    }

    /// Depth of the column under world x.
    #[inline]
    pub fn depth_at(&self, x: f32) -> f32 {
        self.heights[self.column_at(x)]
    }

    /// Screen-space y of the snow surface under world x.
    #[inline]
    pub fn surface_y(&self, x: f32) -> f32 {
        self.height - self.depth_at(x)
    }

    /// Mean depth over all columns.
    pub fn average_height(&self) -> f32 {
        self.total() / self.cols as f32
    }

    /// Sum of all column depths.
    pub fn total(&self) -> f32 {
        self.heights.iter().sum()
    }

    #[inline]
    fn clamp_depth(&self, v: f32) -> f32 {
        v.clamp(0.0, self.max_depth)
    }
}
