use super::*;

const DEPOSIT_CENTER: f32 = 0.6;
const DEPOSIT_SIDE: f32 = 0.22;

/// Fraction of the penetration depth taken by one scoop pass.
const SCOOP_RATE: f32 = 0.35;

impl Heightfield {
    /// Drop `amount` of snow at world x, split 60/22/22 over the column and
    /// its two neighbours. Each share is clamped on its own.
    pub fn deposit(&mut self, x: f32, amount: f32) {
        if !amount.is_finite() {
            return;
        }
        let i = self.column_at(x) as isize;
        self.add(i, amount * DEPOSIT_CENTER);
        self.add(i - 1, amount * DEPOSIT_SIDE);
        self.add(i + 1, amount * DEPOSIT_SIDE);
    }

    #[inline]
    fn add(&mut self, idx: isize, amount: f32) {
        if idx < 0 || idx as usize >= self.cols {
            return;
        }
        let i = idx as usize;
        self.heights[i] = self.clamp_depth(self.heights[i] + amount);
    }

    /// Scoop snow out of the rectangle `(x, y, w, h)`.
    ///
    /// Every column whose surface lies above the rectangle's bottom edge loses
    /// `penetration * 0.35`, capped by its own depth and by what is left of
    /// `max_remove`. Columns are visited left to right until the budget runs
    /// out. Returns the amount actually removed.
    pub fn remove_rect(&mut self, x: f32, y: f32, w: f32, h: f32, max_remove: f32) -> f32 {
        let bottom = y + h;
        if max_remove.is_nan() || max_remove <= 0.0 || !bottom.is_finite() {
            return 0.0;
        }

        let left = self.column_at(x);
        let right = self.column_at(x + w);

        let mut removed = 0.0f32;
        for i in left..=right {
            let depth = self.heights[i];
            let surface_y = self.height - depth;
            if bottom <= surface_y {
                continue;
            }

            let take = ((bottom - surface_y) * SCOOP_RATE).clamp(0.0, depth);
            let budget = max_remove - removed;
            if take >= budget {
                // Budget exhausted: report exactly `max_remove`
                self.heights[i] = self.clamp_depth(depth - budget);
                return max_remove;
            }

            self.heights[i] = self.clamp_depth(depth - take);
            removed += take;
        }

        removed
    }
}
