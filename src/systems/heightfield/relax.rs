use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many columns a parallel pass costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_COLUMNS: usize = 4096;

/// Upper bound on the per-tick wind transfer fraction.
const MAX_DRIFT: f32 = 0.06;
const DRIFT_PER_WIND: f32 = 0.02;

/// Blend column `i` toward the mean of itself and its neighbours.
/// A missing neighbour at either edge counts as the edge column itself.
#[inline]
fn relax_column(h: &[f32], i: usize, k: f32) -> f32 {
    let b = *fast!(h, [i]);
    let a = if i > 0 { *fast!(h, [i - 1]) } else { b };
    let c = if i + 1 < h.len() { *fast!(h, [i + 1]) } else { b };
    let avg = (a + b + c) / 3.0;
    b + (avg - b) * k
}

impl Heightfield {
    /// One explicit relaxation pass with blend factor `k`.
    ///
    /// `k` is expected inside the clamped smoothness range; the pass is a
    /// convex blend for any `k` in 0..=1 so depths stay in range and the
    /// total is conserved up to rounding.
    pub fn smooth(&mut self, k: f32) {
        debug_assert!((0.0..=1.0).contains(&k), "smoothing factor {k} out of range");

        let Self { heights, scratch, .. } = self;

        #[cfg(feature = "parallel")]
        {
            if heights.len() >= PARALLEL_MIN_COLUMNS {
                let src = &*heights;
                scratch
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(i, out)| *out = relax_column(src, i, k));
                std::mem::swap(heights, scratch);
                return;
            }
        }

        for i in 0..heights.len() {
            fast!(scratch, [i] = relax_column(heights, i, k));
        }
        std::mem::swap(heights, scratch);
    }

    /// Lateral wind transfer.
    ///
    /// Each column hands `k = min(0.06, |wind| * 0.02)` of its depth to its
    /// downwind neighbour. The sweep runs against the flow, so a column's
    /// outgoing share is taken before it receives from upwind in the same pass.
    /// A transfer never exceeds the receiver's headroom below `max_depth`,
    /// which keeps the pass mass-conserving without a trailing clamp.
    pub fn drift(&mut self, wind: f32) {
        let k = (wind.abs() * DRIFT_PER_WIND).min(MAX_DRIFT);
        if k.is_nan() || k <= 0.0 {
            return;
        }

        let max = self.max_depth;
        let h = &mut self.heights;
        let n = h.len();
        if n < 2 {
            return;
        }

        if wind > 0.0 {
            for i in (0..n - 1).rev() {
                let (src, dst) = (*fast!(h, [i]), *fast!(h, [i + 1]));
                let mv = (src * k).min((max - dst).max(0.0));
                fast!(h, [i] = src - mv);
                fast!(h, [i + 1] = dst + mv);
            }
        } else {
            for i in 1..n {
                let (src, dst) = (*fast!(h, [i]), *fast!(h, [i - 1]));
                let mv = (src * k).min((max - dst).max(0.0));
                fast!(h, [i] = src - mv);
                fast!(h, [i - 1] = dst + mv);
            }
        }
    }
}
