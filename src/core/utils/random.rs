//! Frame RNG (xorshift32)
//!
//! Visual jitter only. Nothing here needs to be reproducible across runs, but
//! native tests seed it explicitly so they are.

const DEFAULT_SEED: u32 = 12345;

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Clone, Debug)]
pub struct SimRng {
    state: u32,
}

impl SimRng {
    pub fn with_seed(seed: u32) -> Self {
        // xorshift never leaves zero
        Self { state: if seed == 0 { DEFAULT_SEED } else { seed } }
    }

    /// Seed from the wall clock on wasm32, fixed seed elsewhere.
    pub fn from_clock() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::with_seed(js_sys::Date::now() as u64 as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::with_seed(DEFAULT_SEED)
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [lo, hi).
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Uniform in [-0.5, 0.5).
    #[inline]
    pub fn centered(&mut self) -> f32 {
        self.next_f32() - 0.5
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}
