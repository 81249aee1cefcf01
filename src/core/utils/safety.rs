//! Zero-cost column access
//!
//! The heightfield passes walk every column once per pile tick with indices
//! that are already clamped to `0..cols`. In debug builds access is bounds
//! checked so a bad index panics with a useful message; release builds use
//! unchecked access.
//!
//! Usage:
//! ```rust
//! use snowdrift_engine::fast;
//!
//! let col = 2;
//!
//! let heights = vec![0.0f32, 1.5, 3.0, 4.5];
//! // Read: fast!(slice, [index])
//! let h = *fast!(heights, [col]);
//! assert_eq!(h, 3.0);
//!
//! let mut scratch = vec![0.0f32; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(scratch, [col] = h * 0.5);
//! assert_eq!(scratch[col], 1.5);
//! ```

/// Bounds-checked in debug, unchecked in release.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_reads_column() {
        let heights = vec![1.0f32, 2.0, 3.0];
        assert_eq!(*fast!(heights, [1]), 2.0);
    }

    #[test]
    fn fast_writes_column() {
        let mut heights = vec![0.0f32; 3];
        fast!(heights, [2] = 9.5);
        assert_eq!(heights[2], 9.5);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_bounds_check_debug() {
        let heights = vec![0.0f32; 3];
        let _ = *fast!(heights, [10]);
    }
}
