// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Progress curve applied to a tween's linear time fraction.
///
/// The in/out variants are the quadratic ("power 1") family, which is gentle
/// enough for layout-scale motion such as zooming a whole page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Accelerate from rest.
    EaseIn,
    /// Decelerate to rest.
    EaseOut,
    /// Accelerate through the first half, decelerate through the second.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps a time fraction onto an eased progress value.
    ///
    /// `t` is clamped into `[0, 1]`; every curve returns exactly `0.0` at the
    /// start and `1.0` at the end.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv / 2.0
                }
            }
        }
    }
}
