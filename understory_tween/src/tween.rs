// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::Easing;

/// Values that can be linearly interpolated.
///
/// `t` is an eased progress value, normally in `[0, 1]`.
pub trait Lerp {
    /// Interpolates from `self` toward `to`.
    #[must_use]
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Point {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self::lerp(*self, *to, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self::lerp(*self, *to, t)
    }
}

/// A single interpolation from a start value to an end value.
///
/// Time is supplied by the caller through [`Tween::advance`]. Once the
/// elapsed time reaches the duration, [`Tween::value`] returns the end value
/// exactly, without any interpolation error.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    start: T,
    end: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Creates a tween that has not advanced yet.
    #[must_use]
    pub fn new(start: T, end: T, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Value at the start of the tween.
    #[must_use]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Value the tween settles on.
    #[must_use]
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far, never more than [`Tween::duration`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Easing curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear time fraction in `[0, 1]`. A zero-length tween is always complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Returns `true` once the elapsed time has reached the duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves the tween forward by `dt`, saturating at the duration.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.end.clone();
        }
        self.start.lerp(&self.end, self.easing.apply(self.progress()))
    }
}
