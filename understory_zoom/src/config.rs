// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use understory_tween::Easing;

/// What an activation does while the view is already zoomed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RetargetMode {
    /// Zoom back out to the identity transform (the activation is a toggle).
    #[default]
    ZoomOut,
    /// Stay zoomed and glide the transform origin and translation over to the
    /// new focal point.
    Retarget,
}

/// Timing and scale policy for a [`ZoomController`](crate::ZoomController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Duration of the zoom-in (and retarget) transition.
    pub zoom_in_duration: Duration,
    /// Duration of the zoom-out transition.
    pub zoom_out_duration: Duration,
    /// Easing applied to every transition.
    pub easing: Easing,
    /// Scale used by pointer activations until a target supplies its own.
    pub default_scale: f64,
    /// Smallest scale a zoom-in may target. Smaller requests are raised to it.
    pub min_scale: f64,
    /// Behavior of an activation while zoomed in.
    pub retarget: RetargetMode,
}

impl ZoomConfig {
    /// Default zoom-in duration.
    pub const ZOOM_IN_DURATION: Duration = Duration::from_millis(600);
    /// Default zoom-out duration.
    pub const ZOOM_OUT_DURATION: Duration = Duration::from_millis(400);
    /// Default pointer activation scale.
    pub const DEFAULT_SCALE: f64 = 5.0;

    /// Sets the zoom-in duration.
    #[must_use]
    pub fn with_zoom_in_duration(mut self, duration: Duration) -> Self {
        self.zoom_in_duration = duration;
        self
    }

    /// Sets the zoom-out duration.
    #[must_use]
    pub fn with_zoom_out_duration(mut self, duration: Duration) -> Self {
        self.zoom_out_duration = duration;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the pointer activation scale.
    #[must_use]
    pub fn with_default_scale(mut self, scale: f64) -> Self {
        self.default_scale = scale;
        self
    }

    /// Sets the minimum zoom-in scale.
    #[must_use]
    pub fn with_min_scale(mut self, scale: f64) -> Self {
        self.min_scale = scale;
        self
    }

    /// Sets the behavior of activations while zoomed in.
    #[must_use]
    pub fn with_retarget(mut self, mode: RetargetMode) -> Self {
        self.retarget = mode;
        self
    }

    /// Validates a requested scale.
    ///
    /// Returns `None` for non-finite or non-positive scales, otherwise the
    /// scale raised to at least [`ZoomConfig::min_scale`].
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> Option<f64> {
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        Some(scale.max(self.min_scale))
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_in_duration: Self::ZOOM_IN_DURATION,
            zoom_out_duration: Self::ZOOM_OUT_DURATION,
            easing: Easing::EaseInOut,
            default_scale: Self::DEFAULT_SCALE,
            min_scale: 1.0,
            retarget: RetargetMode::ZoomOut,
        }
    }
}
