// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animated transform applied to the moveable layer.

use alloc::{format, string::String};

use kurbo::{Affine, Point, Vec2};
use understory_tween::Lerp;

/// Scale and translation of the moveable layer.
///
/// Applied as `scale(scale) translate(translation)` about the current
/// transform origin, so the translation is expressed in pre-scale pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimateState {
    /// Uniform scale factor. `1.0` is unzoomed.
    pub scale: f64,
    /// Translation in unscaled pixels.
    pub translation: Vec2,
}

impl AnimateState {
    /// The unzoomed state.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a state from a scale and translation.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns `true` for exactly `scale(1) translate(0, 0)`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Affine equivalent of applying this state about `origin`.
    ///
    /// Matches CSS `transform-origin: origin; transform: scale(s) translate(t)`,
    /// which composes as `T(origin) · S(s) · T(t) · T(-origin)`.
    #[must_use]
    pub fn to_affine(&self, origin: Point) -> Affine {
        let origin = origin.to_vec2();
        Affine::translate(origin)
            * Affine::scale(self.scale)
            * Affine::translate(self.translation)
            * Affine::translate(-origin)
    }

    /// CSS `transform` value, e.g. `scale(2) translate(0px, 50px)`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.translation.x, self.translation.y
        )
    }
}

impl Default for AnimateState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for AnimateState {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            scale: Lerp::lerp(&self.scale, &to.scale, t),
            translation: Lerp::lerp(&self.translation, &to.translation, t),
        }
    }
}

/// CSS `transform-origin` value for a point in viewport pixels, e.g. `500px 400px`.
#[must_use]
pub fn css_origin(origin: Point) -> String {
    format!("{}px {}px", origin.x, origin.y)
}
