// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;

use crate::state::{AnimateState, css_origin};

/// Render-side sink for the moveable layer.
///
/// The controller writes through this on every animation frame. Writes must
/// be cheap and idempotent: a host applies them to a DOM style, a retained
/// scene node transform, or a canvas matrix.
pub trait ZoomSurface {
    /// Applies the current scale and translation.
    fn set_transform(&mut self, state: AnimateState);

    /// Applies the current transform origin, in viewport pixels.
    fn set_transform_origin(&mut self, origin: Point);
}

impl<S: ZoomSurface + ?Sized> ZoomSurface for &mut S {
    fn set_transform(&mut self, state: AnimateState) {
        (**self).set_transform(state);
    }

    fn set_transform_origin(&mut self, origin: Point) {
        (**self).set_transform_origin(origin);
    }
}

/// A surface that keeps the CSS `transform` and `transform-origin` strings.
///
/// Hosts that render through a style attribute copy these onto the moveable
/// element after each [`ZoomController::tick`](crate::ZoomController::tick).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssStyle {
    /// Last written `transform` value; empty before the first write.
    pub transform: String,
    /// Last written `transform-origin` value; empty before the first write.
    pub transform_origin: String,
}

impl ZoomSurface for CssStyle {
    fn set_transform(&mut self, state: AnimateState) {
        self.transform = state.css_transform();
    }

    fn set_transform_origin(&mut self, origin: Point) {
        self.transform_origin = css_origin(origin);
    }
}
