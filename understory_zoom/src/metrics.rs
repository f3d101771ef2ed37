// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Size of the visible viewport in pixels, and its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    size: Size,
}

impl ViewportMetrics {
    /// Creates metrics for a viewport of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Viewport size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Viewport height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Center of the viewport, measured from its top-left corner.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}
