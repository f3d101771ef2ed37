// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom targets: activatable leaves that know where they are and how far to zoom.
//!
//! ## Usage
//!
//! 1) Once the target's content has loaded and been laid out, call
//!    [`ZoomTarget::on_load`] with its bounding box in viewport coordinates.
//! 2) Inject a callback, normally through
//!    [`ZoomController::inject`](crate::ZoomController::inject).
//! 3) On user activation, call [`ZoomTarget::activate`].
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_zoom::{ActivationCallback, ZoomTarget};
//!
//! let seen = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&seen);
//!
//! let mut target = ZoomTarget::new();
//! target.set_callback(ActivationCallback::new(move |request| sink.set(Some(request))));
//!
//! // Clicked before the image finished loading: nothing happens.
//! assert!(!target.activate());
//!
//! target.on_load(Rect::new(400.0, 200.0, 600.0, 400.0), 800.0);
//! assert!(target.activate());
//!
//! let request = seen.get().unwrap();
//! assert_eq!(request.focal_point, Point::new(500.0, 300.0));
//! assert_eq!(request.scale, 3.8); // (800 - 2 * 20) / 200
//! ```

use alloc::rc::Rc;
use core::fmt;

use kurbo::{Point, Rect};

/// A request to zoom so that `focal_point` lands in the middle of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRequest {
    /// Point to bring to the viewport center, in viewport pixels.
    pub focal_point: Point,
    /// Scale to zoom to.
    pub scale: f64,
}

impl ZoomRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(focal_point: Point, scale: f64) -> Self {
        Self { focal_point, scale }
    }
}

/// Shared callback a [`ZoomTarget`] reports its [`ZoomRequest`] through.
///
/// Cloning is cheap; clones call the same function. Two callbacks compare
/// equal when they share the same function.
#[derive(Clone)]
pub struct ActivationCallback(Rc<dyn Fn(ZoomRequest)>);

impl ActivationCallback {
    /// Wraps `f`.
    pub fn new(f: impl Fn(ZoomRequest) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, request: ZoomRequest) {
        (self.0)(request);
    }
}

impl fmt::Debug for ActivationCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActivationCallback")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

impl PartialEq for ActivationCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// An activatable leaf, typically an image, that zooms the view onto itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTarget {
    margin: f64,
    layout: Option<ZoomRequest>,
    callback: Option<ActivationCallback>,
}

impl ZoomTarget {
    /// Default gap, in pixels, kept above and below a zoomed target.
    pub const MARGIN: f64 = 20.0;

    /// Creates an unloaded target with the default margin and no callback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            margin: Self::MARGIN,
            layout: None,
            callback: None,
        }
    }

    /// Sets the vertical margin kept around the target when zoomed.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Vertical margin kept around the target when zoomed.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Records the target's layout once its content has loaded.
    ///
    /// `bounds` is the target's bounding box in viewport coordinates. The
    /// focal point is its center; the scale fits its height into the viewport
    /// height minus the margin on each side. May be called again if layout
    /// settles later. Returns `false` and leaves the target unloaded when the
    /// box has no usable height.
    pub fn on_load(&mut self, bounds: Rect, viewport_height: f64) -> bool {
        let bounds = bounds.abs();
        let height = bounds.height();
        if !height.is_finite() || height <= 0.0 || !viewport_height.is_finite() {
            tracing::trace!(height, viewport_height, "zoom target has no usable layout");
            return false;
        }
        let scale = (viewport_height - 2.0 * self.margin) / height;
        self.layout = Some(ZoomRequest::new(bounds.center(), scale));
        true
    }

    /// Returns `true` once [`ZoomTarget::on_load`] has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.layout.is_some()
    }

    /// The request this target reports on activation, once loaded.
    #[must_use]
    pub fn request(&self) -> Option<ZoomRequest> {
        self.layout
    }

    /// Installs the activation callback, replacing any previous one.
    pub fn set_callback(&mut self, callback: ActivationCallback) {
        self.callback = Some(callback);
    }

    /// Installed activation callback, if any.
    #[must_use]
    pub fn callback(&self) -> Option<&ActivationCallback> {
        self.callback.as_ref()
    }

    /// Reports this target's [`ZoomRequest`] to the callback.
    ///
    /// Returns `false` without calling anything when the target has not
    /// loaded yet or has no callback (it is not inside a controller).
    pub fn activate(&self) -> bool {
        let Some(request) = self.layout else {
            tracing::trace!("zoom target activated before load; ignoring");
            return false;
        };
        let Some(callback) = &self.callback else {
            tracing::trace!("zoom target activated without a controller; ignoring");
            return false;
        };
        callback.call(request);
        true
    }
}

impl Default for ZoomTarget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::RefCell;

    use kurbo::{Point, Rect};

    use super::{ActivationCallback, ZoomRequest, ZoomTarget};

    fn recorder() -> (ActivationCallback, Rc<RefCell<Vec<ZoomRequest>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let callback = ActivationCallback::new(move |r| sink.borrow_mut().push(r));
        (callback, log)
    }

    #[test]
    fn scale_fits_height_minus_margins() {
        let mut target = ZoomTarget::new();
        assert!(target.on_load(Rect::new(10.0, 100.0, 110.0, 300.0), 800.0));
        let request = target.request().expect("loaded target has a request");
        assert_eq!(request.focal_point, Point::new(60.0, 200.0));
        assert_eq!(request.scale, (800.0 - 40.0) / 200.0);
    }

    #[test]
    fn custom_margin() {
        let mut target = ZoomTarget::new().with_margin(50.0);
        assert_eq!(target.margin(), 50.0);
        target.on_load(Rect::new(0.0, 0.0, 100.0, 100.0), 600.0);
        assert_eq!(target.request().map(|r| r.scale), Some(5.0));
    }

    #[test]
    fn degenerate_layout_stays_unloaded() {
        let mut target = ZoomTarget::new();
        assert!(!target.on_load(Rect::new(0.0, 50.0, 100.0, 50.0), 800.0));
        assert!(!target.is_loaded());
        assert!(!target.on_load(Rect::new(0.0, 0.0, 100.0, 100.0), f64::NAN));
        assert!(!target.is_loaded());
    }

    #[test]
    fn flipped_rect_is_normalized() {
        let mut target = ZoomTarget::new();
        assert!(target.on_load(Rect::new(100.0, 300.0, 0.0, 100.0), 440.0));
        let request = target.request().expect("normalized rect loads");
        assert_eq!(request.focal_point, Point::new(50.0, 200.0));
        assert_eq!(request.scale, 2.0);
    }

    #[test]
    fn reload_recomputes_layout() {
        let mut target = ZoomTarget::new();
        target.on_load(Rect::new(0.0, 0.0, 100.0, 100.0), 840.0);
        target.on_load(Rect::new(0.0, 400.0, 100.0, 600.0), 840.0);
        let request = target.request().expect("reloaded");
        assert_eq!(request.focal_point, Point::new(50.0, 500.0));
        assert_eq!(request.scale, 4.0);
    }

    #[test]
    fn activation_before_load_is_ignored() {
        let (callback, log) = recorder();
        let mut target = ZoomTarget::new();
        target.set_callback(callback);
        assert!(!target.activate());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn activation_without_callback_is_a_no_op() {
        let mut target = ZoomTarget::new();
        target.on_load(Rect::new(0.0, 0.0, 10.0, 10.0), 100.0);
        assert!(target.callback().is_none());
        assert!(!target.activate());
    }

    #[test]
    fn activation_forwards_center_and_scale() {
        let (callback, log) = recorder();
        let mut target = ZoomTarget::new();
        target.set_callback(callback);
        target.on_load(Rect::new(400.0, 200.0, 600.0, 400.0), 800.0);

        assert!(target.activate());
        assert!(target.activate());
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], ZoomRequest::new(Point::new(500.0, 300.0), 3.8));
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let (a, _) = recorder();
        let (b, _) = recorder();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
