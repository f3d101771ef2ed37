// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::{collections::VecDeque, rc::Rc, vec::Vec};
use core::{cell::RefCell, time::Duration};

use kurbo::{Point, Size, Vec2};
use understory_tween::{Animated, TweenStep};

use crate::{
    ActivationCallback, AnimateState, Node, RetargetMode, ViewportMetrics, ZoomConfig,
    ZoomRequest, ZoomSurface,
    tree::map_forest,
};

/// Whether the view is zoomed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// At, or animating back to, the identity transform.
    #[default]
    Idle,
    /// At, or animating toward, a zoomed transform.
    Zoomed,
}

/// Click-to-zoom state machine for one viewport.
///
/// The controller owns the animated transform of a moveable layer and writes
/// it through a [`ZoomSurface`] every frame. It never reads a clock: the host
/// calls [`ZoomController::tick`] from its frame loop and keeps calling while
/// it returns `true`.
///
/// ## Transform model
///
/// Zooming onto a focal point `p` at scale `s`:
/// - the transform origin jumps to `p` (or glides there, see
///   [`RetargetMode::Retarget`]);
/// - the layer animates to `scale(s) translate((c - p) / s)` where `c` is the
///   viewport center, with the page scroll offset added to `c.y` only.
///
/// Zooming out animates back to `scale(1) translate(0, 0)` and leaves the
/// origin where it is.
///
/// ## Phase changes
///
/// The phase flips when a transition *starts*, not when it finishes. A scroll
/// during the zoom-out animation is therefore ignored, and an activation
/// during it starts a fresh zoom-in from the current interpolated state.
#[derive(Debug)]
pub struct ZoomController<S> {
    config: ZoomConfig,
    metrics: ViewportMetrics,
    container_size: Option<Size>,
    listening: bool,
    scroll_offset: Vec2,
    phase: ZoomPhase,
    active_scale: f64,
    center_y_origin: f64,
    animate: Animated<AnimateState>,
    origin: Animated<Point>,
    mailbox: Rc<RefCell<VecDeque<ZoomRequest>>>,
    surface: S,
}

impl<S: ZoomSurface> ZoomController<S> {
    /// Creates an idle controller for a viewport of `viewport` pixels.
    ///
    /// Nothing is written to `surface` until [`ZoomController::mount`].
    #[must_use]
    pub fn new(viewport: Size, config: ZoomConfig, surface: S) -> Self {
        let metrics = ViewportMetrics::new(viewport);
        let active_scale = config
            .clamp_scale(config.default_scale)
            .unwrap_or(ZoomConfig::DEFAULT_SCALE);
        Self {
            config,
            metrics,
            container_size: None,
            listening: false,
            scroll_offset: Vec2::ZERO,
            phase: ZoomPhase::Idle,
            active_scale,
            center_y_origin: metrics.center().y,
            animate: Animated::new(AnimateState::IDENTITY),
            origin: Animated::new(metrics.center()),
            mailbox: Rc::default(),
            surface,
        }
    }

    /// Attaches the controller to its rendered container.
    ///
    /// Records the container's unscaled size, starts accepting scroll events,
    /// and sets the transform origin to the viewport center.
    pub fn mount(&mut self, container: Size) {
        self.container_size = Some(container);
        self.listening = true;
        self.origin.set(self.metrics.center());
        self.per_frame_origin_update();
        tracing::debug!(
            width = container.width,
            height = container.height,
            "zoom controller mounted"
        );
    }

    /// Detaches the controller.
    ///
    /// Scroll events and queued target activations are ignored from here on,
    /// and running transitions are stopped where they are.
    pub fn unmount(&mut self) {
        self.listening = false;
        self.animate.cancel();
        self.origin.cancel();
        self.mailbox.borrow_mut().clear();
        tracing::debug!("zoom controller unmounted");
    }

    /// Returns `true` between [`ZoomController::mount`] and [`ZoomController::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    /// Updates the cached viewport size.
    ///
    /// Affects the next zoom computation; a running transition keeps its target.
    pub fn resize(&mut self, viewport: Size) {
        if self.metrics.size() == viewport {
            return;
        }
        self.metrics = ViewportMetrics::new(viewport);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "zoom viewport resized"
        );
    }

    /// Records the page scroll offset used by the next zoom-in.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll_offset = offset;
    }

    /// Page scroll offset last reported by the host.
    #[must_use]
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    /// Handles a page scroll: zooms out if zoomed in.
    ///
    /// Returns `true` if a zoom-out started. Ignored while unmounted.
    pub fn on_scroll(&mut self) -> bool {
        if !self.listening || self.phase == ZoomPhase::Idle {
            return false;
        }
        self.zoom_out();
        true
    }

    /// Handles a pointer press on the viewport itself.
    ///
    /// While idle, zooms onto the pressed point at the active scale. The focal
    /// point is `client` with the container's distance from the top of the
    /// viewport added to `y`. While zoomed, zooms out.
    ///
    /// Returns `true` if a transition started. A press that would zoom onto
    /// the identity transform leaves the controller idle and returns `false`.
    pub fn on_pointer_down(&mut self, client: Point, container_top: f64) -> bool {
        if self.phase == ZoomPhase::Zoomed {
            self.zoom_out();
            true
        } else {
            self.zoom_to_point(Point::new(client.x, client.y + container_top.abs()))
        }
    }

    /// Handles a target activation: adopts the requested scale and zooms onto
    /// the requested focal point.
    ///
    /// While zoomed, this zooms out or retargets depending on
    /// [`ZoomConfig::retarget`]. Returns `false` and does nothing for an
    /// unusable scale. Also returns `false`, after adopting the scale, when the
    /// resulting transform would be the identity: the controller is only ever
    /// enabled with a non-identity target.
    pub fn activate(&mut self, request: ZoomRequest) -> bool {
        let Some(scale) = self.config.clamp_scale(request.scale) else {
            tracing::trace!(scale = request.scale, "rejected zoom request scale");
            return false;
        };
        self.active_scale = scale;
        self.zoom_to_point(request.focal_point)
    }

    /// Animates back to the identity transform.
    pub fn zoom_out(&mut self) {
        self.animate.animate_to(
            AnimateState::IDENTITY,
            self.config.zoom_out_duration,
            self.config.easing,
        );
        self.phase = ZoomPhase::Idle;
        tracing::debug!("zoom out");
    }

    fn zoom_to_point(&mut self, focal: Point) -> bool {
        if self.phase == ZoomPhase::Zoomed && self.config.retarget == RetargetMode::ZoomOut {
            self.zoom_out();
            return true;
        }

        let center = self.metrics.center();
        let center_y_origin = center.y + self.scroll_offset.y;
        let scale = self.active_scale;
        let translation = Vec2::new(
            (center.x - focal.x) / scale,
            (center_y_origin - focal.y) / scale,
        );
        let target = AnimateState::new(scale, translation);
        if target.is_identity() {
            if self.phase == ZoomPhase::Idle {
                tracing::trace!(x = focal.x, y = focal.y, "zoom onto identity ignored");
                return false;
            }
            // Retargeting onto the identity is a zoom-out.
            self.zoom_out();
            return true;
        }
        self.center_y_origin = center_y_origin;
        let duration = self.config.zoom_in_duration;
        let easing = self.config.easing;

        if self.phase == ZoomPhase::Zoomed {
            self.origin.animate_to(focal, duration, easing);
            tracing::debug!(x = focal.x, y = focal.y, scale, "zoom retarget");
        } else {
            self.origin.set(focal);
            self.per_frame_origin_update();
            tracing::debug!(x = focal.x, y = focal.y, scale, "zoom in");
        }

        self.animate.animate_to(target, duration, easing);
        self.phase = ZoomPhase::Zoomed;
        true
    }

    /// Callback that queues requests for this controller.
    ///
    /// Queued requests are applied, in arrival order, by
    /// [`ZoomController::process_requests`] or at the start of the next
    /// [`ZoomController::tick`].
    #[must_use]
    pub fn activation_callback(&self) -> ActivationCallback {
        let mailbox = Rc::clone(&self.mailbox);
        ActivationCallback::new(move |request| mailbox.borrow_mut().push_back(request))
    }

    /// Applies queued target activations. Returns how many were applied.
    ///
    /// While unmounted, queued requests are discarded instead.
    pub fn process_requests(&mut self) -> usize {
        if !self.listening {
            let dropped = core::mem::take(&mut *self.mailbox.borrow_mut()).len();
            if dropped > 0 {
                tracing::trace!(dropped, "discarded zoom requests while unmounted");
            }
            return 0;
        }
        let mut applied = 0;
        loop {
            let next = self.mailbox.borrow_mut().pop_front();
            let Some(request) = next else {
                break;
            };
            if self.activate(request) {
                applied += 1;
            }
        }
        applied
    }

    /// Number of queued, not yet applied, target activations.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.mailbox.borrow().len()
    }

    /// Passes `children` through, wiring this controller's callback into
    /// every [`Node::Target`] at any depth. All other nodes are reproduced
    /// unchanged.
    #[must_use]
    pub fn inject(&self, children: &[Node]) -> Vec<Node> {
        let callback = self.activation_callback();
        map_forest(children, &Node::is_target, &|node| match node {
            Node::Target(mut target) => {
                target.target.set_callback(callback.clone());
                Node::Target(target)
            }
            other => other,
        })
    }

    /// Advances the host clock by `dt`.
    ///
    /// Applies queued requests, steps both transitions, and writes every value
    /// that changed to the surface. Returns `true` while anything is still
    /// animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.process_requests();
        let step = self.animate.step(dt);
        if step.changed() {
            self.per_frame_update();
        }
        if self.origin.step(dt).changed() {
            self.per_frame_origin_update();
        }
        if let TweenStep::Completed(_) = step {
            tracing::trace!(phase = ?self.phase, "zoom transition settled");
        }
        self.is_animating()
    }

    /// Writes the current scale and translation to the surface.
    pub fn per_frame_update(&mut self) {
        self.surface.set_transform(*self.animate.value());
    }

    /// Writes the current transform origin to the surface.
    pub fn per_frame_origin_update(&mut self) {
        self.surface.set_transform_origin(*self.origin.value());
    }

    /// Returns `true` while either transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animate.is_animating() || self.origin.is_animating()
    }

    /// Returns `true` while zoomed in or zooming in.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.phase == ZoomPhase::Zoomed
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Scale used by the next pointer activation.
    #[must_use]
    pub fn active_scale(&self) -> f64 {
        self.active_scale
    }

    /// Current interpolated scale and translation.
    #[must_use]
    pub fn animate_state(&self) -> AnimateState {
        *self.animate.value()
    }

    /// State the running transition settles on.
    #[must_use]
    pub fn target_state(&self) -> AnimateState {
        *self.animate.target()
    }

    /// Current transform origin in viewport pixels.
    #[must_use]
    pub fn origin(&self) -> Point {
        *self.origin.value()
    }

    /// Vertical viewport center, including scroll, used by the last zoom-in.
    #[must_use]
    pub fn center_y_origin(&self) -> f64 {
        self.center_y_origin
    }

    /// Unscaled container size recorded at mount.
    #[must_use]
    pub fn container_size(&self) -> Option<Size> {
        self.container_size
    }

    /// Cached viewport metrics.
    #[must_use]
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            phase: self.phase,
            mounted: self.listening,
            animating: self.is_animating(),
            active_scale: self.active_scale,
            animate_state: self.animate_state(),
            target_state: self.target_state(),
            origin: self.origin(),
            viewport: self.metrics.size(),
            container_size: self.container_size,
            scroll_offset: self.scroll_offset,
            pending_requests: self.pending_requests(),
        }
    }
}

/// Debug snapshot of a [`ZoomController`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomDebugInfo {
    /// Current phase.
    pub phase: ZoomPhase,
    /// Whether scroll events are being accepted.
    pub mounted: bool,
    /// Whether a transition is running.
    pub animating: bool,
    /// Scale of the next pointer activation.
    pub active_scale: f64,
    /// Current interpolated transform.
    pub animate_state: AnimateState,
    /// Transform the running transition settles on.
    pub target_state: AnimateState,
    /// Current transform origin.
    pub origin: Point,
    /// Cached viewport size.
    pub viewport: Size,
    /// Container size recorded at mount.
    pub container_size: Option<Size>,
    /// Last reported page scroll offset.
    pub scroll_offset: Vec2,
    /// Queued target activations.
    pub pending_requests: usize,
}
