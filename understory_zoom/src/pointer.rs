// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to controller actions.

use ui_events::pointer::PointerEvent;

use crate::{ZoomController, ZoomSurface};

impl<S: ZoomSurface> ZoomController<S> {
    /// Routes a pointer event that landed on the viewport.
    ///
    /// - `Down` becomes [`ZoomController::on_pointer_down`] at the event's
    ///   logical position.
    /// - `Scroll` becomes [`ZoomController::on_scroll`].
    /// - Everything else is ignored.
    ///
    /// Presses that land on a [`ZoomTarget`](crate::ZoomTarget) should be
    /// routed to the target's [`activate`](crate::ZoomTarget::activate)
    /// instead. Returns `true` if the controller acted on the event.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent, container_top: f64) -> bool {
        match event {
            PointerEvent::Down(e) => self.on_pointer_down(e.state.logical_point(), container_top),
            PointerEvent::Scroll(_) => self.on_scroll(),
            _ => false,
        }
    }
}
