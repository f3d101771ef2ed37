// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Zoom: click-to-zoom for a layer of content.
//!
//! A [`ZoomController`] owns the transform of a moveable layer that fills a
//! viewport. Activating a point zooms the layer so that point ends up in the
//! middle of the viewport, magnified; scrolling or activating again zooms back
//! out. Transitions are eased tweens from `understory_tween`, advanced by the
//! host's frame clock.
//!
//! - [`ZoomController`]: the zoomed/idle state machine and transform math.
//! - [`ZoomTarget`]: an activatable leaf (typically an image) that measures
//!   itself once loaded and asks to be zoomed to fit the viewport height.
//! - [`Node`] / [`map_tree`]: an immutable content tree and the rebuild utility
//!   the controller uses to wire its callback into nested targets.
//! - [`ZoomSurface`]: where per-frame transforms are written. [`CssStyle`]
//!   keeps CSS `transform` / `transform-origin` strings for DOM-like hosts.
//!
//! It does **not** measure layout, subscribe to platform events, or own a
//! clock. Hosts are expected to:
//! - Report target bounds through [`ZoomTarget::on_load`].
//! - Forward pointer presses and scrolls (see
//!   [`ZoomController::handle_pointer_event`] for `ui-events`).
//! - Report page scroll through [`ZoomController::set_scroll_offset`] and
//!   viewport size changes through [`ZoomController::resize`].
//! - Call [`ZoomController::tick`] every frame while it returns `true`.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//!
//! use kurbo::{Rect, Size, Vec2};
//! use understory_zoom::{
//!     AnimateState, CssStyle, Element, Node, TargetNode, ZoomConfig, ZoomController, ZoomTarget,
//! };
//!
//! let mut zoom = ZoomController::new(
//!     Size::new(1000.0, 800.0),
//!     ZoomConfig::default(),
//!     CssStyle::default(),
//! );
//! zoom.mount(Size::new(1000.0, 2400.0));
//!
//! let content: Vec<Node> = vec![
//!     Element::new("figure")
//!         .with_child(TargetNode::new().with_attribute("src", "cat.png"))
//!         .into(),
//! ];
//! let mut content = zoom.inject(&content);
//!
//! // The image loaded and was laid out 200px tall, centered at (500, 300).
//! for node in &mut content {
//!     node.for_each_target_mut(&mut |target: &mut ZoomTarget| {
//!         target.on_load(Rect::new(450.0, 200.0, 550.0, 400.0), 800.0);
//!     });
//! }
//!
//! // The user clicks the image.
//! assert!(content[0].targets()[0].activate());
//!
//! while zoom.tick(Duration::from_millis(16)) {}
//!
//! // (800 - 2 * 20) / 200 = 3.8; the image center moves to the viewport center.
//! let state = zoom.animate_state();
//! assert_eq!(state, AnimateState::new(3.8, Vec2::new(0.0, 100.0 / 3.8)));
//! assert_eq!(zoom.surface().transform, state.css_transform());
//! ```
//!
//! ## Logging
//!
//! Transitions and ignored inputs are reported through `tracing` at `debug`
//! and `trace` level. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod metrics;
mod pointer;
mod state;
mod surface;
mod target;
mod tree;

pub use config::{RetargetMode, ZoomConfig};
pub use controller::{ZoomController, ZoomDebugInfo, ZoomPhase};
pub use metrics::ViewportMetrics;
pub use state::{AnimateState, css_origin};
pub use surface::{CssStyle, ZoomSurface};
pub use target::{ActivationCallback, ZoomRequest, ZoomTarget};
pub use tree::{Attributes, Element, Node, TargetNode, TreeNode, map_forest, map_tree};
