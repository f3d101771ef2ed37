// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tween: headless tweening primitives.
//!
//! This crate interpolates values over time without owning a clock. The host
//! (a windowing loop, `requestAnimationFrame`, a test) advances animations by
//! handing over frame deltas, and reads the interpolated value back after each
//! step.
//!
//! - [`Easing`]: progress curves (linear and the quadratic in/out family).
//! - [`Lerp`]: values that can be interpolated.
//! - [`Tween`]: a single `start → end` interpolation over a [`Duration`](core::time::Duration).
//! - [`Animated`]: a mutable value with at most one active tween. Starting a
//!   new tween replaces the running one and continues from wherever the value
//!   currently is, so a running interpolation can be redirected at any time.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_tween::{Animated, Easing, TweenStep};
//!
//! let mut opacity = Animated::new(0.0_f64);
//! let id = opacity.animate_to(1.0, Duration::from_millis(200), Easing::EaseInOut);
//!
//! assert!(matches!(opacity.step(Duration::from_millis(100)), TweenStep::Updated(_)));
//! assert!((*opacity.value() - 0.5).abs() < 1e-9);
//!
//! assert_eq!(opacity.step(Duration::from_millis(100)), TweenStep::Completed(id));
//! assert_eq!(*opacity.value(), 1.0);
//! assert_eq!(opacity.step(Duration::from_millis(16)), TweenStep::Idle);
//! ```
//!
//! ## Redirecting
//!
//! ```rust
//! use core::time::Duration;
//! use understory_tween::{Animated, Easing};
//!
//! let mut x = Animated::new(0.0_f64);
//! x.animate_to(100.0, Duration::from_millis(100), Easing::Linear);
//! x.step(Duration::from_millis(50));
//!
//! // Head back home from the midpoint; the first tween is gone.
//! x.animate_to(0.0, Duration::from_millis(100), Easing::Linear);
//! assert_eq!(x.tween().map(|t| *t.start()), Some(50.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animated;
mod easing;
mod tween;

pub use animated::{Animated, TweenId, TweenStep};
pub use easing::Easing;
pub use tween::{Lerp, Tween};
