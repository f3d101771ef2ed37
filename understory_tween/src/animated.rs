// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::{Easing, Lerp, Tween};

/// Handle naming one tween started on an [`Animated`] value.
///
/// Ids increase monotonically per value, so a superseded tween can be told
/// apart from its replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TweenId(u64);

/// Outcome of [`Animated::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStep {
    /// No tween is running; the value did not change.
    Idle,
    /// The tween advanced and the value changed.
    Updated(TweenId),
    /// The tween reached its end; the value now equals its target exactly.
    Completed(TweenId),
}

impl TweenStep {
    /// Returns `true` if the value was written by this step.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// A value with at most one active tween.
///
/// This is the record an animation driver mutates in place: the value lives
/// as long as its owner and is only ever retargeted, never recreated.
///
/// ## Semantics
///
/// - [`Animated::animate_to`] starts from the current value, which may be
///   mid-flight, and replaces any running tween. There is no queueing.
/// - [`Animated::set`] jumps without animating and drops any running tween.
/// - [`Animated::step`] advances the running tween and writes the new value.
#[derive(Clone, Debug)]
pub struct Animated<T> {
    value: T,
    active: Option<(TweenId, Tween<T>)>,
    next_id: u64,
}

impl<T: Lerp + Clone> Animated<T> {
    /// Creates a resting value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            active: None,
            next_id: 1,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Value this will settle on: the running tween's end, or the current value.
    #[must_use]
    pub fn target(&self) -> &T {
        match &self.active {
            Some((_, tween)) => tween.end(),
            None => &self.value,
        }
    }

    /// Running tween, if any.
    #[must_use]
    pub fn tween(&self) -> Option<&Tween<T>> {
        self.active.as_ref().map(|(_, tween)| tween)
    }

    /// Id of the running tween, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<TweenId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// Returns `true` while a tween is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Starts animating toward `target`, replacing any running tween.
    pub fn animate_to(&mut self, target: T, duration: Duration, easing: Easing) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let tween = Tween::new(self.value.clone(), target, duration, easing);
        self.active = Some((id, tween));
        id
    }

    /// Jumps to `value` and drops any running tween.
    pub fn set(&mut self, value: T) {
        self.active = None;
        self.value = value;
    }

    /// Drops the running tween, leaving the value where it is.
    pub fn cancel(&mut self) -> Option<TweenId> {
        self.active.take().map(|(id, _)| id)
    }

    /// Advances the running tween by `dt` and writes the interpolated value.
    pub fn step(&mut self, dt: Duration) -> TweenStep {
        let Some((id, tween)) = self.active.as_mut() else {
            return TweenStep::Idle;
        };
        let id = *id;
        tween.advance(dt);
        self.value = tween.value();
        if tween.is_finished() {
            self.active = None;
            TweenStep::Completed(id)
        } else {
            TweenStep::Updated(id)
        }
    }
}

impl<T: Lerp + Clone + Default> Default for Animated<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Point;

    use super::{Animated, TweenStep};
    use crate::Easing;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn idle_value_does_not_step() {
        let mut a = Animated::new(3.0_f64);
        assert_eq!(a.step(MS_100), TweenStep::Idle);
        assert_eq!(*a.value(), 3.0);
        assert_eq!(*a.target(), 3.0);
        assert!(!a.is_animating());
    }

    #[test]
    fn step_until_completed() {
        let mut a = Animated::new(0.0_f64);
        let id = a.animate_to(10.0, Duration::from_millis(300), Easing::Linear);
        assert_eq!(a.active_id(), Some(id));
        assert_eq!(*a.target(), 10.0);

        assert_eq!(a.step(MS_100), TweenStep::Updated(id));
        assert!((*a.value() - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(a.step(MS_100), TweenStep::Updated(id));
        assert_eq!(a.step(MS_100), TweenStep::Completed(id));
        assert_eq!(*a.value(), 10.0);
        assert!(!a.is_animating());
        assert_eq!(a.active_id(), None);
    }

    #[test]
    fn retarget_starts_from_interpolated_value() {
        let mut a = Animated::new(Point::ZERO);
        let first = a.animate_to(Point::new(100.0, 100.0), Duration::from_millis(200), Easing::Linear);
        a.step(MS_100);

        let second = a.animate_to(Point::new(0.0, 200.0), Duration::from_millis(200), Easing::Linear);
        assert_ne!(first, second);
        assert!(second > first);
        let tween = a.tween().expect("retargeted tween should be running");
        assert_eq!(*tween.start(), Point::new(50.0, 50.0));

        // The superseded tween never reports completion.
        let mut completed = None;
        for _ in 0..4 {
            if let TweenStep::Completed(id) = a.step(MS_100) {
                completed = Some(id);
            }
        }
        assert_eq!(completed, Some(second));
        assert_eq!(*a.value(), Point::new(0.0, 200.0));
    }

    #[test]
    fn set_and_cancel_drop_the_running_tween() {
        let mut a = Animated::new(0.0_f64);
        let id = a.animate_to(1.0, MS_100, Easing::Linear);
        a.step(Duration::from_millis(50));
        assert_eq!(a.cancel(), Some(id));
        assert_eq!(*a.value(), 0.5);
        assert_eq!(a.cancel(), None);

        a.animate_to(1.0, MS_100, Easing::Linear);
        a.set(-2.0);
        assert!(!a.is_animating());
        assert_eq!(*a.value(), -2.0);
        assert_eq!(a.step(MS_100), TweenStep::Idle);
    }

    #[test]
    fn zero_duration_completes_on_first_step() {
        let mut a = Animated::<f64>::default();
        let id = a.animate_to(4.0, Duration::ZERO, Easing::EaseInOut);
        assert_eq!(a.step(Duration::ZERO), TweenStep::Completed(id));
        assert_eq!(*a.value(), 4.0);
    }
}
