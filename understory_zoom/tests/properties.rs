// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the zoom transform math and transitions.

use std::time::Duration;

use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use understory_zoom::{
    AnimateState, CssStyle, RetargetMode, ZoomConfig, ZoomController, ZoomPhase, ZoomRequest,
};

const FRAME: Duration = Duration::from_millis(16);

fn controller(config: ZoomConfig) -> ZoomController<CssStyle> {
    let mut zoom = ZoomController::new(Size::new(1000.0, 800.0), config, CssStyle::default());
    zoom.mount(Size::new(1000.0, 3000.0));
    zoom
}

fn settle(zoom: &mut ZoomController<CssStyle>) {
    let mut frames = 0;
    while zoom.tick(FRAME) {
        frames += 1;
        assert!(frames < 1_000, "transition never settled");
    }
}

fn arb_focal() -> impl Strategy<Value = Point> {
    (-1e4f64..1e4, -1e4f64..1e4).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_retarget() -> impl Strategy<Value = RetargetMode> {
    prop_oneof![Just(RetargetMode::ZoomOut), Just(RetargetMode::Retarget)]
}

proptest! {
    #[test]
    fn translation_is_center_offset_over_scale(
        focal in arb_focal(),
        scale in 1.0f64..50.0,
        scroll_y in 0.0f64..5_000.0,
    ) {
        let mut zoom = controller(ZoomConfig::default());
        zoom.set_scroll_offset(Vec2::new(0.0, scroll_y));
        zoom.activate(ZoomRequest::new(focal, scale));

        let expected = Vec2::new((500.0 - focal.x) / scale, (400.0 + scroll_y - focal.y) / scale);
        let target = zoom.target_state();
        prop_assert_eq!(target.scale, scale);
        prop_assert_eq!(target.translation, expected);
        // Scaling the translated focal point lands it on the adjusted center.
        let landed = focal.y + target.translation.y * scale;
        prop_assert!((landed - (400.0 + scroll_y)).abs() <= 1e-9 * (1.0 + landed.abs()));
    }

    #[test]
    fn activation_at_center_never_translates(scale in 1.0f64..50.0) {
        let mut zoom = controller(ZoomConfig::default());
        zoom.activate(ZoomRequest::new(Point::new(500.0, 400.0), scale));
        prop_assert_eq!(zoom.target_state().translation, Vec2::ZERO);
        settle(&mut zoom);
        prop_assert_eq!(zoom.animate_state().translation, Vec2::ZERO);
    }

    #[test]
    fn enabled_exactly_when_target_is_not_identity(
        focal in arb_focal(),
        scale in 0.0f64..50.0,
        retarget in arb_retarget(),
        steps in prop::collection::vec(0u64..700, 1..6),
    ) {
        let mut zoom = controller(ZoomConfig::default().with_retarget(retarget));
        for ms in steps {
            zoom.activate(ZoomRequest::new(focal, scale));
            zoom.tick(Duration::from_millis(ms));
            prop_assert_eq!(zoom.is_enabled(), !zoom.target_state().is_identity());
        }
    }

    #[test]
    fn zoom_out_lands_exactly_on_identity(
        focal in arb_focal(),
        scale in 1.5f64..50.0,
        zoom_in_ms in 0u64..800,
        zoom_out_ms in 0u64..500,
    ) {
        let mut zoom = controller(ZoomConfig::default());
        zoom.activate(ZoomRequest::new(focal, scale));
        zoom.tick(Duration::from_millis(zoom_in_ms));

        zoom.zoom_out();
        zoom.tick(Duration::from_millis(zoom_out_ms));
        settle(&mut zoom);
        prop_assert_eq!(zoom.phase(), ZoomPhase::Idle);
        prop_assert_eq!(zoom.animate_state(), AnimateState::IDENTITY);
        prop_assert_eq!(zoom.surface().transform.as_str(), "scale(1) translate(0px, 0px)");
    }
}
