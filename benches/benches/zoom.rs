// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use std::time::Duration;
use understory_zoom::{
    CssStyle, Element, Node, TargetNode, ZoomConfig, ZoomController, ZoomRequest,
};

fn gallery(depth: usize, fanout: usize) -> Node {
    if depth == 0 {
        return TargetNode::new().with_attribute("src", "tile.png").into();
    }
    let mut element = Element::new("div").with_attribute("class", "row");
    for _ in 0..fanout {
        element = element.with_child(gallery(depth - 1, fanout));
    }
    element.with_child(Node::text("caption")).into()
}

fn bench_inject(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/inject");
    let zoom = ZoomController::new(
        Size::new(1280.0, 800.0),
        ZoomConfig::default(),
        CssStyle::default(),
    );

    for depth in [2usize, 4, 6] {
        let content = vec![gallery(depth, 3)];
        group.bench_with_input(BenchmarkId::new("depth", depth), &content, |b, content| {
            b.iter(|| black_box(zoom.inject(content)));
        });
    }

    group.finish();
}

fn bench_zoom_in_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/frames");

    // Hypothesis: a frame is dominated by formatting the CSS strings, not by
    // the tween math.
    group.bench_function("zoom_in_60hz", |b| {
        b.iter_batched(
            || {
                let mut zoom = ZoomController::new(
                    Size::new(1280.0, 800.0),
                    ZoomConfig::default(),
                    CssStyle::default(),
                );
                zoom.mount(Size::new(1280.0, 4000.0));
                zoom.activate(ZoomRequest::new(Point::new(320.0, 240.0), 3.0));
                zoom
            },
            |mut zoom| {
                while zoom.tick(Duration::from_micros(16_667)) {}
                black_box(zoom);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_inject, bench_zoom_in_frames);
criterion_main!(benches);
