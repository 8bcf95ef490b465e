use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drawerkit_core::Runtime;
use drawerkit_ui::{
    Drawer, DrawerAnimationOptions, DrawerConfig, DrawerGeometry, DrawerRenderState, DrawerSide,
};
use drawerkit_ui_graphics::Size;

const CONTAINER: Size = Size::new(1080.0, 1920.0);
const FRAME_NANOS: u64 = 16_666_667;
const OPENNESS_SAMPLES: &[usize] = &[16, 256];

fn config(side: DrawerSide) -> DrawerConfig<()> {
    DrawerConfig::builder()
        .side(side)
        .width(320.0)
        .children(|| ())
        .render_panel(|| ())
        .build()
        .expect("config")
}

fn bench_render_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_mapping");
    for side in [DrawerSide::Left, DrawerSide::Right] {
        let config = config(side);
        let geometry = DrawerGeometry::for_config(&config).expect("geometry");
        for &samples in OPENNESS_SAMPLES {
            group.bench_with_input(
                BenchmarkId::new(format!("{side:?}"), samples),
                &samples,
                |b, &samples| {
                    b.iter(|| {
                        for step in 0..=samples {
                            let openness = step as f32 / samples as f32;
                            black_box(DrawerRenderState::compute(
                                openness,
                                openness > 0.5,
                                &geometry,
                                &config,
                                CONTAINER,
                            ));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_open_close", |b| {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let drawer = Drawer::new(config(DrawerSide::Left), runtime.handle()).expect("drawer");
        drawer.set_container_size(CONTAINER);
        let mut frame_time = 0u64;

        b.iter(|| {
            for open in [true, false] {
                if open {
                    drawer.open_drawer(DrawerAnimationOptions::default());
                } else {
                    drawer.close_drawer(DrawerAnimationOptions::default());
                }
                while handle.has_frame_callbacks() {
                    frame_time += FRAME_NANOS;
                    handle.drain_frame_callbacks(frame_time);
                    black_box(drawer.render_state());
                }
            }
        });
    });
}

criterion_group!(benches, bench_render_mapping, bench_settle);
criterion_main!(benches);
