use anyhow::{ensure, Context, Result};
use drawerkit_core::{Runtime, RuntimeHandle};
use drawerkit_foundation::{PointerEvent, PointerEventKind};
use drawerkit_ui::{
    Drawer, DrawerAnimationOptions, DrawerCallbacks, DrawerConfig, DrawerSide, KeyboardDismissMode,
};
use drawerkit_ui_graphics::{Color, Point, Size};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;
const CONTAINER: Size = Size::new(800.0, 600.0);

/// Text-only stand-in for a host view.
#[derive(Debug, Clone, PartialEq)]
enum DemoView {
    Screen(&'static str),
    Menu(Vec<&'static str>),
}

struct Host {
    runtime: Runtime,
    frame_nanos: u64,
    uptime_ms: i64,
}

impl Host {
    fn new() -> Self {
        Self {
            runtime: Runtime::new(),
            frame_nanos: 0,
            uptime_ms: 0,
        }
    }

    fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    fn pump(&mut self, drawer: &Drawer<DemoView>) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < 1_000 {
            self.frame_nanos += FRAME_NANOS;
            handle.drain_frame_callbacks(self.frame_nanos);
            frames += 1;
            if frames % 10 == 0 {
                let render = drawer.render_state();
                log::trace!(
                    "frame {}: translate_x={:.1} overlay={:.2}",
                    frames,
                    render.translate_x,
                    render.overlay_opacity
                );
            }
        }
        frames
    }

    fn send(&mut self, drawer: &Drawer<DemoView>, kind: PointerEventKind, x: f32, dt_ms: i64) {
        self.uptime_ms += dt_ms;
        let event = PointerEvent::new(kind, Point::new(x, CONTAINER.height / 2.0))
            .with_uptime_ms(self.uptime_ms);
        drawer.on_pointer_event(&event);
    }

    fn swipe(&mut self, drawer: &Drawer<DemoView>, from: f32, to: f32, step_ms: i64) {
        const STEPS: usize = 12;
        self.send(drawer, PointerEventKind::Down, from, 0);
        for step in 1..=STEPS {
            let x = from + (to - from) * step as f32 / STEPS as f32;
            self.send(drawer, PointerEventKind::Move, x, step_ms);
        }
        self.send(drawer, PointerEventKind::Up, to, step_ms);
    }

    fn tap(&mut self, drawer: &Drawer<DemoView>, x: f32) {
        self.send(drawer, PointerEventKind::Down, x, 0);
        self.send(drawer, PointerEventKind::Up, x, 40);
    }
}

fn build_drawer(host: &Host, side: DrawerSide) -> Result<Drawer<DemoView>> {
    let config = DrawerConfig::builder()
        .side(side)
        .width(280.0)
        .background_color(Color::from_hex("#fafafa").unwrap_or(Color::WHITE))
        .status_bar_background(Color::from_rgb_u8(33, 33, 33))
        .keyboard_dismiss_mode(KeyboardDismissMode::OnDrag)
        .children(|| DemoView::Screen("Inbox"))
        .render_panel(|| DemoView::Menu(vec!["Inbox", "Starred", "Sent", "Drafts"]))
        .build()
        .context("drawer configuration")?;

    let drawer = Drawer::new(config, host.handle()).context("drawer construction")?;
    drawer.set_container_size(CONTAINER);
    drawer.add_listener(Rc::new(
        DrawerCallbacks::new()
            .on_open(|| log::info!("drawer opening"))
            .on_close(|| log::info!("drawer closing"))
            .on_state_changed(|state, will_show| {
                log::info!("state -> {} (will_show={})", state, will_show)
            })
            .on_dismiss_keyboard(|| log::info!("keyboard dismiss requested")),
    ));
    Ok(drawer)
}

fn report(label: &str, drawer: &Drawer<DemoView>) {
    let render = drawer.render_state();
    println!(
        "{label:<28} shown={:<5} openness={:.2} translate_x={:>7.1} overlay={:.2}",
        render.shown, render.openness, render.translate_x, render.overlay_opacity
    );
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== drawerkit headless demo ===");
    let mut host = Host::new();

    let left = build_drawer(&host, DrawerSide::Left)?;
    let tree = left.compose();
    println!("content: {:?}", tree.content);
    println!("panel:   {:?}", tree.panel);
    report("left, initial", &left);

    host.swipe(&left, 10.0, 220.0, 16);
    let frames = host.pump(&left);
    report(&format!("after slow swipe ({frames} frames)"), &left);
    ensure!(left.is_shown(), "a swipe past half the width should open the drawer");

    host.tap(&left, 500.0);
    host.pump(&left);
    report("after edge-strip tap", &left);
    ensure!(!left.is_shown(), "tapping the edge strip should close the drawer");

    host.swipe(&left, 10.0, 70.0, 4);
    host.pump(&left);
    report("after short flick", &left);

    left.close_drawer(DrawerAnimationOptions::with_velocity(-800.0));
    host.pump(&left);
    report("after close_drawer", &left);

    let right = build_drawer(&host, DrawerSide::Right)?;
    right.open_drawer(DrawerAnimationOptions::default());
    host.pump(&right);
    report("right, after open_drawer", &right);
    ensure!(right.openness() == 1.0, "right drawer should settle open");

    Ok(())
}
