//! Drives a like button headlessly: one accepted like, then a rejected unlike
//! that gets rolled back. Run with `RUST_LOG=debug` to see the transitions.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use magicbutton::prelude::*;

/// Pretends to talk to a server; the second request fails.
#[derive(Clone, Default)]
struct FakeBackend {
    requests: Rc<Cell<u32>>,
    failed: Rc<Cell<bool>>,
}

impl ToggleListener for FakeBackend {
    fn on_activated(&mut self) {
        self.requests.set(self.requests.get() + 1);
        println!("-> like request #{}", self.requests.get());
    }

    fn on_deactivated(&mut self) {
        self.requests.set(self.requests.get() + 1);
        println!("-> unlike request #{} (will fail)", self.requests.get());
        self.failed.set(true);
    }

    fn on_settled(&mut self, state: ToggleState) {
        println!("   settled in {:?}", state);
    }

    fn on_rolled_back(&mut self, state: ToggleState) {
        println!("   rolled back to {:?}", state);
    }
}

struct PrintRenderer;

impl Renderer for PrintRenderer {
    fn draw(&mut self, params: &RenderParams) {
        let g = &params.geometry;
        let points = params
            .emit_points
            .map(|p| format!(" points r={:.1} a={}", g.emit_point_radius, p.alpha))
            .unwrap_or_default();
        println!(
            "   {:<12} rot={:>6.1} scale={:.3} count={}{}",
            format!("{:?}", params.state),
            g.icon_rotation,
            g.icon_scale,
            params.counter_text.as_deref().unwrap_or("-"),
            points
        );
    }
}

fn run_frames(button: &mut MagicButton, max: Duration, backend: &FakeBackend) {
    let mut clock = FrameClock::new();
    let started = Instant::now();
    clock.advance(started);
    let mut renderer = PrintRenderer;
    while started.elapsed() < max {
        std::thread::sleep(Duration::from_millis(16));
        let running = button.tick(clock.advance(Instant::now()));
        if button.take_changes().contains(ChangeFlags::NEEDS_PAINT) {
            button.render(&mut renderer);
        }
        if backend.failed.replace(false) {
            button.cancel_all();
        }
        if !running {
            break;
        }
    }
}

fn main() -> magicbutton::Result<()> {
    env_logger::init();

    let backend = FakeBackend::default();
    let mut button = MagicButton::new(
        WidgetConfig::new(Variant::LikeText)
            .initial_count(41)
            .density(2.0),
    )?;
    button.set_bounds(Bounds::new(120.0, 68.0).anchor(Point::new(34.0, 34.0)))?;
    button.set_icons(IconSet::pair(IconHandle(1), IconHandle(2)));
    button.set_listener(backend.clone());

    println!("tap (like)");
    button.tap();
    run_frames(&mut button, Duration::from_secs(2), &backend);

    println!("tap (unlike)");
    button.tap();
    run_frames(&mut button, Duration::from_secs(2), &backend);

    println!("final: {:?} with count {}", button.state(), button.count());
    Ok(())
}
