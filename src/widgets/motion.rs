//! Track presets. The timings and curves here define the look of the widgets.

use std::time::Duration;

use crate::animation::{Segment, Sequence, TimingFunction};
use crate::widgets::config::IconMotion;
use crate::widgets::ToggleCore;

/// Length of one emit-point phase (growth, then fade)
pub const EMIT_PHASE: Duration = Duration::from_millis(400);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn rotation(value: f32, core: &mut ToggleCore) {
    core.update_geometry(|g| g.icon_rotation = value);
}

fn scale(value: f32, core: &mut ToggleCore) {
    core.update_geometry(|g| g.icon_scale = value);
}

fn rotation_and_scale([rot, sc]: [f32; 2], core: &mut ToggleCore) {
    core.update_geometry(|g| {
        g.icon_rotation = rot;
        g.icon_scale = sc;
    });
}

pub fn icon_motion(kind: IconMotion, name: &'static str) -> Sequence<ToggleCore> {
    match kind {
        IconMotion::Jiggle => jiggle(name),
        IconMotion::Bounce => bounce(name),
    }
}

/// Tilt right, swing left while growing, come back, then two scale bumps.
pub fn jiggle(name: &'static str) -> Sequence<ToggleCore> {
    Sequence::sequential(
        name,
        vec![
            Segment::linear(0.0, 20.0, ms(50), rotation),
            Segment::new(
                [20.0, 1.0],
                [-20.0, 1.3],
                ms(200),
                TimingFunction::Decelerate,
                rotation_and_scale,
            ),
            Segment::linear([-20.0, 1.3], [0.0, 1.0], ms(100), rotation_and_scale),
            Segment::linear(1.0, 1.1, ms(100), scale),
            Segment::linear(1.1, 1.0, ms(100), scale),
        ],
    )
}

pub fn bounce(name: &'static str) -> Sequence<ToggleCore> {
    Sequence::sequential(
        name,
        vec![
            Segment::linear(1.0, 1.2, ms(200), scale),
            Segment::linear(1.2, 1.0, ms(100), scale),
            Segment::linear(1.0, 1.1, ms(100), scale),
            Segment::linear(1.1, 1.0, ms(100), scale),
        ],
    )
}

/// A ripple growing from `min_radius` to `max_radius`, slowing down at the end.
pub fn ripple(min_radius: f32, max_radius: f32, duration: Duration) -> Sequence<ToggleCore> {
    Sequence::sequential(
        "ripple",
        vec![Segment::new(
            min_radius,
            max_radius,
            duration,
            TimingFunction::Decelerate,
            |radius: f32, core: &mut ToggleCore| {
                core.update_geometry(|g| g.ripple_radius = Some(radius));
            },
        )],
    )
}

/// Emit points fly out from `min_radius` to `max_radius`, then fade out.
pub fn emit_points(min_radius: f32, max_radius: f32) -> Sequence<ToggleCore> {
    Sequence::sequential(
        "emit-points",
        vec![
            Segment::new(
                min_radius,
                max_radius,
                EMIT_PHASE,
                TimingFunction::Decelerate,
                |radius: f32, core: &mut ToggleCore| {
                    core.update_geometry(|g| g.emit_point_radius = radius);
                },
            ),
            Segment::linear(255.0, 0.0, EMIT_PHASE, |alpha: f32, core: &mut ToggleCore| {
                core.update_geometry(|g| g.emit_point_alpha = alpha as u8);
            }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Playback;
    use crate::widgets::ToggleState;

    const EPS: f32 = 1e-4;

    fn core() -> ToggleCore {
        ToggleCore::new(ToggleState::Idle, 0, true)
    }

    fn durations(sequence: &Sequence<ToggleCore>) -> Vec<u128> {
        sequence
            .segments()
            .iter()
            .map(|s| s.duration().as_millis())
            .collect()
    }

    #[test]
    fn test_jiggle_timings() {
        let seq = jiggle("jiggle");
        assert_eq!(seq.playback(), Playback::Sequential);
        assert_eq!(durations(&seq), [50, 200, 100, 100, 100]);
        let curves: Vec<String> = seq
            .segments()
            .iter()
            .map(|s| format!("{:?}", s.timing()))
            .collect();
        assert_eq!(curves, ["Linear", "Decelerate", "Linear", "Linear", "Linear"]);
    }

    #[test]
    fn test_jiggle_values() {
        let mut core = core();
        let mut seq = jiggle("jiggle");
        seq.start(&mut core);

        seq.tick(ms(50), &mut core);
        assert!((core.geometry().icon_rotation - 20.0).abs() < EPS);
        assert!((core.geometry().icon_scale - 1.0).abs() < EPS);

        // Halfway through the decelerating swing: eased progress 0.75
        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_rotation + 10.0).abs() < EPS);
        assert!((core.geometry().icon_scale - 1.225).abs() < EPS);

        // End of the swing
        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_rotation + 20.0).abs() < EPS);
        assert!((core.geometry().icon_scale - 1.3).abs() < EPS);

        seq.tick(ms(100), &mut core);
        assert!(core.geometry().icon_rotation.abs() < EPS);
        assert!((core.geometry().icon_scale - 1.0).abs() < EPS);

        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_scale - 1.1).abs() < EPS);

        assert!(!seq.tick(ms(100), &mut core));
        assert!((core.geometry().icon_scale - 1.0).abs() < EPS);
    }

    #[test]
    fn test_bounce_values() {
        let mut core = core();
        let mut seq = bounce("bounce");
        assert_eq!(durations(&seq), [200, 100, 100, 100]);
        seq.start(&mut core);

        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_scale - 1.1).abs() < EPS);
        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_scale - 1.2).abs() < EPS);
        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_scale - 1.0).abs() < EPS);
        seq.tick(ms(100), &mut core);
        assert!((core.geometry().icon_scale - 1.1).abs() < EPS);
        assert_eq!(core.geometry().icon_rotation, 0.0);
    }

    #[test]
    fn test_ripple_decelerates() {
        let mut core = core();
        let mut seq = ripple(5.0, 105.0, ms(400));
        seq.start(&mut core);
        assert_eq!(core.geometry().ripple_radius, None);

        seq.tick(ms(200), &mut core);
        let radius = core.geometry().ripple_radius.unwrap_or_default();
        assert!((radius - 80.0).abs() < EPS);

        assert!(!seq.tick(ms(200), &mut core));
        assert_eq!(core.geometry().ripple_radius, Some(105.0));
    }

    #[test]
    fn test_emit_points_grow_then_fade() {
        let mut core = core();
        let mut seq = emit_points(6.0, 16.0);
        assert_eq!(seq.total_duration(), ms(800));
        seq.start(&mut core);

        seq.tick(ms(200), &mut core);
        assert!((core.geometry().emit_point_radius - 13.5).abs() < EPS);
        assert_eq!(core.geometry().emit_point_alpha, 255);

        seq.tick(ms(400), &mut core);
        assert!((core.geometry().emit_point_radius - 16.0).abs() < EPS);
        assert_eq!(core.geometry().emit_point_alpha, 127);

        assert!(!seq.tick(ms(200), &mut core));
        assert_eq!(core.geometry().emit_point_alpha, 0);
    }
}
