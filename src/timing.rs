//! The speed slider and the tick rate actually in effect
use crate::consts;
use crate::scene::Scene;
use std::time::Duration;

/// Tracks the speed slider separately from the applied tick rate.
///
/// Moving the slider only changes the preview.  The applied rate is
/// recomputed from the slider when the `Timing` is created and whenever
/// [`Timing::apply()`] is called, which happens on restart and nowhere else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Timing {
    /// Slider position in `[0, 1]`
    setting: f64,

    /// Ticks per second currently in effect
    applied: u32,
}

impl Timing {
    pub(crate) fn new() -> Timing {
        let setting = f64::from(consts::BASE_TICK_RATE - consts::MIN_TICK_RATE)
            / f64::from(consts::MAX_TICK_RATE - consts::MIN_TICK_RATE);
        Timing {
            setting,
            applied: rate_for(setting),
        }
    }

    pub(crate) fn setting(&self) -> f64 {
        self.setting
    }

    pub(crate) fn applied_rate(&self) -> u32 {
        self.applied
    }

    /// The tick rate that the next restart would apply
    pub(crate) fn preview_rate(&self) -> u32 {
        rate_for(self.setting)
    }

    /// Move the slider to `value`.  The applied rate is left alone.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not within `[0, 1]`.
    pub(crate) fn drag(&mut self, value: f64) {
        assert!(
            (0.0..=1.0).contains(&value),
            "slider value {value} is outside [0, 1]"
        );
        self.setting = value;
    }

    /// Adopt the slider's rate as the applied rate
    pub(crate) fn apply(&mut self) {
        self.applied = self.preview_rate();
    }

    /// How long one frame of `scene` should last.  The menu always runs at
    /// [`consts::MENU_FRAME_RATE`]; everything else runs at the applied rate.
    pub(crate) fn frame_period(&self, scene: Scene) -> Duration {
        let rate = if scene == Scene::Menu {
            consts::MENU_FRAME_RATE
        } else {
            self.applied
        };
        Duration::from_secs(1) / rate
    }
}

impl Default for Timing {
    fn default() -> Timing {
        Timing::new()
    }
}

/// Interpolate between the slowest and fastest tick rates, truncating towards
/// the slower rate.
// The cast operand is a whole number within [MIN_TICK_RATE, MAX_TICK_RATE].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rate_for(setting: f64) -> u32 {
    let lo = f64::from(consts::MIN_TICK_RATE);
    let hi = f64::from(consts::MAX_TICK_RATE);
    (hi - lo).mul_add(setting, lo).trunc().clamp(lo, hi) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 6)]
    #[case(0.25, 10)]
    #[case(0.5, 14)]
    #[case(0.99, 21)]
    #[case(1.0, 22)]
    #[case(0.03, 6)]
    fn rates(#[case] setting: f64, #[case] rate: u32) {
        assert_eq!(rate_for(setting), rate);
    }

    #[test]
    fn initial_rate() {
        let timing = Timing::new();
        assert_eq!(timing.applied_rate(), consts::BASE_TICK_RATE);
        assert_eq!(timing.preview_rate(), consts::BASE_TICK_RATE);
    }

    #[test]
    fn drag_changes_preview_only() {
        let mut timing = Timing::new();
        timing.drag(1.0);
        assert_eq!(timing.preview_rate(), 22);
        assert_eq!(timing.applied_rate(), 10);
        timing.drag(0.0);
        assert_eq!(timing.preview_rate(), 6);
        assert_eq!(timing.applied_rate(), 10);
        timing.apply();
        assert_eq!(timing.applied_rate(), 6);
    }

    #[rstest]
    #[case(-0.01)]
    #[case(1.01)]
    #[case(f64::NAN)]
    #[should_panic(expected = "outside [0, 1]")]
    fn drag_out_of_range(#[case] value: f64) {
        Timing::new().drag(value);
    }

    #[test]
    fn frame_periods() {
        let timing = Timing::new();
        let tick = Duration::from_millis(100);
        assert_eq!(
            timing.frame_period(Scene::Menu),
            Duration::from_secs(1) / 60
        );
        assert_eq!(timing.frame_period(Scene::Play), tick);
        assert_eq!(timing.frame_period(Scene::Paused), tick);
    }
}
