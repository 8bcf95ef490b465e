/// Fraction of the release velocity added to the drag translation.
pub const DRAG_TOSS: f32 = 0.05;

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseDecision {
    /// Translation projected by the release velocity.
    pub toss: f32,
    /// Whether the projected travel exceeds half the drawer width.
    pub should_flip: bool,
    pub should_open: bool,
}

/// Decide where a released drag settles.
///
/// The projected travel is compared by magnitude only, so any release past
/// half the width flips the current state. A zero width therefore flips on
/// any nonzero toss.
pub fn decide_release(
    translation: f32,
    velocity: f32,
    width: f32,
    currently_shown: bool,
) -> ReleaseDecision {
    let toss = translation + DRAG_TOSS * velocity;
    let should_flip = toss.abs() > width / 2.0;
    let should_open = if should_flip {
        !currently_shown
    } else {
        currently_shown
    };
    ReleaseDecision {
        toss,
        should_flip,
        should_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_width_of_travel_flips() {
        assert!(decide_release(151.0, 0.0, 300.0, false).should_open);
        assert!(!decide_release(150.0, 0.0, 300.0, false).should_open);
        assert!(!decide_release(-151.0, 0.0, 300.0, true).should_open);
        assert!(decide_release(-149.0, 0.0, 300.0, true).should_open);
    }

    #[test]
    fn fast_flick_counts_as_longer_swipe() {
        let decision = decide_release(40.0, 2_400.0, 300.0, false);
        assert_eq!(decision.toss, 160.0);
        assert!(decision.should_flip);
        assert!(decision.should_open);

        let against = decide_release(40.0, -2_400.0, 300.0, false);
        assert_eq!(against.toss, -80.0);
        assert!(!against.should_open);
    }

    #[test]
    fn zero_width_flips_on_any_toss() {
        assert!(decide_release(0.5, 0.0, 0.0, false).should_open);
        assert!(decide_release(0.0, -10.0, 0.0, false).should_open);
        assert!(!decide_release(0.0, 20.0, 0.0, true).should_open);
        let still = decide_release(0.0, 0.0, 0.0, true);
        assert!(!still.should_flip);
        assert!(still.should_open);
    }
}
