use super::config::{DrawerConfig, DrawerConfigError, DrawerSide, MAX_OVERLAY_OPACITY};
use drawerkit_animation::Interpolation;

/// Offset math for one side/width pair.
///
/// Positions are panel translations: `closed_offset` when hidden, `0` when
/// fully open. Openness measures how far a position has moved from the closed
/// offset toward `0`, so both sides share one formula with mirrored signs.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerGeometry {
    side: DrawerSide,
    width: f32,
    openness: Interpolation,
    translation: Interpolation,
    overlay_opacity: Interpolation,
}

impl DrawerGeometry {
    pub fn new(side: DrawerSide, width: f32) -> Result<Self, DrawerConfigError> {
        if !width.is_finite() || width < 0.0 {
            return Err(DrawerConfigError::InvalidWidth(width));
        }
        let closed_offset = closed_offset(side, width);
        Ok(Self {
            side,
            width,
            openness: Interpolation::new(&[0.0, width], &[0.0, 1.0])?.clamped(),
            translation: Interpolation::new(&[0.0, 1.0], &[closed_offset, 0.0])?.clamped(),
            overlay_opacity: Interpolation::new(&[0.0, 1.0], &[0.0, MAX_OVERLAY_OPACITY])?
                .clamped(),
        })
    }

    pub fn for_config<L>(config: &DrawerConfig<L>) -> Result<Self, DrawerConfigError> {
        Self::new(config.side, config.width)
    }

    pub fn side(&self) -> DrawerSide {
        self.side
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn closed_offset(&self) -> f32 {
        closed_offset(self.side, self.width)
    }

    /// Distance travelled from the closed offset toward the open position.
    pub fn reveal(&self, position: f32) -> f32 {
        match self.side {
            DrawerSide::Left => position + self.width,
            DrawerSide::Right => self.width - position,
        }
    }

    /// Openness fraction in `[0, 1]` for a panel translation.
    pub fn openness(&self, position: f32) -> f32 {
        self.openness.interpolate(self.reveal(position))
    }

    /// Panel translation for an openness fraction.
    pub fn translate_x(&self, openness: f32) -> f32 {
        self.translation.interpolate(openness)
    }

    pub fn overlay_opacity(&self, openness: f32) -> f32 {
        self.overlay_opacity.interpolate(openness)
    }

    /// Clamp a position into the travel range between closed and open.
    pub fn clamp_position(&self, position: f32) -> f32 {
        let closed = self.closed_offset();
        position.clamp(closed.min(0.0), closed.max(0.0))
    }

    /// Resting target for a settled state.
    pub fn target_position(&self, open: bool) -> f32 {
        if open {
            0.0
        } else {
            self.closed_offset()
        }
    }
}

fn closed_offset(side: DrawerSide, width: f32) -> f32 {
    match side {
        DrawerSide::Left => -width,
        DrawerSide::Right => width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_mirror_offsets() {
        let left = DrawerGeometry::new(DrawerSide::Left, 300.0).unwrap();
        let right = DrawerGeometry::new(DrawerSide::Right, 300.0).unwrap();

        assert_eq!(left.closed_offset(), -300.0);
        assert_eq!(right.closed_offset(), 300.0);
        for position in [0.0f32, 75.0, 150.0, 300.0] {
            assert_eq!(left.openness(-position), right.openness(position));
            assert_eq!(
                left.translate_x(left.openness(-position)),
                -right.translate_x(right.openness(position))
            );
        }
    }

    #[test]
    fn openness_is_clamped_for_overshoot() {
        let geometry = DrawerGeometry::new(DrawerSide::Left, 300.0).unwrap();
        assert_eq!(geometry.openness(-300.0), 0.0);
        assert_eq!(geometry.openness(-150.0), 0.5);
        assert_eq!(geometry.openness(0.0), 1.0);
        assert_eq!(geometry.openness(500.0), 1.0);
        assert_eq!(geometry.openness(-2_000.0), 0.0);
    }

    #[test]
    fn overlay_and_translation_follow_openness() {
        let geometry = DrawerGeometry::new(DrawerSide::Right, 200.0).unwrap();
        assert_eq!(geometry.translate_x(0.0), 200.0);
        assert_eq!(geometry.translate_x(1.0), 0.0);
        assert_eq!(geometry.overlay_opacity(0.0), 0.0);
        assert!((geometry.overlay_opacity(1.0) - MAX_OVERLAY_OPACITY).abs() < f32::EPSILON);
        assert!((geometry.overlay_opacity(0.5) - 0.35).abs() < 1e-6);
    }

    #[test]
    fn zero_width_is_a_step() {
        let geometry = DrawerGeometry::new(DrawerSide::Left, 0.0).unwrap();
        assert_eq!(geometry.closed_offset(), 0.0);
        assert_eq!(geometry.openness(0.0), 0.0);
        assert_eq!(geometry.openness(4.0), 1.0);
        assert_eq!(geometry.clamp_position(4.0), 0.0);
    }

    #[test]
    fn rejects_negative_width() {
        assert_eq!(
            DrawerGeometry::new(DrawerSide::Left, -1.0),
            Err(DrawerConfigError::InvalidWidth(-1.0))
        );
    }
}
