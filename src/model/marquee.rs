//! Title overflow detection and marquee animation math

use std::time::Duration;

/// Loop length of the marquee before it is scaled by the overflow
pub const BASE_DURATION: Duration = Duration::from_secs(8);

const MIN_SPEED_MULTIPLIER: f64 = 0.5;
const MAX_SPEED_MULTIPLIER: f64 = 2.0;
const OVERFLOW_UNIT_PX: f64 = 100.0;

/// Scale factor applied to [`BASE_DURATION`]: one unit per 100px of
/// overflow, clamped to 0.5..=2.0.
pub fn speed_multiplier(overflow_px: f64) -> f64 {
    let ratio = overflow_px / OVERFLOW_UNIT_PX;
    if ratio.is_nan() {
        return MIN_SPEED_MULTIPLIER;
    }
    ratio.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER)
}

pub fn animation_duration(overflow_px: f64) -> Duration {
    BASE_DURATION.mul_f64(speed_multiplier(overflow_px))
}

/// A running marquee for one overflowing title
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeAnimation {
    pub container_width: u32,
    pub overflow_px: f64,
    pub duration: Duration,
}

impl MarqueeAnimation {
    /// Returns `None` when the title fits its container.
    pub fn for_title(title_width_px: f64, container_width: u32) -> Option<Self> {
        let overflow_px = title_width_px - f64::from(container_width);
        if overflow_px <= 0.0 || overflow_px.is_nan() {
            return None;
        }
        Some(Self {
            container_width,
            overflow_px,
            duration: animation_duration(overflow_px),
        })
    }

    pub fn name(&self) -> String {
        MarqueeKeyframes::new(self.container_width).name()
    }

    /// Horizontal scroll offset in pixels `elapsed` into the animation.
    ///
    /// Each loop holds at the start for the first quarter, scrolls linearly
    /// until three quarters, then holds with the end of the title visible.
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        let period = self.duration.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        let phase = (elapsed.as_secs_f64() % period) / period;
        if phase < 0.25 {
            0.0
        } else if phase < 0.75 {
            self.overflow_px * (phase - 0.25) / 0.5
        } else {
            self.overflow_px
        }
    }
}

/// Keyframe rule shared by every marquee in a container of the same width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarqueeKeyframes {
    pub container_width: u32,
}

impl MarqueeKeyframes {
    pub fn new(container_width: u32) -> Self {
        Self { container_width }
    }

    pub fn name(&self) -> String {
        format!("marquee-{}", self.container_width)
    }

    pub fn css(&self) -> String {
        let end = format!("translateX(calc(-100% + {}px))", self.container_width);
        format!(
            "@keyframes {} {{ 0% {{ transform: translateX(0%); }} 25% {{ transform: translateX(0%); }} 75% {{ transform: {end}; }} 100% {{ transform: {end}; }} }}",
            self.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(duration: Duration) -> f64 {
        duration.as_secs_f64()
    }

    #[test]
    fn long_title_in_mobile_container() {
        // 240px title in a 150px container overflows by 90px
        let animation = MarqueeAnimation::for_title(240.0, 150).unwrap();
        assert_eq!(animation.overflow_px, 90.0);
        assert!((secs(animation.duration) - 7.2).abs() < 1e-9);
        assert_eq!(animation.name(), "marquee-150");
    }

    #[test]
    fn fitting_title_has_no_animation() {
        assert!(MarqueeAnimation::for_title(150.0, 150).is_none());
        assert!(MarqueeAnimation::for_title(90.0, 170).is_none());
    }

    #[test]
    fn duration_is_clamped_to_half_and_double() {
        assert!((secs(animation_duration(1.0)) - 4.0).abs() < 1e-9);
        assert!((secs(animation_duration(10_000.0)) - 16.0).abs() < 1e-9);
        assert!((secs(animation_duration(f64::NAN)) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn offset_holds_then_scrolls_then_holds() {
        let animation = MarqueeAnimation::for_title(350.0, 150).unwrap();
        let period = animation.duration;
        assert_eq!(animation.offset_at(Duration::ZERO), 0.0);
        assert_eq!(animation.offset_at(period.mul_f64(0.2)), 0.0);
        assert!((animation.offset_at(period.mul_f64(0.5)) - 100.0).abs() < 1e-6);
        assert_eq!(animation.offset_at(period.mul_f64(0.9)), 200.0);
        // wraps around into the next loop
        assert_eq!(animation.offset_at(period + period.mul_f64(0.1)), 0.0);
    }

    #[test]
    fn keyframes_reveal_the_end_of_the_title() {
        let css = MarqueeKeyframes::new(170).css();
        assert!(css.starts_with("@keyframes marquee-170"));
        assert!(css.contains("75% { transform: translateX(calc(-100% + 170px)); }"));
    }
}
