use super::easing::Easing;

/// Animation constants shared by every reveal and counter on the site.
///
/// Provided once at the app root through Leptos context. Components that
/// render outside the app (tests, previews) fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub counter_easing: Easing,

    pub reveal_duration_ms: u32,
    /// Initial downward offset in px.
    pub reveal_offset_px: f64,
    pub reveal_opacity: f64,
    pub reveal_easing: Easing,

    /// Fraction of the element that must be on screen, in `[0, 1]`.
    pub visibility_threshold: f64,
    /// Positive values fire before the element enters the viewport.
    pub pre_trigger_margin_px: i32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            counter_steps: 60,
            counter_easing: Easing::EaseOutQuart,

            reveal_duration_ms: 600,
            reveal_offset_px: 20.0,
            reveal_opacity: 0.0,
            reveal_easing: Easing::EaseOutCubic,

            visibility_threshold: 0.1,
            pre_trigger_margin_px: 0,
        }
    }
}

impl AnimationConfig {
    /// Step count, never zero.
    pub fn steps(&self) -> u32 {
        self.counter_steps.max(1)
    }

    /// Interval between counter ticks, never zero.
    pub fn tick_ms(&self) -> u32 {
        (self.counter_duration_ms / self.steps()).max(1)
    }

    pub fn threshold(&self) -> f64 {
        if self.visibility_threshold.is_nan() {
            return Self::default().visibility_threshold;
        }
        self.visibility_threshold.clamp(0.0, 1.0)
    }

    /// `rootMargin` for `IntersectionObserver`. Only the bottom edge grows so
    /// elements below the fold fire early.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.pre_trigger_margin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tick_is_33ms() {
        let cfg = AnimationConfig::default();
        assert_eq!(cfg.tick_ms(), 33);
        assert_eq!(cfg.steps(), 60);
    }

    #[test]
    fn zero_steps_and_tiny_duration_are_safe() {
        let cfg = AnimationConfig {
            counter_steps: 0,
            counter_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.steps(), 1);
        assert_eq!(cfg.tick_ms(), 1);
    }

    #[test]
    fn threshold_is_clamped() {
        let mut cfg = AnimationConfig::default();
        cfg.visibility_threshold = 4.0;
        assert_eq!(cfg.threshold(), 1.0);
        cfg.visibility_threshold = -1.0;
        assert_eq!(cfg.threshold(), 0.0);
        cfg.visibility_threshold = f64::NAN;
        assert_eq!(cfg.threshold(), 0.1);
    }

    #[test]
    fn root_margin_only_moves_bottom_edge() {
        let cfg = AnimationConfig {
            pre_trigger_margin_px: 50,
            ..Default::default()
        };
        assert_eq!(cfg.root_margin(), "0px 0px 50px 0px");
        assert_eq!(AnimationConfig::default().root_margin(), "0px 0px 0px 0px");
    }
}
