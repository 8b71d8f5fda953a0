/// Easing curves used by reveals and counters.
///
/// All curves map `[0, 1]` onto `[0, 1]`, are monotone, and hit both ends
/// exactly. Inputs outside the range are clamped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseOutQuart,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

        match self {
            Easing::Linear => p,
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - p).powi(4),
        }
    }

    /// CSS `transition-timing-function` matching the curve.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseOutQuart => "cubic-bezier(0.25, 1, 0.5, 1)",
        }
    }
}
