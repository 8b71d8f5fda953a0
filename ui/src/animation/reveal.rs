use super::config::AnimationConfig;
use super::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    /// Downward offset in px.
    pub offset_y: f64,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle { opacity: 1.0, offset_y: 0.0 };

    pub fn css(&self) -> String {
        format!("opacity:{};transform:translateY({}px);", self.opacity, self.offset_y)
    }
}

/// One-shot fade-and-rise.
///
/// The browser runs the actual transition from [`Reveal::css`]; `style_at`
/// gives the same curve for code that needs a value without a browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    from: RevealStyle,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
    triggered: bool,
    settled: bool,
}

impl Reveal {
    pub fn new(cfg: &AnimationConfig, delay_ms: u32) -> Self {
        Self {
            from: RevealStyle {
                opacity: cfg.reveal_opacity.clamp(0.0, 1.0),
                offset_y: cfg.reveal_offset_px,
            },
            duration_ms: cfg.reveal_duration_ms,
            delay_ms,
            easing: cfg.reveal_easing,
            triggered: false,
            settled: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Starts the transition. Later calls do nothing.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        true
    }

    /// Puts the element in its final state regardless of timing.
    pub fn settle(&mut self) {
        self.triggered = true;
        self.settled = true;
    }

    /// Style `elapsed_ms` after the trigger, delay included.
    pub fn style_at(&self, elapsed_ms: u32) -> RevealStyle {
        if self.settled {
            return RevealStyle::VISIBLE;
        }
        if !self.triggered {
            return self.from;
        }
        let Some(t) = elapsed_ms.checked_sub(self.delay_ms) else {
            return self.from;
        };
        if self.duration_ms == 0 || t >= self.duration_ms {
            return RevealStyle::VISIBLE;
        }
        let k = self.easing.apply(t as f64 / self.duration_ms as f64);
        RevealStyle {
            opacity: self.from.opacity + (1.0 - self.from.opacity) * k,
            offset_y: self.from.offset_y * (1.0 - k),
        }
    }

    /// Inline style for the element: the resting style plus a transition that
    /// the browser plays when the trigger flips it to visible.
    pub fn css(&self) -> String {
        let rest = if self.triggered { RevealStyle::VISIBLE } else { self.from };
        if self.settled {
            return rest.css();
        }
        format!(
            "{}transition:opacity {d}ms {e} {delay}ms,transform {d}ms {e} {delay}ms;",
            rest.css(),
            d = self.duration_ms,
            e = self.easing.css(),
            delay = self.delay_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(delay: u32) -> Reveal {
        Reveal::new(&AnimationConfig::default(), delay)
    }

    #[test]
    fn hidden_until_triggered() {
        let r = reveal(0);
        assert_eq!(r.style_at(10_000), RevealStyle { opacity: 0.0, offset_y: 20.0 });
    }

    #[test]
    fn monotone_towards_visible() {
        let mut r = reveal(0);
        r.trigger();
        let mut prev = r.style_at(0);
        for t in (0..=700).step_by(10) {
            let s = r.style_at(t);
            assert!(s.opacity >= prev.opacity);
            assert!(s.offset_y <= prev.offset_y);
            prev = s;
        }
        assert_eq!(r.style_at(600), RevealStyle::VISIBLE);
    }

    #[test]
    fn delay_holds_initial_state() {
        let mut r = reveal(200);
        r.trigger();
        assert_eq!(r.style_at(150).opacity, 0.0);
        assert!(r.style_at(300).opacity > 0.0);
        assert_eq!(r.style_at(800), RevealStyle::VISIBLE);
    }

    #[test]
    fn trigger_is_once_only() {
        let mut r = reveal(0);
        assert!(r.trigger());
        assert!(!r.trigger());
    }

    #[test]
    fn settle_skips_animation() {
        let mut r = reveal(500);
        r.settle();
        assert_eq!(r.style_at(0), RevealStyle::VISIBLE);
        assert_eq!(r.css(), "opacity:1;transform:translateY(0px);");
    }

    #[test]
    fn css_carries_delay() {
        let mut r = reveal(100);
        assert!(r.css().starts_with("opacity:0;transform:translateY(20px);"));
        r.trigger();
        let css = r.css();
        assert!(css.starts_with("opacity:1;transform:translateY(0px);"));
        assert!(css.contains("opacity 600ms"));
        assert!(css.contains(" 100ms,"));
    }
}
