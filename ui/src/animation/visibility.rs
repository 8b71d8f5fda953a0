// browsers report ratios like 0.0999 at a 0.1 crossing
const RATIO_SLACK: f64 = 1e-3;

/// Per-element "has it been seen yet" latch.
///
/// `has_become_visible_once` flips to true at most once. After that every
/// intersection report is ignored, so a new element instance is the only way
/// to fire again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityState {
    has_become_visible_once: bool,
    is_currently_observed: bool,
    threshold: f64,
}

impl VisibilityState {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { 0.1 } else { threshold.clamp(0.0, 1.0) };
        Self {
            has_become_visible_once: false,
            is_currently_observed: false,
            threshold,
        }
    }

    pub fn has_become_visible_once(&self) -> bool {
        self.has_become_visible_once
    }

    pub fn is_currently_observed(&self) -> bool {
        self.is_currently_observed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts watching, unless the latch already fired.
    pub fn observe(&mut self) {
        if !self.has_become_visible_once {
            self.is_currently_observed = true;
        }
    }

    pub fn unobserve(&mut self) {
        self.is_currently_observed = false;
    }

    /// Feeds one intersection report. Returns true exactly once: the first
    /// time an observed element reaches the threshold.
    pub fn on_intersection(&mut self, ratio: f64) -> bool {
        if self.has_become_visible_once || !self.is_currently_observed {
            return false;
        }
        // a zero threshold still needs some overlap
        let hit = if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio + RATIO_SLACK >= self.threshold
        };
        if hit {
            self.fire();
        }
        hit
    }

    /// Marks visible without an observer, used when the host has no
    /// intersection support. Same once-only contract as `on_intersection`.
    pub fn force_visible(&mut self) -> bool {
        if self.has_become_visible_once {
            return false;
        }
        self.fire();
        true
    }

    fn fire(&mut self) {
        self.has_become_visible_once = true;
        self.is_currently_observed = false;
    }
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self::new(0.1)
    }
}
