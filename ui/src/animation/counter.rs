use super::config::AnimationConfig;
use super::display::DisplayValue;
use super::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { step: u32 },
    Complete,
    /// Nothing to count; the text never changes.
    Literal,
}

/// Count-up state for one stat. Pure: the caller owns the clock and calls
/// [`CounterState::tick`] once per period.
#[derive(Debug, Clone)]
pub struct CounterState {
    display: DisplayValue,
    current: u64,
    steps: u32,
    easing: Easing,
    phase: Phase,
}

impl CounterState {
    pub fn new(display: DisplayValue, cfg: &AnimationConfig) -> Self {
        let phase = if display.is_literal() { Phase::Literal } else { Phase::Idle };
        Self {
            display,
            current: 0,
            steps: cfg.steps(),
            easing: cfg.counter_easing,
            phase,
        }
    }

    pub fn parse(text: &str, cfg: &AnimationConfig) -> Self {
        Self::new(DisplayValue::parse(text), cfg)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> Option<u64> {
        self.display.target()
    }

    pub fn is_literal(&self) -> bool {
        self.phase == Phase::Literal
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn text(&self) -> String {
        self.display.render(self.current)
    }

    /// Moves `Idle` to `Running`. Returns whether a timer is needed; false for
    /// literals and for counters that already ran.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if self.display.target() == Some(0) {
            self.phase = Phase::Complete;
            return false;
        }
        self.phase = Phase::Running { step: 0 };
        true
    }

    /// Value shown after `step` of `steps` ticks. The last step is exact.
    pub fn value_at(&self, step: u32) -> u64 {
        let Some(target) = self.display.target() else {
            return 0;
        };
        if step >= self.steps {
            return target;
        }
        let progress = step as f64 / self.steps as f64;
        let v = (target as f64 * self.easing.apply(progress)).floor() as u64;
        v.min(target)
    }

    /// Advances one step. Returns the new value, or `None` when not running.
    pub fn tick(&mut self) -> Option<u64> {
        let Phase::Running { step } = self.phase else {
            return None;
        };
        let next = step + 1;
        // floor of f64 can dip when target is near u64::MAX; keep it monotone
        self.current = self.value_at(next).max(self.current);
        self.phase = if next >= self.steps {
            Phase::Complete
        } else {
            Phase::Running { step: next }
        };
        Some(self.current)
    }

    /// Jumps to the final value without ticking.
    pub fn settle(&mut self) {
        if let Some(target) = self.display.target() {
            self.current = target;
            self.phase = Phase::Complete;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (CounterState, Vec<u64>) {
        let mut c = CounterState::parse(text, &AnimationConfig::default());
        assert!(c.start());
        let mut seen = Vec::new();
        while let Some(v) = c.tick() {
            seen.push(v);
        }
        (c, seen)
    }

    #[test]
    fn non_decreasing_and_ends_exact() {
        for target in [1u64, 2, 7, 59, 60, 61, 96, 840, 1_000_000, u32::MAX as u64] {
            let (c, seen) = run(&format!("{target}%"));
            assert_eq!(seen.len(), 60);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert_eq!(*seen.last().unwrap(), target);
            assert!(c.is_complete());
            assert_eq!(c.text(), format!("{target}%"));
        }
    }

    #[test]
    fn decelerates() {
        let (_, seen) = run("840억원");
        let first_half = seen[29];
        assert!(first_half > 840 / 2);
        let early = seen[9];
        let late = seen[59] - seen[49];
        assert!(early > late);
    }

    #[test]
    fn literal_never_runs() {
        let mut c = CounterState::parse("N/A", &AnimationConfig::default());
        assert!(c.is_literal());
        assert!(!c.start());
        assert_eq!(c.tick(), None);
        assert_eq!(c.text(), "N/A");
    }

    #[test]
    fn zero_target_completes_without_timer() {
        let mut c = CounterState::parse("0건", &AnimationConfig::default());
        assert!(!c.start());
        assert!(c.is_complete());
        assert_eq!(c.text(), "0건");
    }

    #[test]
    fn completed_counter_does_not_restart() {
        let (mut c, _) = run("96%");
        assert!(!c.start());
        assert_eq!(c.tick(), None);
        assert_eq!(c.current(), 96);
    }

    #[test]
    fn idle_counter_shows_zero() {
        let c = CounterState::parse("96%", &AnimationConfig::default());
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.text(), "0%");
    }

    #[test]
    fn settle_forces_final() {
        let mut c = CounterState::parse("74%", &AnimationConfig::default());
        c.start();
        c.tick();
        c.settle();
        assert_eq!(c.text(), "74%");
        assert!(c.is_complete());
        assert_eq!(c.tick(), None);
    }

    #[test]
    fn single_step_config() {
        let cfg = AnimationConfig {
            counter_steps: 1,
            ..Default::default()
        };
        let mut c = CounterState::parse("30만톤", &cfg);
        c.start();
        assert_eq!(c.tick(), Some(30));
        assert!(c.is_complete());
    }
}
