use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Something that can schedule callbacks on a clock.
///
/// Handles cancel their timer when dropped, the same contract as
/// `gloo_timers::callback::{Timeout, Interval}`.
pub trait TimerHost: Clone + 'static {
    type Handle: 'static;

    fn timeout(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Self::Handle;
    fn interval(&self, period_ms: u32, f: Box<dyn FnMut()>) -> Self::Handle;
}

#[cfg(feature = "web")]
pub use web::{GlooTimer, GlooTimers};

#[cfg(feature = "web")]
mod web {
    use gloo_timers::callback::{Interval, Timeout};

    use super::TimerHost;

    /// Browser clock via `setTimeout`/`setInterval`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooTimers;

    pub enum GlooTimer {
        Timeout(Timeout),
        Interval(Interval),
    }

    impl GlooTimer {
        /// Same as dropping, spelled out.
        pub fn cancel(self) {
            match self {
                GlooTimer::Timeout(t) => drop(t.cancel()),
                GlooTimer::Interval(i) => drop(i.cancel()),
            }
        }
    }

    impl TimerHost for GlooTimers {
        type Handle = GlooTimer;

        fn timeout(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> GlooTimer {
            GlooTimer::Timeout(Timeout::new(delay_ms, f))
        }

        fn interval(&self, period_ms: u32, f: Box<dyn FnMut()>) -> GlooTimer {
            GlooTimer::Interval(Interval::new(period_ms, f))
        }
    }
}

enum Callback {
    Once(Box<dyn FnOnce()>),
    Every(u32, Box<dyn FnMut()>),
}

struct Entry {
    due: u64,
    // None while the callback is running
    callback: Option<Callback>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
    fired: u64,
}

/// Deterministic clock that only moves when told to.
///
/// Used for tests and for rendering animation frames without a browser.
/// Timers due at the same instant fire in the order they were scheduled.
#[derive(Clone, Default)]
pub struct VirtualClock(Rc<RefCell<Clock>>);

pub struct VirtualTimer {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for VirtualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().entries.remove(&self.id);
        }
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.0.borrow().now
    }

    /// Timers that are scheduled and not yet cancelled.
    pub fn pending(&self) -> usize {
        self.0.borrow().entries.len()
    }

    /// Total callbacks run so far.
    pub fn fired(&self) -> u64 {
        self.0.borrow().fired
    }

    /// Moves time forward, running every callback that falls due on the way.
    pub fn advance(&self, ms: u64) {
        let until = self.0.borrow().now + ms;
        while let Some((id, callback)) = self.take_next(until) {
            match callback {
                Callback::Once(f) => {
                    self.0.borrow_mut().entries.remove(&id);
                    f();
                }
                Callback::Every(period, mut f) => {
                    f();
                    // the callback may have dropped its own handle
                    let mut clock = self.0.borrow_mut();
                    if let Some(entry) = clock.entries.get_mut(&id) {
                        entry.due += period as u64;
                        entry.callback = Some(Callback::Every(period, f));
                    }
                }
            }
        }
        self.0.borrow_mut().now = until;
    }

    fn take_next(&self, until: u64) -> Option<(u64, Callback)> {
        let mut clock = self.0.borrow_mut();
        let (id, due) = clock
            .entries
            .iter()
            .filter(|(_, e)| e.callback.is_some() && e.due <= until)
            .min_by_key(|(id, e)| (e.due, **id))
            .map(|(id, e)| (*id, e.due))?;

        clock.now = due;
        clock.fired += 1;
        let callback = clock.entries.get_mut(&id)?.callback.take()?;
        Some((id, callback))
    }

    fn schedule(&self, delay_ms: u32, callback: Callback) -> VirtualTimer {
        let mut clock = self.0.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay_ms as u64;
        clock.entries.insert(
            id,
            Entry {
                due,
                callback: Some(callback),
            },
        );
        VirtualTimer {
            id,
            clock: Rc::downgrade(&self.0),
        }
    }
}

impl TimerHost for VirtualClock {
    type Handle = VirtualTimer;

    fn timeout(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> VirtualTimer {
        self.schedule(delay_ms, Callback::Once(f))
    }

    fn interval(&self, period_ms: u32, f: Box<dyn FnMut()>) -> VirtualTimer {
        self.schedule(period_ms, Callback::Every(period_ms.max(1), f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn timeout_fires_once_at_due_time() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _t = clock.timeout(100, Box::new(move || h.set(h.get() + 1)));

        clock.advance(99);
        assert_eq!(hits.get(), 0);
        clock.advance(1);
        assert_eq!(hits.get(), 1);
        clock.advance(1000);
        assert_eq!(hits.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn interval_repeats_until_dropped() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let t = clock.interval(10, Box::new(move || h.set(h.get() + 1)));

        clock.advance(35);
        assert_eq!(hits.get(), 3);
        drop(t);
        assert_eq!(clock.pending(), 0);
        clock.advance(100);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn dropped_timeout_never_fires() {
        let clock = VirtualClock::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        drop(clock.timeout(5, Box::new(move || h.set(1))));
        clock.advance(10);
        assert_eq!(hits.get(), 0);
        assert_eq!(clock.fired(), 0);
    }

    #[test]
    fn interval_can_cancel_itself() {
        let clock = VirtualClock::new();
        let slot: Rc<RefCell<Option<VirtualTimer>>> = Rc::default();
        let hits = Rc::new(Cell::new(0));

        let (s, h) = (slot.clone(), hits.clone());
        let t = clock.interval(
            10,
            Box::new(move || {
                h.set(h.get() + 1);
                if h.get() == 2 {
                    s.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(t);

        clock.advance(100);
        assert_eq!(hits.get(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn callbacks_can_schedule_more() {
        let clock = VirtualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let keep: Rc<RefCell<Vec<VirtualTimer>>> = Rc::default();

        let (c, o, k) = (clock.clone(), order.clone(), keep.clone());
        let first = clock.timeout(
            10,
            Box::new(move || {
                o.borrow_mut().push(c.now());
                let o2 = o.clone();
                let c2 = c.clone();
                let t = c.timeout(5, Box::new(move || o2.borrow_mut().push(c2.now())));
                k.borrow_mut().push(t);
            }),
        );

        clock.advance(20);
        assert_eq!(*order.borrow(), vec![10, 15]);
        assert_eq!(clock.now(), 20);
        drop(first);
    }

    #[test]
    fn same_instant_fires_in_schedule_order() {
        let clock = VirtualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (order.clone(), order.clone());
        let _t1 = clock.timeout(10, Box::new(move || a.borrow_mut().push("a")));
        let _t2 = clock.timeout(10, Box::new(move || b.borrow_mut().push("b")));
        clock.advance(10);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }
}
