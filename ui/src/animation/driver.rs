use std::cell::RefCell;
use std::rc::Rc;

use super::config::AnimationConfig;
use super::counter::CounterState;
use super::timers::TimerHost;
use super::visibility::VisibilityState;

type OnChange = Rc<RefCell<Box<dyn FnMut(&str)>>>;

struct Inner<H: TimerHost> {
    visibility: VisibilityState,
    counter: CounterState,
    delay_ms: u32,
    tick_ms: u32,
    pending: Option<H::Handle>,
    mounted: bool,
}

/// Wires one counter to its visibility latch and a clock.
///
/// Lifecycle: built on mount, fed intersection reports, dropped (or
/// [`unmount`](CounterDriver::unmount)ed) with its element. Dropping cancels
/// any pending timer, so no callback runs against a detached element.
pub struct CounterDriver<H: TimerHost> {
    inner: Rc<RefCell<Inner<H>>>,
    on_change: OnChange,
    host: H,
}

impl<H: TimerHost> CounterDriver<H> {
    pub fn new(
        text: &str,
        cfg: &AnimationConfig,
        delay_ms: u32,
        host: H,
        on_change: impl FnMut(&str) + 'static,
    ) -> Self {
        let mut visibility = VisibilityState::new(cfg.threshold());
        visibility.observe();

        Self {
            inner: Rc::new(RefCell::new(Inner {
                visibility,
                counter: CounterState::parse(text, cfg),
                delay_ms,
                tick_ms: cfg.tick_ms(),
                pending: None,
                mounted: true,
            })),
            on_change: Rc::new(RefCell::new(Box::new(on_change))),
            host,
        }
    }

    /// Text to show right now: zero-count for idle counters, the literal for
    /// strings without digits.
    pub fn text(&self) -> String {
        self.inner.borrow().counter.text()
    }

    pub fn is_complete(&self) -> bool {
        self.inner.borrow().counter.is_complete()
    }

    pub fn has_become_visible(&self) -> bool {
        self.inner.borrow().visibility.has_become_visible_once()
    }

    /// Whether a timer is currently held.
    pub fn is_scheduled(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Feeds an intersection ratio. Starts the counter on the first report
    /// past the threshold; everything after that is ignored.
    pub fn on_intersection(&self, ratio: f64) {
        let fired = {
            let mut inner = self.inner.borrow_mut();
            inner.mounted && inner.visibility.on_intersection(ratio)
        };
        if fired {
            self.start();
        }
    }

    /// Visible without an intersection report, e.g. no observer support.
    pub fn became_visible(&self) {
        let fired = {
            let mut inner = self.inner.borrow_mut();
            inner.mounted && inner.visibility.force_visible()
        };
        if fired {
            self.start();
        }
    }

    /// Cancels any pending timer and stops all further updates.
    pub fn unmount(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.mounted = false;
            inner.visibility.unobserve();
            inner.pending.take()
        };
        drop(pending);
    }

    fn start(&self) {
        let delay_ms = {
            let mut inner = self.inner.borrow_mut();
            if !inner.counter.start() {
                return;
            }
            inner.delay_ms
        };
        log::debug!("counter start: delay {delay_ms}ms");

        if delay_ms == 0 {
            let handle = start_interval(&self.inner, &self.on_change, &self.host);
            self.inner.borrow_mut().pending = Some(handle);
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let on_change = self.on_change.clone();
        let host = self.host.clone();
        let handle = self.host.timeout(
            delay_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.borrow().mounted {
                    return;
                }
                let handle = start_interval(&inner, &on_change, &host);
                // replaces the timeout handle, which has already fired
                let old = inner.borrow_mut().pending.replace(handle);
                drop(old);
            }),
        );
        self.inner.borrow_mut().pending = Some(handle);
    }
}

fn start_interval<H: TimerHost>(
    inner: &Rc<RefCell<Inner<H>>>,
    on_change: &OnChange,
    host: &H,
) -> H::Handle {
    let weak = Rc::downgrade(inner);
    let on_change = on_change.clone();
    let tick_ms = inner.borrow().tick_ms;

    host.interval(
        tick_ms,
        Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let (text, finished) = {
                let mut inner = inner.borrow_mut();
                if !inner.mounted || inner.counter.tick().is_none() {
                    return;
                }
                let done = inner.counter.is_complete();
                let finished = if done { inner.pending.take() } else { None };
                (inner.counter.text(), (done, finished))
            };

            (on_change.borrow_mut())(&text);

            let (done, handle) = finished;
            if done {
                log::debug!("counter complete: {text}");
                drop(handle);
            }
        }),
    )
}

impl<H: TimerHost> Drop for CounterDriver<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
