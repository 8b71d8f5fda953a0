use std::cell::RefCell;
use std::rc::Rc;

use leaflo_ui::animation::{AnimationConfig, CounterDriver, DisplayValue, VirtualClock};

type Log = Rc<RefCell<Vec<(u64, String)>>>;

fn counter(clock: &VirtualClock, text: &str, delay_ms: u32) -> (CounterDriver<VirtualClock>, Log) {
    let log: Log = Rc::default();
    let (sink, c) = (log.clone(), clock.clone());
    let driver = CounterDriver::new(
        text,
        &AnimationConfig::default(),
        delay_ms,
        clock.clone(),
        move |t: &str| sink.borrow_mut().push((c.now(), t.to_owned())),
    );
    (driver, log)
}

fn numbers(log: &Log, display: &DisplayValue) -> Vec<u64> {
    let DisplayValue::Numeric { prefix, suffix, .. } = display else {
        panic!("not numeric");
    };
    log.borrow()
        .iter()
        .map(|(_, t)| {
            t.strip_prefix(prefix.as_str())
                .and_then(|t| t.strip_suffix(suffix.as_str()))
                .and_then(|n| n.parse().ok())
                .expect("counter text keeps its prefix and suffix")
        })
        .collect()
}

#[test]
fn billions_of_won_counts_up_and_lands_exactly() {
    let clock = VirtualClock::new();
    let (d, log) = counter(&clock, "840억원", 0);
    d.on_intersection(0.3);

    clock.advance(1_000);
    let mid = d.text();
    let n: u64 = mid.trim_end_matches("억원").parse().unwrap();
    assert!(n > 0 && n < 840, "midpoint shows {mid}");

    clock.advance(1_500);
    assert_eq!(d.text(), "840억원");
    assert_eq!(log.borrow().last().unwrap().1, "840억원");
    assert!(d.is_complete());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn values_never_decrease() {
    for text in ["96%", "약 30만톤", "+1만원/톤", "21-30톤", "1", "123456789"] {
        let clock = VirtualClock::new();
        let (d, log) = counter(&clock, text, 0);
        d.became_visible();
        clock.advance(10_000);

        let display = DisplayValue::parse(text);
        let seen = numbers(&log, &display);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{text}: {seen:?}");
        assert_eq!(seen.last().copied(), display.target());
        assert_eq!(d.text(), text);
    }
}

#[test]
fn staggered_siblings_start_in_delay_order() {
    let clock = VirtualClock::new();
    let (first, first_log) = counter(&clock, "90%", 0);
    let (second, second_log) = counter(&clock, "74%", 100);

    first.on_intersection(1.0);
    second.on_intersection(1.0);

    clock.advance(50);
    assert_eq!(first_log.borrow().len(), 1);
    assert!(second_log.borrow().is_empty());
    assert_eq!(second.text(), "0%");

    clock.advance(3_000);
    let t1 = first_log.borrow()[0].0;
    let t2 = second_log.borrow()[0].0;
    assert!(t1 < t2);
    assert_eq!(t2 - t1, 100);
    assert_eq!(first.text(), "90%");
    assert_eq!(second.text(), "74%");
}

#[test]
fn unmount_mid_animation_stops_everything() {
    let clock = VirtualClock::new();
    let (d, log) = counter(&clock, "96%", 0);
    d.on_intersection(1.0);
    clock.advance(500);

    let writes = log.borrow().len();
    let fired = clock.fired();
    assert!(writes > 0 && !d.is_complete());

    drop(d);
    assert_eq!(clock.pending(), 0);
    clock.advance(10_000);
    assert_eq!(log.borrow().len(), writes);
    assert_eq!(clock.fired(), fired);
}

#[test]
fn no_digits_stays_put() {
    let clock = VirtualClock::new();
    let (d, log) = counter(&clock, "N/A", 0);
    assert_eq!(d.text(), "N/A");
    d.on_intersection(1.0);
    assert!(!d.is_scheduled());
    clock.advance(10_000);
    assert!(log.borrow().is_empty());
    assert_eq!(clock.fired(), 0);
    assert_eq!(d.text(), "N/A");
}

#[test]
fn scrolling_back_does_not_replay() {
    let clock = VirtualClock::new();
    let (d, log) = counter(&clock, "25톤", 0);
    d.on_intersection(0.2);
    clock.advance(3_000);
    let writes = log.borrow().len();

    for ratio in [0.0, 0.5, 0.0, 1.0] {
        d.on_intersection(ratio);
        clock.advance(500);
    }
    assert_eq!(log.borrow().len(), writes);
    assert_eq!(d.text(), "25톤");
}
