//! Scroll-triggered reveal and count-up animations.
//!
//! Everything here is plain Rust with no DOM access, so it runs and tests off
//! the browser. The Leptos components in `crate::components` feed it
//! intersection reports and a [`TimerHost`].

pub mod config;
pub mod counter;
pub mod display;
pub mod driver;
pub mod easing;
pub mod reveal;
pub mod tilt;
pub mod timers;
pub mod visibility;

pub use config::AnimationConfig;
pub use counter::{CounterState, Phase};
pub use display::DisplayValue;
pub use driver::CounterDriver;
pub use easing::Easing;
pub use reveal::{Reveal, RevealStyle};
pub use timers::{TimerHost, VirtualClock, VirtualTimer};
pub use visibility::VisibilityState;

#[cfg(feature = "web")]
pub use timers::{GlooTimer, GlooTimers};
