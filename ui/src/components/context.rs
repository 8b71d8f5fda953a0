use leptos::prelude::{provide_context, use_context};

use crate::animation::AnimationConfig;

/// Makes `cfg` the animation settings for everything below the caller.
pub fn provide_animation_config(cfg: AnimationConfig) {
    provide_context(cfg);
}

/// Settings from the nearest provider, or the defaults.
pub fn use_animation_config() -> AnimationConfig {
    use_context::<AnimationConfig>().unwrap_or_default()
}
