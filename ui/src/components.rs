pub mod context;
pub mod contact_form;
pub mod counter;
pub mod fade_in;
pub mod footer;
pub mod gradient_text;
pub mod icon;
pub mod in_view;
pub mod navigation;
pub mod tilt_card;

pub use contact_form::ContactForm;
pub use counter::AnimatedCounter;
pub use fade_in::FadeIn;
pub use footer::Footer;
pub use gradient_text::GradientText;
pub use icon::IconBadge;
pub use navigation::Navigation;
pub use tilt_card::TiltCard;
