//! Page collaborators around the gallery: carousel, navigation menu,
//! lightbox and section dots. Each is a small index or toggle state machine.

mod carousel;
mod lightbox;
mod menu;
mod section_nav;

pub use carousel::{Carousel, CarouselKey, SWIPE_THRESHOLD};
pub use lightbox::{Lightbox, LightboxKey};
pub use menu::NavMenu;
pub use section_nav::SectionNav;
