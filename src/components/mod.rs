//! Site components: the animated background plus page chrome and sections.

pub mod cursor_follower;
pub mod floating_nav;
pub mod particle_background;
pub mod scroll_progress;
pub mod sections;
pub mod theme_toggle;
