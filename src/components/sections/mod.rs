//! Page sections: hero, about, skills, projects, contact and footer.
//!
//! All of these are presentational views over the [`crate::content`] data
//! model; layout and visual treatment live in the host stylesheet behind
//! semantic class names.

mod about;
mod contact;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
