//! Section routing and static content.
//!
//! The storefront shows one [`Section`] at a time; each maps to fixed
//! [`SectionContent`] with no data dependency beyond the store info.

mod pages;
mod section;

pub use pages::{ContentBlock, Footer, Hero, SectionContent, StaticPage};
pub use section::Section;
