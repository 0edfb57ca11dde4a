//! Page section content
//!
//! Each module renders one navigable region of the single page and returns
//! the rect it occupied, which the shell records for the visibility
//! observer and for click-driven scroll targeting.

pub mod about;
pub mod church_life;
pub mod contact;
pub mod hero;
