//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod carousel;
pub mod effects;
pub mod loading;
pub mod nav;
pub mod toast;

pub use carousel::Carousel;
pub use effects::{CursorTrail, ParticleField, TiltCard, Typewriter};
pub use loading::{ProjectCardSkeleton, RowSkeleton, ServiceCardSkeleton};
pub use nav::Nav;
pub use toast::Toast;
