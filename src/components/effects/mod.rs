//! Visual Effects
//!
//! Purely cosmetic canvas and DOM effects.

pub mod cursor_trail;
pub mod particles;
pub mod tilt_card;
pub mod typewriter;

pub use cursor_trail::CursorTrail;
pub use particles::ParticleField;
pub use tilt_card::TiltCard;
pub use typewriter::Typewriter;
