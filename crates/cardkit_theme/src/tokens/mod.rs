//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Spacing
//! - Border radii
//! - Shadows
//! - Animation durations and easings
//! - Responsive breakpoints
//!
//! Values keep the host's token formats verbatim (hex/rgba colors, `px`
//! lengths, `ms` durations, `cubic-bezier(...)` easings) so the emitted
//! style fragments can be handed straight to the presentation layer.

mod animation;
mod breakpoint;
mod color;
mod radius;
mod shadow;
mod spacing;

pub use animation::*;
pub use breakpoint::*;
pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
