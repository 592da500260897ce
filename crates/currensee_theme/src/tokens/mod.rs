//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Roles (foreground/background color pairs)
//! - Border radii
//! - Spacing
//! - Shadows
//! - Typography

mod color;
mod radius;
mod role;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use radius::*;
pub use role::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
