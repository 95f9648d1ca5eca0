//! Cardkit Theme System
//!
//! Design tokens and theme construction for cardkit components.
//!
//! # Overview
//!
//! - **Design tokens**: colors, spacing, radii, shadows, animations, breakpoints
//! - **Default theme**: a process-wide read-only [`Theme`] built on first use
//! - **Overrides**: partial [`ThemeOverrides`] records deep-merged onto a base
//!   theme to derive a new one
//!
//! # Quick Start
//!
//! ```rust
//! use cardkit_theme::{create_theme, default_theme, ColorOverrides, ThemeOverrides};
//!
//! let overrides = ThemeOverrides {
//!     colors: Some(ColorOverrides {
//!         primary: Some("#ff5500".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let theme = create_theme(&default_theme(), &overrides);
//! assert_eq!(theme.colors.primary, "#ff5500");
//! assert_eq!(theme.colors.surface, default_theme().colors.surface);
//! ```
//!
//! Overrides can also be loaded from TOML or JSON documents with the same
//! camelCase shape as a full theme:
//!
//! ```rust
//! use cardkit_theme::{Theme, ThemeOverrides};
//!
//! let overrides = ThemeOverrides::from_toml_str("[borderRadius]\nmd = \"10px\"").unwrap();
//! assert_eq!(Theme::default().merged(&overrides).border_radius.md, "10px");
//! ```

pub mod error;
pub mod helpers;
pub mod overrides;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use helpers::{contrast_text_color, is_valid_color, media_query, px_to_rem};
pub use overrides::*;
pub use state::default_theme;
pub use theme::Theme;
pub use tokens::*;
