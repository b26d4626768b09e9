//! # tweak-css
//!
//! Nudge numeric CSS values without parsing CSS.
//!
//! The crate works on stylesheet text directly: it finds the first rule block
//! for a literal selector, finds a property inside it, scales the numbers in
//! its value, and splices the new value back in. Nothing else in the file is
//! touched.
//!
//! - [`locate`], [`transform`] and [`apply`]: the three pure text operations
//! - [`Stylesheet`]: a file held in memory, with candidate-property fallback
//!   ([`Stylesheet::nudge`]) and natural-language requests ([`Stylesheet::fix`])
//! - [`request`]: the static element and action keyword tables
//!
//! ## Quick Start
//!
//! ```rust
//! use tweak_css::{apply, locate, transform, TransformAction};
//!
//! let css = ".timeline-border-container {\n    padding: 10px 20px;\n}\n";
//!
//! let current = locate(".timeline-border-container", "padding", css)
//!     .unwrap()
//!     .expect("padding is set");
//! let smaller = transform(&current, TransformAction::Shrink);
//! let updated = apply(".timeline-border-container", "padding", &smaller, css).unwrap();
//!
//! assert_eq!(updated, ".timeline-border-container {\n    padding: 5px 10px;\n}\n");
//! ```
//!
//! ## Limitations
//!
//! Only the first rule block for a selector is visible. Selectors are matched
//! as literal text, not evaluated. Comments and strings inside a block are not
//! special.

pub mod error;
pub mod locate;
pub mod request;
pub mod stylesheet;
pub mod value;

pub use error::{CssError, Result};
pub use locate::{apply, find_property, locate, PropertyMatch};
pub use request::{parse_request, ActionKeyword, ElementKeyword, ParsedRequest};
pub use stylesheet::{Edit, Fix, Stylesheet};
pub use value::{format_magnitude, transform, PropertyValue, Token, TransformAction};
