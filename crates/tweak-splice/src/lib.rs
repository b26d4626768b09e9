//! # tweak-splice
//!
//! Swap the contents of one HTML element for new markup.
//!
//! The element is identified by its literal opening tag (the *marker*, e.g.
//! `<div class="timeline-milestones">`). Its closing tag is found by counting
//! nested tags of the same name, so the block can move around the file and
//! grow or shrink without breaking the splice.
//!
//! ```rust
//! use tweak_splice::splice;
//!
//! let page = "<ul class=\"m\">\n  <li>old</li>\n</ul>\n<p>kept</p>\n";
//! let spliced = splice(page, "<ul class=\"m\">", "  <li>new</li>\n").unwrap();
//!
//! assert_eq!(spliced.text, "<ul class=\"m\">\n  <li>new</li>\n</ul>\n<p>kept</p>\n");
//! assert_eq!((spliced.open_line, spliced.close_line), (1, 3));
//! ```
//!
//! This is not an HTML parser: attribute values containing `>` and tags inside
//! `<script>` or CDATA sections are not special-cased.

pub mod error;
pub mod scan;
pub mod splice;

pub use error::{Result, SpliceError};
pub use scan::{find_block, tag_name, BlockSpan};
pub use splice::{default_output_path, splice, splice_files, unwrap_block, Splice};
