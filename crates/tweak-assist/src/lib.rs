//! # tweak-assist
//!
//! Hand small, well-fenced requests to an AI coding assistant.
//!
//! Free-form requests tend to make assistants rewrite more than asked. This
//! crate narrows them first: [`translate`] expands known phrases into prompts
//! that name the exact selector and forbid other edits, [`select_files`] picks
//! which project files to expose, and [`Assistant::run`] pipes the prompt to
//! the assistant process and captures what it prints.
//!
//! ```rust,no_run
//! use tweak_assist::{select_files, translate, Assistant, ProjectFiles};
//!
//! let request = "change border padding to 5px";
//! let files = ProjectFiles::default();
//!
//! let prompt = translate(request, &files)?;
//! let output = Assistant::default().run(&prompt, &select_files(request, &files))?;
//! println!("{}", output);
//! # Ok::<(), tweak_assist::AssistError>(())
//! ```

pub mod error;
pub mod runner;
pub mod translate;

pub use error::{AssistError, Result};
pub use runner::{Assistant, DEFAULT_ARGS};
pub use translate::{
    find_translation, select_files, translate, ProjectFiles, Translation, DEFAULT_TEMPLATE,
    TRANSLATIONS,
};
