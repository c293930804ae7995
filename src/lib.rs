//! The core library of the FontForge handwriting-font app.
//!
//! Two units live here: a mock session store backed by durable
//! key-value storage, and a text-layout routine that renders user text
//! onto a ruled-paper PDF. UI layers consume both directly.

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate lopdf;

mod consts;
mod metrics;

pub mod data;
pub mod error;
pub mod export;
pub mod samples;
pub mod session;
pub mod settings;
pub mod storage;

pub use data::{Credential, SavedFont, User};
pub use error::AuthError;
pub use export::{generate_output_pdf, layout_lines, PlacedLine};
pub use samples::{sample_templates, SampleLanguage, SampleSet};
pub use session::{SessionStore, StoreConfig};
pub use settings::{FontSettings, FontStyle};
pub use storage::{FileStorage, MemStorage, Storage};
