//! Per-keystroke Vietnamese diacritic composition.
//!
//! The engine is stateless about text: the host passes each key together
//! with the character before the caret and the word ending there, and gets
//! back a [`KeyOutcome`] telling it what to replace. Telex, VNI, VIQR and
//! a mixed Auto convention are supported.
//!
//! ```
//! use vimark::{InputMethod, InputSession};
//!
//! let mut session = InputSession::new();
//! session.engine_mut().set_input_method(InputMethod::Telex);
//! let mut out = String::new();
//! for key in "Vieejt ".chars() {
//!     out = session.feed(key).to_string();
//! }
//! assert_eq!(out, "Việt ");
//! ```

pub mod accent;
pub mod compose;
pub mod config;
pub mod engine;
pub mod modes;
mod placement;
pub mod session;
pub mod shift;
pub mod table;

pub use accent::{AccentCommand, Modifier, Tone};
pub use compose::Composer;
pub use config::EngineConfig;
pub use engine::{ESCAPE_CHAR, KeyOutcome, VietEngine};
pub use modes::{InputMethod, resolve_accent};
pub use session::InputSession;
pub use shift::shift_accent;
