//! Pure quiz logic for LifePath.
//!
//! This crate contains the whole game (content, scoring, stat rules and
//! the screen-to-screen state machine) with no terminal, window, or I/O.
//! Front ends implement [`display::QuizDisplay`] and feed
//! [`session::InputEvent`]s in; everything here is unit-testable on its own.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Validated, immutable stages and challenges |
//! | [`content`] | The shipped five-stage lifespan content and closing texts |
//! | [`display`] | Outbound display trait and an in-memory recorder |
//! | [`error`] | `CatalogError` (construction) and `QuizError` (rejected input) |
//! | [`outcome`] | Final-score tiers and the end summary |
//! | [`quiz`] | Phase state machine, scoring, progress |
//! | [`session`] | Input events → transitions → display calls |
//! | [`stats`] | The five psychosocial counters and their tracker |

pub mod catalog;
pub mod content;
pub mod display;
pub mod error;
pub mod outcome;
pub mod quiz;
pub mod session;
pub mod stats;

pub use catalog::Catalog;
pub use error::{CatalogError, QuizError};
pub use quiz::{Phase, Quiz};
pub use session::{InputEvent, Session};
