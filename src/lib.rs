//! In-memory segmented audio track buffer: positional read/write with
//! implicit growth, ranged deletion, range insertion, and windowed
//! cross-correlation pattern search over 16-bit mono PCM.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod track;

pub use config::Config;
pub use domain::errors::AudioError;
pub use track::{MatchRange, Track};
