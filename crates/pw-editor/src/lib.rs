//! Pathwright editing session.
//!
//! The host resolves pointer picks and key state into an [`InputSnapshot`]
//! once per tick and hands it to [`EditorSession::tick`], which edits the
//! curve, advances the follower and returns marker commands plus the
//! follower pose for the presentation layer.

pub mod config;
pub mod input;
pub mod markers;
pub mod scene;
pub mod session;

pub use config::EditorConfig;
pub use input::{parse_script, InputSnapshot};
pub use markers::{MarkerCommand, MarkerRole, Presentation};
pub use scene::{Marker, MarkerScene};
pub use session::{tick, EditorSession, TickOutput};
