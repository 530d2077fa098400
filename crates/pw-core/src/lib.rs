pub mod error;
pub mod id;
pub mod tolerance;
pub mod traits;

pub use error::{PathError, Result};
pub use id::MarkerId;
pub use tolerance::Tolerance;
pub use traits::Validate;
