use crate::error::Result;

/// Validate structural integrity of a model or configuration.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
