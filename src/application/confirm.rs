//! Confirmation of destructive actions

use crate::error::Result;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this incident?";
pub const CLEAR_PROMPT: &str =
    "Are you sure you want to delete ALL incidents? This cannot be undone.";

/// Asks the user to approve a destructive action
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Approves everything, for `--yes`
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}
