//! PromptDialog trait - the application-drawn dialog for the legacy backend

use crate::model::PromptConfig;

/// Substitute dialog shown while the legacy sensor is active
///
/// Rendering is the host's concern; the backend only drives show, status
/// updates and dismissal, all serialized on the session executor.
pub trait PromptDialog: Send {
    /// Show the dialog with the prompt's text configuration.
    fn show(&mut self, config: &PromptConfig);

    /// Replace the status line (used for help events).
    fn update_status(&mut self, status: &str);

    /// Dismiss the dialog (terminal events).
    fn dismiss(&mut self);
}
