//! Prompt text and negative-button configuration

use std::fmt;
use std::sync::Arc;

/// Click handler for the negative button, supplied by the caller.
pub type NegativeButtonHandler = Arc<dyn Fn() + Send + Sync>;

/// Negative-button configuration
///
/// Either a plain label (clicks fall through to a no-op handler) or a label
/// with a custom click handler. The modern backend forwards this to the
/// OS-rendered prompt; the legacy backend applies the label to the
/// substitute dialog's cancel button.
#[derive(Default)]
pub enum NegativeButton {
    /// No negative button configured
    #[default]
    None,
    /// Label only; clicks are ignored
    Label(String),
    /// Label with a custom click handler
    Handler {
        text: String,
        on_click: NegativeButtonHandler,
    },
}

impl NegativeButton {
    /// The button label, if one is configured.
    pub fn text(&self) -> Option<&str> {
        match self {
            NegativeButton::None => None,
            NegativeButton::Label(text) => Some(text),
            NegativeButton::Handler { text, .. } => Some(text),
        }
    }

    /// Invoked by the host dialog when the button is pressed. A plain label
    /// has a default no-op handler.
    pub fn notify_clicked(&self) {
        if let NegativeButton::Handler { on_click, .. } = self {
            on_click();
        }
    }
}

impl fmt::Debug for NegativeButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegativeButton::None => f.write_str("NegativeButton::None"),
            NegativeButton::Label(text) => write!(f, "NegativeButton::Label({text:?})"),
            NegativeButton::Handler { text, .. } => {
                write!(f, "NegativeButton::Handler({text:?})")
            }
        }
    }
}

/// Validated prompt configuration
///
/// Produced by the builder; the title is guaranteed non-empty.
#[derive(Debug)]
pub struct PromptConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub negative_button: NegativeButton,
}
