//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Anything a password can be copied into.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        ClipboardContext::new()
            .map(SystemClipboard)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Some providers hand back an owned copy; wipe ours.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        debug!(len = text.len(), "copied to clipboard");
        Ok(())
    }
}
