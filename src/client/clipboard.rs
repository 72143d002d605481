/// Write-only clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        if let Some(cb) = self.inner.as_mut() {
            cb.set_text(text.to_string())?;
        }
        Ok(())
    }
}

/// Copy is a convenience; failures are only logged.
pub fn copy_quietly(clipboard: &mut dyn Clipboard, text: &str) {
    if let Err(e) = clipboard.write_text(text) {
        tracing::debug!(error = %e, "clipboard write failed");
    }
}
