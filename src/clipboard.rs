use crate::error::ConvertError;

/// Copy the decoded `text` to the system clipboard.
///
/// Thin wrapper around `arboard`. Headless sessions and some CI runners have
/// no clipboard, so callers treat the error as a warning.
pub fn copy_text(text: &str) -> Result<(), ConvertError> {
    let mut ctx = arboard::Clipboard::new()?;
    ctx.set_text(text.to_owned())?;
    Ok(())
}
