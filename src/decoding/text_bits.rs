use super::DecodeError;
use core::str::Bytes;

/// A bit source over text made of `'0'` and `'1'` characters. ASCII whitespace between
/// the bits is skipped, so line wrapped bit dumps can be read directly.
#[derive(Clone)]
pub struct TextBits<'t> {
    bytes: Bytes<'t>,
}

impl<'t> TextBits<'t> {
    /// Fails with [`DecodeError::InvalidBitCharacter`] if the text contains anything
    /// besides bits and whitespace.
    pub fn new(text: &'t str) -> Result<TextBits<'t>, DecodeError> {
        if let Some((position, found)) = text
            .char_indices()
            .find(|(_, c)| !matches!(c, '0' | '1') && !c.is_ascii_whitespace())
        {
            return Err(DecodeError::InvalidBitCharacter { position, found });
        }
        Ok(TextBits {
            bytes: text.bytes(),
        })
    }
}

impl Iterator for TextBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bytes
            .by_ref()
            .find(|b| !b.is_ascii_whitespace())
            .map(|b| b == b'1')
    }
}
