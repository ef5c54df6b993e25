use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// One buffer mutation: `deleted_length` bytes at `offset` replaced by
/// `inserted_text`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub offset: usize,
    #[serde(default)]
    pub deleted_length: usize,
    #[serde(default)]
    pub inserted_text: String,
}

impl TextEdit {
    pub fn new(offset: usize, deleted_length: usize, inserted_text: impl Into<String>) -> Self {
        Self {
            offset,
            deleted_length,
            inserted_text: inserted_text.into(),
        }
    }

    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset, 0, text)
    }

    pub fn delete(offset: usize, length: usize) -> Self {
        Self::new(offset, length, String::new())
    }

    /// End of the replaced span in the text before the edit.
    pub fn end(&self) -> usize {
        self.offset + self.deleted_length
    }

    pub fn inserted_len(&self) -> usize {
        self.inserted_text.len()
    }

    /// Change in document length caused by this edit.
    pub fn delta(&self) -> isize {
        self.inserted_len() as isize - self.deleted_length as isize
    }

    /// Length the document had before this edit, given its length after.
    pub fn prior_length(&self, resulting_length: usize) -> usize {
        (resulting_length + self.deleted_length).saturating_sub(self.inserted_len())
    }

    /// True if the edit neither deletes nor inserts anything.
    pub fn is_noop(&self) -> bool {
        self.deleted_length == 0 && self.inserted_text.is_empty()
    }

    /// Applies the edit to `text` in place.
    ///
    /// Fails without touching `text` if the replaced span is out of bounds or
    /// splits a character.
    pub fn apply_to(&self, text: &mut String) -> TrackerResult<()> {
        let end = self.end();
        if end > text.len() {
            return Err(TrackerError::EditOutOfBounds {
                offset: self.offset,
                end,
                document_length: text.len(),
            });
        }
        for boundary in [self.offset, end] {
            if !text.is_char_boundary(boundary) {
                return Err(TrackerError::NotCharBoundary { offset: boundary });
            }
        }
        text.replace_range(self.offset..end, &self.inserted_text);
        Ok(())
    }
}
