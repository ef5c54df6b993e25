use std::sync::{Arc, Mutex, RwLock};

use crate::error::{LockResultExt, TrackerResult};
use crate::text::TextEdit;

use super::{Document, EditListener, ListenerId};

/// In-memory document behind a read/write lock.
///
/// Stands in for an editor buffer: edits are validated, applied and then
/// announced to listeners before the write lock is released.
pub struct SharedDocument {
    text: RwLock<String>,
    listeners: Mutex<Vec<(ListenerId, Arc<dyn EditListener>)>>,
}

impl SharedDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Copy of the current content.
    pub fn text(&self) -> String {
        self.text
            .read()
            .recover_poison("SharedDocument::text")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.text.read().recover_poison("SharedDocument::len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies `edit` and notifies every listener before returning.
    ///
    /// An edit that does not fit the document is rejected and nobody is
    /// notified.
    pub fn apply_edit(&self, edit: &TextEdit) -> TrackerResult<()> {
        let mut text = self
            .text
            .write()
            .recover_poison("SharedDocument::apply_edit");
        self.apply_locked(&mut text, edit)
    }

    /// Replaces the whole content, as a reload would.
    pub fn set_text(&self, new_text: impl Into<String>) -> TrackerResult<()> {
        let mut text = self.text.write().recover_poison("SharedDocument::set_text");
        let edit = TextEdit::new(0, text.len(), new_text);
        self.apply_locked(&mut text, &edit)
    }

    fn apply_locked(&self, text: &mut String, edit: &TextEdit) -> TrackerResult<()> {
        edit.apply_to(text)?;

        let listeners: Vec<Arc<dyn EditListener>> = self
            .listeners
            .lock()
            .recover_poison("SharedDocument::apply_edit")
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener.on_edit(edit, text);
        }
        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .recover_poison("SharedDocument::listener_count")
            .len()
    }
}

impl Document for SharedDocument {
    fn read_text(&self, reader: &mut dyn FnMut(&str)) {
        let text = self.text.read().recover_poison("SharedDocument::read_text");
        reader(&text);
    }

    fn add_edit_listener(&self, listener: Arc<dyn EditListener>) -> ListenerId {
        let id = ListenerId::next();
        self.listeners
            .lock()
            .recover_poison("SharedDocument::add_edit_listener")
            .push((id, listener));
        id
    }

    fn remove_edit_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .lock()
            .recover_poison("SharedDocument::remove_edit_listener");
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(TextEdit, String)>>,
    }

    impl EditListener for Recorder {
        fn on_edit(&self, edit: &TextEdit, document_text: &str) {
            self.seen
                .lock()
                .unwrap()
                .push((edit.clone(), document_text.to_string()));
        }
    }

    #[test]
    fn test_listener_sees_edit_and_resulting_text() {
        let document = SharedDocument::new("class A {}");
        let recorder = Arc::new(Recorder::default());
        document.add_edit_listener(recorder.clone());

        document.apply_edit(&TextEdit::insert(7, "BC")).unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, TextEdit::insert(7, "BC"));
        assert_eq!(seen[0].1, "class ABC {}");
        assert_eq!(document.text(), "class ABC {}");
    }

    #[test]
    fn test_rejected_edit_notifies_nobody() {
        let document = SharedDocument::new("abc");
        let recorder = Arc::new(Recorder::default());
        document.add_edit_listener(recorder.clone());

        assert!(document.apply_edit(&TextEdit::delete(2, 5)).is_err());
        assert!(recorder.seen.lock().unwrap().is_empty());
        assert_eq!(document.text(), "abc");
    }

    #[test]
    fn test_remove_listener() {
        let document = SharedDocument::new("");
        let recorder = Arc::new(Recorder::default());
        let id = document.add_edit_listener(recorder.clone());
        assert_eq!(document.listener_count(), 1);

        assert!(document.remove_edit_listener(id));
        assert!(!document.remove_edit_listener(id));
        assert_eq!(document.listener_count(), 0);

        document.apply_edit(&TextEdit::insert(0, "x")).unwrap();
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_text_replaces_whole_content() {
        let document = SharedDocument::new("old");
        let recorder = Arc::new(Recorder::default());
        document.add_edit_listener(recorder.clone());

        document.set_text("brand new").unwrap();
        assert_eq!(document.text(), "brand new");
        assert_eq!(document.len(), 9);
        assert_eq!(
            recorder.seen.lock().unwrap()[0].0,
            TextEdit::new(0, 3, "brand new")
        );
    }

    #[test]
    fn test_read_text_runs_under_lock() {
        let document = SharedDocument::new("hello");
        let mut copied = String::new();
        document.read_text(&mut |text: &str| copied.push_str(text));
        assert_eq!(copied, "hello");
        assert!(!document.is_empty());
    }
}
