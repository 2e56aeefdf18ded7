//! Form fields
//!
//! Editable single-line values with a cursor. The cursor counts characters,
//! not bytes, so names like "Café" edit correctly.

use std::path::PathBuf;

/// A single-line text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Replace the content and move the cursor to the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// The receipt upload form: a path to the file to send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub file: TextField,
    /// Path chosen programmatically; the field only holds its lossy text
    picked: Option<PathBuf>,
}

impl UploadForm {
    /// The selected file path as typed, if one is filled in
    pub fn selected_path(&self) -> Option<&str> {
        let path = self.file.value().trim();
        (!path.is_empty()).then_some(path)
    }

    /// Select a path, keeping it exact even when it is not valid UTF-8
    pub fn pick(&mut self, path: PathBuf) {
        self.file.set(path.to_string_lossy().into_owned());
        self.picked = Some(path);
    }

    /// The file to upload
    ///
    /// A picked path wins while the field still shows it; once the field has
    /// been edited, the typed text is used.
    pub fn selected_file(&self) -> Option<PathBuf> {
        let typed = self.selected_path()?;
        match &self.picked {
            Some(picked) if picked.to_string_lossy() == self.file.value() => Some(picked.clone()),
            _ => Some(PathBuf::from(typed)),
        }
    }

    pub fn reset(&mut self) {
        self.file.clear();
        self.picked = None;
    }
}

/// The budget form: category, monthly limit and amount spent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: TextField,
    pub monthly_limit: TextField,
    pub spent: TextField,
}

impl BudgetForm {
    pub fn reset(&mut self) {
        self.category.clear();
        self.monthly_limit.clear();
        self.spent.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.category.value().is_empty()
            && self.monthly_limit.value().is_empty()
            && self.spent.value().is_empty()
    }
}
