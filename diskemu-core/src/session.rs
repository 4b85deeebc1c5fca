//! Interpreter session state.

use crate::cursor::Cursor;

/// Mutable state shared by every command in one interpreter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Name of the selected disk, if any.
    pub selected: Option<String>,
    pub cursor: Cursor,
    /// Label from the most recent `nd`/`fd`. Display only.
    pub disk_format: String,
}

impl Session {
    pub fn new(default_format: &str) -> Self {
        Self {
            selected: None,
            cursor: Cursor::default(),
            disk_format: default_format.to_string(),
        }
    }

    /// Resolve the disk a command should act on: `name` if given, else the
    /// selected disk.
    pub fn target<'a>(&'a self, name: Option<&'a str>) -> Option<&'a str> {
        name.or(self.selected.as_deref())
    }

    /// Keep the selection pointing at a renamed disk.
    pub fn on_rename(&mut self, from: &str, to: &str) {
        if self.selected.as_deref() == Some(from) {
            self.selected = Some(to.to_string());
        }
    }

    /// Drop the selection if its disk was deleted.
    pub fn on_delete(&mut self, name: &str) {
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
    }
}
