//! Custom actions for the Order actor.
//!
//! The tracking component never replaces a whole order. It reads and writes
//! single metadata keys and appends notes, and each of those is one action so
//! it is applied atomically by the actor.

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Reads one metadata value.
    GetMeta(String),
    /// Stores a metadata value, replacing any previous one.
    UpdateMeta { key: String, value: String },
    /// Removes a metadata key.
    DeleteMeta(String),
    /// Appends a note to the order's audit log.
    AddNote(String),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Current value, `None` when the key was never set
    GetMeta(Option<String>),
    /// Value that was replaced, if any
    UpdateMeta(Option<String>),
    /// Value that was removed, if any
    DeleteMeta(Option<String>),
    /// Number of notes after the append
    AddNote(usize),
}
