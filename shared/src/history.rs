use crate::models::{HistoryDetail, HistoryEntry};

/// Columns of the history table: id, image, result, confidence, time, action.
pub const HISTORY_COLUMNS: u32 = 6;

pub const DETAIL_LOAD_FAILED: &str = "Failed to load details";

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderRow {
    pub class: &'static str,
    pub message: &'static str,
    pub colspan: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryState {
    #[default]
    Loading,
    Loaded(Vec<HistoryEntry>),
    Failed,
}

impl HistoryState {
    /// The single row shown instead of entries, if any.
    pub fn placeholder(&self) -> Option<PlaceholderRow> {
        let (class, message) = match self {
            HistoryState::Loading => ("loading-cell", "Loading history..."),
            HistoryState::Loaded(entries) if entries.is_empty() => {
                ("no-data-cell", "No detection history found")
            }
            HistoryState::Loaded(_) => return None,
            HistoryState::Failed => ("error-cell", "Error loading history"),
        };
        Some(PlaceholderRow {
            class,
            message,
            colspan: HISTORY_COLUMNS,
        })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        match self {
            HistoryState::Loaded(entries) => entries,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailModal {
    #[default]
    Closed,
    Open(HistoryDetail),
}

impl DetailModal {
    pub fn open(&mut self, detail: HistoryDetail) {
        *self = DetailModal::Open(detail);
    }

    pub fn close(&mut self) {
        *self = DetailModal::Closed;
    }

    /// Handles a click that reached the overlay. Only a click whose target
    /// is the backdrop itself closes the modal. Returns whether it closed.
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailModal::Open(_))
    }

    pub fn detail(&self) -> Option<&HistoryDetail> {
        match self {
            DetailModal::Open(detail) => Some(detail),
            DetailModal::Closed => None,
        }
    }
}
