//! Presentation seam between the controller and whatever draws the UI.
//!
//! # Design
//! The controller decides *what* to show; a `RoomTypeView` decides *how*.
//! Rows are pre-formatted here so every host renders the same text.

use std::fmt;

use crate::form::RoomTypeForm;
use crate::types::RoomType;

/// Inline message shown in place of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The fetch succeeded but returned nothing.
    Empty,
    /// The fetch failed; reads degrade to this instead of alerting.
    LoadFailed,
}

impl Placeholder {
    pub fn text(self) -> &'static str {
        match self {
            Placeholder::Empty => "No room types registered.",
            Placeholder::LoadFailed => "Failed to load room types. Is the API running?",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Display projection of one `RoomType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTypeRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub capacity: String,
    pub rate: String,
}

impl From<&RoomType> for RoomTypeRow {
    fn from(room: &RoomType) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            description: room.description.clone(),
            capacity: format_capacity(room.max_capacity),
            rate: format_rate(room.standard_rate),
        }
    }
}

pub fn format_capacity(guests: i32) -> String {
    if guests == 1 {
        "1 guest".to_string()
    } else {
        format!("{guests} guests")
    }
}

/// Currency amount with exactly two decimals.
pub fn format_rate(rate: f64) -> String {
    format!("R$ {rate:.2}")
}

/// What the list area shows after the last `list()`.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// No fetch has been attempted yet.
    NotLoaded,
    Rows(Vec<RoomType>),
    Empty,
    LoadFailed,
}

impl ListState {
    pub fn rows(&self) -> &[RoomType] {
        match self {
            ListState::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Host UI operations the controller drives.
pub trait RoomTypeView {
    /// Replace the list with `rows`, in the given order.
    fn render_rows(&mut self, rows: &[RoomTypeRow]);

    /// Replace the list with a single placeholder item.
    fn render_placeholder(&mut self, placeholder: Placeholder);

    /// Redraw the form: fields, hidden id, title and button labels.
    fn render_form(&mut self, form: &RoomTypeForm);

    /// Blocking notice to the user.
    fn alert(&mut self, message: &str);

    /// Blocking yes/no question. `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;

    fn scroll_to_top(&mut self);
}

impl<V: RoomTypeView + ?Sized> RoomTypeView for &mut V {
    fn render_rows(&mut self, rows: &[RoomTypeRow]) {
        (**self).render_rows(rows)
    }

    fn render_placeholder(&mut self, placeholder: Placeholder) {
        (**self).render_placeholder(placeholder)
    }

    fn render_form(&mut self, form: &RoomTypeForm) {
        (**self).render_form(form)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn scroll_to_top(&mut self) {
        (**self).scroll_to_top()
    }
}
