//! Create/edit form state.
//!
//! The form is in edit-mode exactly when the hidden id is set. Field values
//! are kept as the raw text a user typed; numbers are parsed only when a
//! payload is built, with the lenient prefix rules browsers use for numeric
//! inputs (`" 12 guests"` is 12, `"abc"` is no value).

use crate::types::{RoomType, RoomTypePayload};

pub const CREATE_TITLE: &str = "Add new room type";
pub const CREATE_SUBMIT_LABEL: &str = "Save room type";
pub const EDIT_SUBMIT_LABEL: &str = "Update room type";

/// Which request a submit will issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomTypeForm {
    pub name: String,
    pub description: String,
    pub capacity: String,
    pub rate: String,
    editing: Option<i64>,
}

impl RoomTypeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match self.editing {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// The hidden id field as the page would hold it: empty in create-mode.
    pub fn hidden_id(&self) -> String {
        self.editing.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn title(&self) -> String {
        match self.editing {
            Some(id) => format!("Editing room type (ID: {id})"),
            None => CREATE_TITLE.to_string(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.editing {
            Some(_) => EDIT_SUBMIT_LABEL,
            None => CREATE_SUBMIT_LABEL,
        }
    }

    /// The cancel affordance is only offered while editing.
    pub fn cancel_visible(&self) -> bool {
        self.editing.is_some()
    }

    /// Switch to edit-mode for `room`, overwriting every field.
    pub fn populate(&mut self, room: &RoomType) {
        self.editing = Some(room.id);
        self.name = room.name.clone();
        self.description = room.description.clone();
        self.capacity = room.max_capacity.to_string();
        self.rate = room.standard_rate.to_string();
    }

    /// Back to create-mode with every field empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> RoomTypePayload {
        RoomTypePayload {
            name: self.name.clone(),
            description: self.description.clone(),
            max_capacity: parse_int(&self.capacity),
            standard_rate: parse_float(&self.rate),
        }
    }
}

/// Leading-integer parse: optional sign followed by at least one digit;
/// anything after the digits is ignored.
pub fn parse_int(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

/// Leading-decimal parse: sign, digits, optional fraction and exponent.
/// Non-finite results count as no value.
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
