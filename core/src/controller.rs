//! Sequences list / save / inactivate against a transport and a view.
//!
//! # Design
//! `RoomTypeController` owns the only mutable state the client has: the
//! form and the last list it rendered. Every operation takes `&mut self`, so
//! two requests can never be in flight at once. Writes are never applied
//! locally; a successful mutation is always followed by one full `list()`.

use tracing::{debug, error, info};

use crate::client::RoomTypeClient;
use crate::error::ApiError;
use crate::form::{FormMode, RoomTypeForm};
use crate::http::Transport;
use crate::types::RoomType;
use crate::view::{ListState, Placeholder, RoomTypeRow, RoomTypeView};

pub struct RoomTypeController<T, V> {
    client: RoomTypeClient,
    transport: T,
    view: V,
    form: RoomTypeForm,
    list: ListState,
}

impl<T: Transport, V: RoomTypeView> RoomTypeController<T, V> {
    pub fn new(client: RoomTypeClient, transport: T, view: V) -> Self {
        Self {
            client,
            transport,
            view,
            form: RoomTypeForm::new(),
            list: ListState::NotLoaded,
        }
    }

    pub fn form(&self) -> &RoomTypeForm {
        &self.form
    }

    /// Direct access for hosts that bind form inputs.
    pub fn form_mut(&mut self) -> &mut RoomTypeForm {
        &mut self.form
    }

    pub fn list_state(&self) -> &ListState {
        &self.list
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Fetch every room type and redraw the list. Failures degrade to a
    /// placeholder; nothing is retried.
    pub fn list(&mut self) -> &ListState {
        let request = self.client.build_list_room_types();
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_room_types(response));

        self.list = match result {
            Ok(rooms) if rooms.is_empty() => {
                self.view.render_placeholder(Placeholder::Empty);
                ListState::Empty
            }
            Ok(rooms) => {
                debug!(count = rooms.len(), "listed room types");
                let rows: Vec<RoomTypeRow> = rooms.iter().map(RoomTypeRow::from).collect();
                self.view.render_rows(&rows);
                ListState::Rows(rooms)
            }
            Err(err) => {
                error!(error = %err, "failed to list room types");
                self.view.render_placeholder(Placeholder::LoadFailed);
                ListState::LoadFailed
            }
        };
        &self.list
    }

    /// Submit the form: update when the hidden id is set, create otherwise.
    ///
    /// On failure the form is left exactly as it was so the user can correct
    /// it, and the reason is alerted.
    pub fn save(&mut self) -> Result<(), ApiError> {
        let payload = self.form.payload();
        let mode = self.form.mode();

        let result = match mode {
            FormMode::Create => self
                .client
                .build_create_room_type(&payload)
                .and_then(|request| self.transport.execute(request))
                .and_then(|response| self.client.parse_create_room_type(response)),
            FormMode::Edit(id) => self
                .client
                .build_update_room_type(id, &payload)
                .and_then(|request| self.transport.execute(request))
                .and_then(|response| self.client.parse_update_room_type(response)),
        };

        match result {
            Ok(saved) => {
                info!(?mode, id = saved.as_ref().map(|room| room.id), "saved room type");
                self.reset_form();
                self.list();
                Ok(())
            }
            Err(err) => {
                error!(error = %err, ?mode, "failed to save room type");
                self.view
                    .alert(&format!("Failed to save: {}", failure_reason(&err)));
                Err(err)
            }
        }
    }

    /// Inactivate (soft delete) `id` after the user confirms.
    ///
    /// Returns `Ok(false)` when the user declines; no request is sent.
    pub fn inactivate(&mut self, id: i64) -> Result<bool, ApiError> {
        let question = format!("Are you sure you want to inactivate (delete) room type ID {id}?");
        if !self.view.confirm(&question) {
            debug!(id, "inactivation declined");
            return Ok(false);
        }

        let request = self.client.build_inactivate_room_type(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_inactivate_room_type(response));

        match result {
            Ok(()) => {
                info!(id, "inactivated room type");
                self.list();
                Ok(true)
            }
            Err(err) => {
                error!(error = %err, id, "failed to inactivate room type");
                self.view
                    .alert(&format!("Failed to inactivate: {}", failure_reason(&err)));
                Err(err)
            }
        }
    }

    /// Put the form into edit-mode for `room`.
    pub fn begin_edit(&mut self, room: &RoomType) {
        self.view.scroll_to_top();
        self.form.populate(room);
        self.view.render_form(&self.form);
    }

    /// Put the form back into create-mode.
    pub fn reset_form(&mut self) {
        self.form.clear();
        self.view.render_form(&self.form);
    }

    /// Fetch a single record by id and start editing it.
    pub fn load(&mut self, id: i64) -> Result<RoomType, ApiError> {
        let request = self.client.build_get_room_type(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_get_room_type(response));

        match result {
            Ok(room) => {
                self.begin_edit(&room);
                Ok(room)
            }
            Err(err) => {
                error!(error = %err, id, "failed to load room type");
                self.view
                    .alert(&format!("Failed to load: {}", failure_reason(&err)));
                Err(err)
            }
        }
    }
}

/// Text shown to the user: the backend's message when it sent one, a
/// generic explanation otherwise.
fn failure_reason(err: &ApiError) -> &str {
    match err {
        ApiError::Rejected { message, .. } => message,
        ApiError::NotFound => "room type not found",
        ApiError::Transport(_) => "could not reach the API",
        _ => "unexpected response from the API",
    }
}
