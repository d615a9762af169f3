//! Full lifecycle against the live reference server.
//!
//! # Design
//! Starts the server on a random port, then drives `RoomTypeController` over
//! real HTTP using ureq as the transport and a recording view in place of a
//! UI. Validates request building, response parsing and the controller's
//! list/save/inactivate sequencing end to end.

use room_type_core::{
    ApiError, FormMode, HttpMethod, HttpRequest, HttpResponse, ListState, Placeholder,
    RoomTypeClient, RoomTypeController, RoomTypeForm, RoomTypeRow, RoomTypeView, Transport,
};

/// Executes requests with ureq, returning 4xx/5xx as data so the core client
/// interprets statuses itself.
struct UreqTransport {
    agent: ureq::Agent,
    sent: usize,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent, sent: 0 }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent += 1;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[derive(Default)]
struct RecordingView {
    rows: Vec<RoomTypeRow>,
    placeholder: Option<Placeholder>,
    alerts: Vec<String>,
    confirm_answer: bool,
}

impl RoomTypeView for RecordingView {
    fn render_rows(&mut self, rows: &[RoomTypeRow]) {
        self.placeholder = None;
        self.rows = rows.to_vec();
    }

    fn render_placeholder(&mut self, placeholder: Placeholder) {
        self.rows.clear();
        self.placeholder = Some(placeholder);
    }

    fn render_form(&mut self, _form: &RoomTypeForm) {}

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm_answer
    }

    fn scroll_to_top(&mut self) {}
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            room_type_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn fill(form: &mut RoomTypeForm, name: &str, description: &str, capacity: &str, rate: &str) {
    form.name = name.to_string();
    form.description = description.to_string();
    form.capacity = capacity.to_string();
    form.rate = rate.to_string();
}

#[test]
fn crud_lifecycle() {
    let addr = start_server();
    let mut view = RecordingView::default();
    let mut transport = UreqTransport::new();
    let mut c = RoomTypeController::new(
        RoomTypeClient::new(&format!("http://{addr}")),
        &mut transport,
        &mut view,
    );

    // Step 1: list — empty placeholder.
    assert_eq!(c.list(), &ListState::Empty);

    // Step 2: create two room types.
    fill(c.form_mut(), "Suite", "Ocean view", "2", "350");
    c.save().unwrap();
    assert_eq!(c.form().mode(), FormMode::Create);
    fill(c.form_mut(), "Single", "One bed", "1", "120.5");
    c.save().unwrap();
    assert_eq!(c.list_state().rows().len(), 2);

    // Step 3: duplicate name is rejected and the form is kept.
    fill(c.form_mut(), "Suite", "Again", "2", "350");
    let err = c.save().unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 409, .. }));
    assert_eq!(c.form().description, "Again");
    c.reset_form();

    // Step 4: unparseable capacity is rejected by the backend.
    fill(c.form_mut(), "Loft", "Mezzanine", "many", "200");
    let err = c.save().unwrap_err();
    assert_eq!(
        err.user_message(),
        Some("All fields (name, description, capacity, rate) are required.")
    );
    c.reset_form();

    // Step 5: edit the suite via begin_edit on the listed record.
    let suite = c.list_state().rows()[0].clone();
    assert_eq!(suite.name, "Suite");
    c.begin_edit(&suite);
    c.form_mut().capacity = "3".to_string();
    c.save().unwrap();
    let refreshed = &c.list_state().rows()[0];
    assert_eq!(refreshed.id, suite.id);
    assert_eq!(refreshed.max_capacity, 3);

    // Step 6: load by id enters edit-mode.
    let loaded = c.load(suite.id).unwrap();
    assert_eq!(loaded.max_capacity, 3);
    assert_eq!(c.form().hidden_id(), suite.id.to_string());
    c.reset_form();

    // Step 7: inactivation declined — nothing is sent.
    c.inactivate(suite.id).unwrap();
    assert_eq!(c.list_state().rows().len(), 2);

    // Step 8: inactivation confirmed — list shrinks.
    drop(c);
    view.confirm_answer = true;
    let mut c = RoomTypeController::new(
        RoomTypeClient::new(&format!("http://{addr}")),
        &mut transport,
        &mut view,
    );
    assert!(c.inactivate(suite.id).unwrap());
    let rows = c.list_state().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Single");

    // Step 9: unknown id — alert, backend message surfaced.
    let err = c.inactivate(999).unwrap_err();
    assert_eq!(err.user_message(), Some("Room type not found"));
    drop(c);

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].rate, "R$ 120.50");
    assert!(view.placeholder.is_none());
    assert!(view.alerts.iter().any(|a| a.contains("already exists")));
    assert_eq!(
        view.alerts.last().map(String::as_str),
        Some("Failed to inactivate: Room type not found")
    );
}

#[test]
fn unreachable_api_degrades_to_placeholder() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let mut c = RoomTypeController::new(
        RoomTypeClient::new(&format!("http://{addr}")),
        UreqTransport::new(),
        RecordingView::default(),
    );

    assert_eq!(c.list(), &ListState::LoadFailed);
    assert_eq!(c.view().placeholder, Some(Placeholder::LoadFailed));
    assert!(c.view().alerts.is_empty());
    assert_eq!(c.transport().sent, 1);
}
