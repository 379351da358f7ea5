//! `PlatformClient` against a one-shot local HTTP responder.

use gw_api::{ApiError, ClockInRequest, PlatformClient, RespondRequest, StaffApi};
use gw_config::ApiConfig;
use gw_core::{ConveyanceAction, ConveyanceStatus, ShiftType, StaffStatus};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct Captured {
    request_line: String,
    body: String,
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

/// Accept one connection, capture the request, answer with `status` and `body`.
async fn serve_once(status: u16, body: &str) -> (PlatformClient, JoinHandle<Captured>) {
    let body = body.to_string();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().unwrap())
            })
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed mid-body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: request_body,
        }
    });

    let config = ApiConfig {
        base_url: format!("http://{addr}/api"),
        ..ApiConfig::default()
    };
    (PlatformClient::from_config(&config).unwrap(), handle)
}

const STAFF: &str = r#"{
    "id": "stf-204",
    "name": "Priya Raman",
    "email": "priya@guardwise.test",
    "phone": "+91 98450 00000",
    "employeeId": "GW-0204",
    "role": "supervisor",
    "status": "offline"
}"#;

#[tokio::test]
async fn login_posts_credentials_and_returns_staff() {
    let body = format!(r#"{{"success": true, "staff": {STAFF}}}"#);
    let (client, server) = serve_once(200, &body).await;

    let staff = client.login("priya@guardwise.test", "s3cret").await.unwrap();
    assert_eq!(staff.id, "stf-204");
    assert_eq!(staff.status, StaffStatus::Offline);

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /api/staff/login HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({"email": "priya@guardwise.test", "password": "s3cret"})
    );
}

#[tokio::test]
async fn login_unauthorized_is_rejected() {
    let (client, server) = serve_once(401, r#"{"error": "Invalid credentials"}"#).await;
    let err = client.login("priya@guardwise.test", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref m) if m == "Invalid credentials"));
    assert!(!err.is_transient());
    server.await.unwrap();
}

#[tokio::test]
async fn attendance_status_null_means_off_duty() {
    let (client, server) = serve_once(200, "null").await;
    let status = client.attendance_status("stf 204/a").await.unwrap();
    assert!(status.is_none());

    let captured = server.await.unwrap();
    assert_eq!(
        captured.request_line,
        "GET /api/staff/attendance/status/stf%20204%2Fa HTTP/1.1"
    );
}

#[tokio::test]
async fn clock_in_returns_receipt() {
    let (client, server) =
        serve_once(201, r#"{"id": "att-91", "clockInTime": "2025-03-14T22:00:00Z"}"#).await;
    let request = ClockInRequest::new("stf-204", ShiftType::Night, None);
    let receipt = client.clock_in(&request).await.unwrap();
    assert_eq!(receipt.id, "att-91");

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /api/staff/attendance/clock-in HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent, serde_json::json!({"staffId": "stf-204", "shiftType": "night"}));
}

#[tokio::test]
async fn clock_out_ignores_response_body() {
    let (client, server) = serve_once(200, "not json at all").await;
    client.clock_out("stf-204").await.unwrap();
    let captured = server.await.unwrap();
    assert_eq!(captured.body, r#"{"staffId":"stf-204"}"#);
}

#[tokio::test]
async fn respond_conflict_surfaces_server_message() {
    let (client, server) = serve_once(409, r#"{"error": "Request already processed"}"#).await;
    let response = RespondRequest::new(ConveyanceAction::Approve, "stf-204", None);
    let err = client.respond_conveyance("cnv-1", &response).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Api { status: 409, ref message } if message == "Request already processed"
    ));

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "PUT /api/conveyance/cnv-1/respond HTTP/1.1");
}

#[tokio::test]
async fn respond_returns_updated_request() {
    let (client, server) = serve_once(
        200,
        r#"{
            "id": "cnv-1",
            "guardId": "grd-9",
            "guardName": "Ravi K",
            "siteId": "site-3",
            "siteName": "Tech Park Gate B",
            "reason": "Medical emergency at home",
            "requestedAt": "2025-03-14T21:40:00Z",
            "status": "approved",
            "respondedAt": "2025-03-14T21:45:00Z",
            "respondedBy": "stf-204"
        }"#,
    )
    .await;
    let response = RespondRequest::new(ConveyanceAction::Approve, "stf-204", Some("ok"));
    let updated = client.respond_conveyance("cnv-1", &response).await.unwrap();
    assert_eq!(updated.status, ConveyanceStatus::Approved);

    let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap().body).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({"action": "approve", "staffId": "stf-204", "notes": "ok"})
    );
}

#[tokio::test]
async fn field_reports_encode_staff_id_query() {
    let (client, server) = serve_once(200, "[]").await;
    let reports = client.field_reports("stf&204").await.unwrap();
    assert!(reports.is_empty());
    let captured = server.await.unwrap();
    assert_eq!(
        captured.request_line,
        "GET /api/reports/field?staffId=stf%26204 HTTP/1.1"
    );
}

#[tokio::test]
async fn malformed_list_is_a_decode_error() {
    let (client, server) = serve_once(200, r#"{"requests": []}"#).await;
    let err = client.pending_conveyance().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn server_error_is_transient() {
    let (client, server) = serve_once(500, "").await;
    let err = client.pending_conveyance().await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, .. }));
    assert!(err.is_transient());
    server.await.unwrap();
}
