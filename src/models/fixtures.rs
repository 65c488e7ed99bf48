//! Wire objects shared by the model tests.

use serde_json::{json, Value};

pub(crate) fn wire_attachment(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "content_type": "image/png",
        "size": 2048,
        "name": name,
        "attachment_url": format!("https://files.example.com/{}", name),
        "created_at": "2024-02-01T10:00:00Z",
        "updated_at": "2024-02-01T10:00:00Z"
    })
}

pub(crate) fn wire_conversation(id: u64, attachments: Vec<Value>) -> Value {
    json!({
        "id": id,
        "body": "<div>Printer is jammed again</div>",
        "body_text": "Printer is jammed again",
        "created_at": "2024-02-01T11:00:00Z",
        "updated_at": "2024-02-01T11:05:00Z",
        "user_id": 42,
        "from_email": "ann@example.com",
        "attachments": attachments
    })
}

pub(crate) fn wire_ticket(id: u64) -> Value {
    json!({
        "id": id,
        "requester_id": 1001,
        "status": 2,
        "priority": 3,
        "source": 2,
        "type": "Incident",
        "subject": "Printer jammed",
        "description": "<div>Printer jammed on floor 3</div>",
        "description_text": "Printer jammed on floor 3",
        "department_id": 17,
        "custom_fields": {"asset_tag": "PR-0031"},
        "deleted": false,
        "created_at": "2024-02-01T10:00:00Z",
        "updated_at": "2024-02-01T10:30:00Z"
    })
}

pub(crate) fn wire_department(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Internal IT",
        "head_user_id": 3,
        "primary_user_id": 4,
        "domains": ["it.example.com"],
        "custom_fields": {"cost_center": "CC-12"},
        "created_at": "2023-05-01T08:00:00Z",
        "updated_at": "2023-05-02T08:00:00Z"
    })
}

pub(crate) fn wire_requester(id: u64, email: &str) -> Value {
    json!({
        "id": id,
        "first_name": "Ann",
        "last_name": "Lee",
        "job_title": "Accountant",
        "primary_email": email,
        "work_phone_number": "+1 555 0100",
        "mobile_phone_number": 5550101,
        "department_ids": [17, 18]
    })
}
