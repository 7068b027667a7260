//! Default-on-failure wrappers reproducing the original panel's contract.
//!
//! Each function catches the underlying [`ClientError`], logs it once with a
//! static message, and returns a fixed type-appropriate default: `false` for
//! boolean operations, `None` for single-object operations, an empty `Vec`
//! for list operations. Callers never observe a failure directly and cannot
//! distinguish one from an empty or negative result. New code should prefer
//! the fallible [`AdminClient`] methods.

use serde_json::Value;
use tracing::error;

use crate::AdminClient;
use crate::models::{AlertRecord, LogRecord};

pub async fn init_service(client: &AdminClient, config: &Value) -> bool {
    match client.init(config).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to initialize service: {e}");
            false
        }
    }
}

pub async fn is_configured(client: &AdminClient) -> bool {
    match client.is_configured().await {
        Ok(configured) => configured,
        Err(e) => {
            error!("Failed to check configuration status: {e}");
            false
        }
    }
}

pub async fn restore_service(client: &AdminClient) -> bool {
    match client.restore().await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to restore service: {e}");
            false
        }
    }
}

pub async fn reset_database_service(client: &AdminClient) -> bool {
    match client.reset_database().await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to reset database: {e}");
            false
        }
    }
}

pub async fn execute_code(client: &AdminClient, student_id: &str) -> Option<Value> {
    match client.judge_code(student_id).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            error!("Failed to execute code: {e}");
            None
        }
    }
}

pub async fn get_submitted_students(client: &AdminClient) -> Vec<String> {
    match client.submitted_students().await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to get submitted students: {e}");
            Vec::new()
        }
    }
}

pub async fn get_all_students_scores(client: &AdminClient) -> Option<Value> {
    match client.all_student_scores().await {
        Ok(scores) => Some(scores),
        Err(e) => {
            error!("Failed to get all students scores: {e}");
            None
        }
    }
}

pub async fn update_logs(client: &AdminClient) -> Vec<AlertRecord> {
    match client.refresh_alerts().await {
        Ok(alerts) => alerts,
        Err(e) => {
            error!("Failed to update alert list: {e}");
            Vec::new()
        }
    }
}

pub async fn get_alert_list(client: &AdminClient) -> Vec<AlertRecord> {
    match client.alert_list().await {
        Ok(alerts) => alerts,
        Err(e) => {
            error!("Failed to get alert logs: {e}");
            Vec::new()
        }
    }
}

pub async fn modify_alert_status(client: &AdminClient, id: &str, ok: bool) -> bool {
    match client.set_alert_status(id, ok).await {
        Ok(acknowledged) => acknowledged,
        Err(e) => {
            error!("Failed to set alert status: {e}");
            false
        }
    }
}

pub async fn get_all_logs(client: &AdminClient) -> Vec<LogRecord> {
    match client.all_logs().await {
        Ok(logs) => logs,
        Err(e) => {
            error!("Failed to get all logs: {e}");
            Vec::new()
        }
    }
}
