use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::ClientConfig;
use crate::envelope::{Ack, ConfiguredFlag, Envelope, ListEnvelope};
use crate::error::{ClientError, Result};
use crate::models::{AlertRecord, LogRecord};

/// HTTP client for the judging backend's admin surface.
///
/// One method per backend capability; each performs exactly one request and
/// returns the unwrapped payload. Failures surface as [`ClientError`], so a
/// caller can tell a failed call from a legitimately empty or negative
/// result. The [`crate::masked`] module layers the historical
/// default-on-failure contract on top of these methods.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bootstrap the backend with an operator-supplied config blob,
    /// forwarded verbatim.
    pub async fn init(&self, config: &Value) -> Result<()> {
        let res = self
            .http
            .post(self.url("/init"))
            .json(config)
            .send()
            .await?;
        expect_ok(res.status())
    }

    /// Whether the backend has been bootstrapped.
    pub async fn is_configured(&self) -> Result<bool> {
        let env: Envelope<ConfiguredFlag> = self.get("/is-configured").await?;
        Ok(env.data.is_configured)
    }

    /// Restore the backend to its initial state.
    pub async fn restore(&self) -> Result<()> {
        let res = self.http.get(self.url("/restore")).send().await?;
        expect_ok(res.status())
    }

    /// Drop and re-create the backend database.
    pub async fn reset_database(&self) -> Result<()> {
        let res = self.http.get(self.url("/reset-database")).send().await?;
        expect_ok(res.status())
    }

    /// Trigger judging for one student. Returns the backend's judge outcome
    /// as-is.
    pub async fn judge_code(&self, student_id: &str) -> Result<Value> {
        let env: Envelope<Value> = self
            .post("/judge-code", Some(&json!({ "studentID": student_id })))
            .await?;
        debug!("Judge outcome for {student_id}: {}", env.data);
        Ok(env.data)
    }

    /// IDs of students who have submitted code.
    pub async fn submitted_students(&self) -> Result<Vec<String>> {
        let env: ListEnvelope<String> = self.get("/get-submitted-students").await?;
        Ok(env.data.result)
    }

    /// Scores of every student, in whatever shape the backend produces.
    pub async fn all_student_scores(&self) -> Result<Value> {
        let env: Envelope<Value> = self.post("/all-student-scores", None).await?;
        Ok(env.data)
    }

    /// Ask the backend to refresh its alert cache; returns the refreshed
    /// alerts.
    pub async fn refresh_alerts(&self) -> Result<Vec<AlertRecord>> {
        let env: Envelope<Vec<AlertRecord>> = self.get("/update-alert-list").await?;
        Ok(env.data)
    }

    /// Current anti-cheat alerts.
    pub async fn alert_list(&self) -> Result<Vec<AlertRecord>> {
        let env: ListEnvelope<AlertRecord> = self.get("/get-alert-logs").await?;
        Ok(env.data.result)
    }

    /// Mark an alert as reviewed (or un-reviewed). Returns the backend's
    /// acknowledgement flag.
    pub async fn set_alert_status(&self, id: &str, ok: bool) -> Result<bool> {
        let ack: Ack = self
            .post(
                "/set-alert-ok-status",
                Some(&json!({ "id": id, "isOk": ok })),
            )
            .await?;
        Ok(ack.success)
    }

    /// Full log history.
    pub async fn all_logs(&self) -> Result<Vec<LogRecord>> {
        let env: ListEnvelope<LogRecord> = self.get("/get-all-logs").await?;
        Ok(env.data.result)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let res = self.http.get(self.url(path)).send().await?;
        decode(res).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<&Value>) -> Result<T> {
        let mut req = self.http.post(self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        decode(req.send().await?).await
    }
}

fn expect_ok(status: StatusCode) -> Result<()> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ClientError::Status(status))
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }
    let text = res.text().await?;
    serde_json::from_str(&text).map_err(|e| ClientError::Envelope(e.to_string()))
}
