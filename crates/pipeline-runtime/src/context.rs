use chrono::{DateTime, Utc};
use pipeline_config::settings::PipelineSettings;

pub const PIPELINE_ID: &str = "seoul_real_estate_api_etl";
pub const FETCH_TASK_ID: &str = "call_open_api";
pub const SINK_TASK_ID: &str = "process_api_data";

/// Ephemeral per-run state: created when the run starts, discarded when it
/// ends. The captured response is the hand-off between the fetch and sink
/// tasks, and is what the failure notifier reads back after a failed fetch.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub pipeline_id: String,
    pub fetch_task_id: String,
    pub sink_task_id: String,
    pub service: String,
    pub log_location: String,
    pub started_at: DateTime<Utc>,
    captured_response: Option<String>,
}

impl RunContext {
    pub fn new(settings: &PipelineSettings) -> Self {
        let started_at = Utc::now();
        let run_id = make_run_id(
            PIPELINE_ID,
            &settings.service,
            settings.start_index,
            settings.end_index,
            &started_at,
        );

        RunContext {
            run_id,
            pipeline_id: PIPELINE_ID.to_string(),
            fetch_task_id: FETCH_TASK_ID.to_string(),
            sink_task_id: SINK_TASK_ID.to_string(),
            service: settings.service.clone(),
            log_location: "process stderr".to_string(),
            started_at,
            captured_response: None,
        }
    }

    /// Points alert messages at wherever the scheduler collects this run's
    /// logs.
    pub fn with_log_location(mut self, log_location: impl Into<String>) -> Self {
        self.log_location = log_location.into();
        self
    }

    pub fn capture_response(&mut self, body: String) {
        self.captured_response = Some(body);
    }

    /// Reads back the captured response, if the fetch task got that far.
    pub fn pull_response(&self) -> Option<&str> {
        self.captured_response.as_deref()
    }
}

// Stable & human-ish: pipeline id + service window + start timestamp
fn make_run_id(
    pipeline_id: &str,
    service: &str,
    start_index: u32,
    end_index: u32,
    started_at: &DateTime<Utc>,
) -> String {
    let mut h = blake3::Hasher::new();
    h.update(pipeline_id.as_bytes());
    h.update(b":");
    h.update(service.as_bytes());
    h.update(b":");
    h.update(start_index.to_string().as_bytes());
    h.update(b"-");
    h.update(end_index.to_string().as_bytes());
    h.update(b":");
    h.update(started_at.to_rfc3339().as_bytes());
    format!("run-{}", &h.finalize().to_hex()[..16])
}
