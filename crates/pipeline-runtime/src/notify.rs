use crate::context::RunContext;
use connectors::http::error::SourceError;
use tracing::{error, info};

/// Failure hook for the fetch task.
///
/// The legacy pipeline registered this as a scheduler callback; here the
/// executor invokes it deterministically when the fetch `Result` is an error.
/// It reads back whatever partial response was captured (usually nothing),
/// emits exactly one alert at error severity, and returns the message so the
/// caller can carry it in its own error. No retries, no external dispatch;
/// an alerting integration would hook in where the message is logged.
pub fn notify_fetch_failure(ctx: &RunContext, err: &SourceError) -> String {
    info!(
        "Captured response at failure: {:?}",
        ctx.pull_response().unwrap_or("<none>")
    );

    let message = format!(
        "[Pipeline Alert] Pipeline: {}, Task: {} failed: {}. See logs: {}",
        ctx.pipeline_id, ctx.fetch_task_id, err, ctx.log_location
    );
    error!("{message}");

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline_config::settings::PipelineSettings;

    #[test]
    fn test_alert_names_the_pipeline_and_task() {
        let ctx = RunContext::new(&PipelineSettings::default())
            .with_log_location("/var/log/rtms/run.log");
        let err = SourceError::UnexpectedStatus {
            status: 404,
            endpoint: "http://host/***/json/svc/1/1000/".to_string(),
        };

        let message = notify_fetch_failure(&ctx, &err);

        assert!(message.contains("seoul_real_estate_api_etl"));
        assert!(message.contains("call_open_api"));
        assert!(message.contains("404"));
        assert!(message.contains("/var/log/rtms/run.log"));
    }
}
