use crate::{context::RunContext, error::PipelineError, notify};
use connectors::{file::csv::sink::CsvSink, http::source::DataSource};
use model::{api::envelope::Envelope, run::state::RunState};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of one scheduled run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub state: RunState,
    pub rows_fetched: usize,
    pub rows_written: usize,
    pub list_total_count: Option<u64>,
    pub duration_ms: u64,
}

/// Convenience entry point mirroring the CLI's view of a run.
pub async fn run(
    source: Box<dyn DataSource>,
    sink: CsvSink,
    ctx: &mut RunContext,
    dry_run: bool,
) -> Result<RunSummary, PipelineError> {
    PipelineExecutor::new(source, sink, dry_run).execute(ctx).await
}

/// Drives a single run through its states:
/// fetch -> capture -> parse -> append, or fetch -> notify on failure.
///
/// The failure notifier belongs to the fetch task only; sink-side failures
/// (malformed JSON, unwritable filesystem) propagate without an alert,
/// exactly as the legacy callback wiring behaved.
pub struct PipelineExecutor {
    source: Box<dyn DataSource>,
    sink: CsvSink,
    dry_run: bool,
}

impl PipelineExecutor {
    pub fn new(source: Box<dyn DataSource>, sink: CsvSink, dry_run: bool) -> Self {
        Self {
            source,
            sink,
            dry_run,
        }
    }

    pub async fn execute(&self, ctx: &mut RunContext) -> Result<RunSummary, PipelineError> {
        let start_time = std::time::Instant::now();
        let mut state = RunState::Pending;
        info!(run_id = %ctx.run_id, pipeline = %ctx.pipeline_id, state = %state, "Starting pipeline run");

        state = RunState::Fetching;
        info!(state = %state, task = %ctx.fetch_task_id, endpoint = %self.source.endpoint(), "Calling open API");

        let body = match self.source.fetch().await {
            Ok(body) => body,
            Err(err) => {
                state = RunState::Failed;
                warn!(state = %state, task = %ctx.fetch_task_id, "Fetch task failed");

                let message = notify::notify_fetch_failure(ctx, &err);

                state = RunState::Notified;
                info!(state = %state, "Run halted before the sink step");

                return Err(PipelineError::Fetch {
                    message,
                    source: err,
                });
            }
        };

        ctx.capture_response(body);
        state = RunState::Fetched;
        info!(state = %state, "Response captured");

        let (rows_fetched, rows_written, list_total_count) =
            self.process_response(ctx, &mut state)?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            run_id = %ctx.run_id,
            state = %state,
            rows = rows_written,
            duration_ms,
            "Pipeline run completed"
        );

        Ok(RunSummary {
            run_id: ctx.run_id.clone(),
            state,
            rows_fetched,
            rows_written,
            list_total_count,
            duration_ms,
        })
    }

    /// The sink task: parse the captured response and append its rows.
    fn process_response(
        &self,
        ctx: &RunContext,
        state: &mut RunState,
    ) -> Result<(usize, usize, Option<u64>), PipelineError> {
        let response = ctx.pull_response().unwrap_or_default();

        // Empty body: no parse attempt, no filesystem action.
        if response.trim().is_empty() {
            info!("No data received");
            *state = RunState::Done;
            return Ok((0, 0, None));
        }

        let envelope = Envelope::parse(response, &ctx.service)?;
        if let Some(result) = &envelope.result {
            info!("API result: {} {}", result.code, result.message);
        }
        let list_total_count = envelope.list_total_count;

        if envelope.is_empty() {
            info!("No items found");
            *state = RunState::Done;
            return Ok((0, 0, list_total_count));
        }

        *state = RunState::Sinking;
        info!(state = %state, task = %ctx.sink_task_id, rows = envelope.row_count(), "Appending rows to sink");

        let batch = envelope.into_batch();
        let rows_fetched = batch.len();
        let rows_written = if self.dry_run {
            info!(rows = rows_fetched, "Dry run: sink append skipped");
            0
        } else {
            let written = self.sink.append(&batch)?;
            info!("{written} records saved");
            written
        };

        *state = RunState::Done;
        Ok((rows_fetched, rows_written, list_total_count))
    }
}
