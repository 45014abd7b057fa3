use connectors::{file::csv::sink::CsvSink, http::source::OpenApiSource};
use pipeline_config::{connection::Connection, settings::PipelineSettings};

/// Builds the run's HTTP source from the resolved connection and settings.
pub fn create_source(conn: &Connection, settings: &PipelineSettings) -> OpenApiSource {
    OpenApiSource::new(
        conn.base_url.clone(),
        conn.api_key.clone(),
        settings.service.clone(),
        settings.start_index,
        settings.end_index,
    )
}

pub fn create_sink(settings: &PipelineSettings) -> CsvSink {
    CsvSink::new(settings.sink_path.clone(), settings.header_policy)
}
