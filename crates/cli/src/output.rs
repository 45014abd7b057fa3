use pipeline_runtime::execution::executor::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Run '{}' finished:", summary.run_id);
    println!("-----------------------------");
    println!("{:<16} {}", "State", summary.state);
    println!("{:<16} {}", "Rows fetched", summary.rows_fetched);
    println!("{:<16} {}", "Rows written", summary.rows_written);
    let total = summary
        .list_total_count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    println!("{:<16} {}", "Upstream total", total);
    println!("{:<16} {} ms", "Duration", summary.duration_ms);
}
