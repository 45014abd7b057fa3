use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Execute one scheduled run: fetch, transform, append to the CSV sink
    Run {
        #[arg(long, help = "Optional .env file with connection variables")]
        env_file: Option<String>,

        #[arg(long, help = "Optional JSON settings file")]
        settings: Option<String>,

        #[arg(long, help = "Fetch and parse, but skip the CSV append")]
        dry_run: bool,

        #[arg(
            long,
            help = "If set, prints the run summary as JSON instead of a table"
        )]
        json: bool,
    },
    /// Test the open-API connection with a single-record window
    TestConn {
        #[arg(long, help = "Optional .env file with connection variables")]
        env_file: Option<String>,
    },
    /// Print the effective pipeline settings
    ShowConfig {
        #[arg(long, help = "Optional JSON settings file")]
        settings: Option<String>,
    },
}
