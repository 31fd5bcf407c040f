use anyhow::Result;
use dexstat::{
    analysis::AnalysisKind,
    cli::{delimiter_byte, Cli, Commands},
    filter::resolve_analyses,
    pipeline::{load_normalized, print_overview, run_report},
    render::{ChartSink, JsonSpecSink, SilentSink},
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("dexstat={}", level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report {
            input,
            only,
            skip,
            charts_dir,
            delimiter,
        } => {
            let start = Instant::now();
            let delimiter = delimiter_byte(delimiter)?;

            // Resolve analysis filters
            let kinds = resolve_analyses(only, skip)?;

            let mut sink: Box<dyn ChartSink> = match &charts_dir {
                Some(dir) => Box::new(JsonSpecSink::new(dir)?),
                None => Box::new(SilentSink::new()),
            };
            let summary = run_report(&input, delimiter, &kinds, sink.as_mut())?;

            let elapsed = start.elapsed();
            println!(
                "\nAnalyzed {:?} ({} rows): {} analyses ran, {} skipped in {:.1}s",
                input,
                summary.rows,
                summary.succeeded.len(),
                summary.failed.len(),
                elapsed.as_secs_f64()
            );
            if let Some(dir) = charts_dir {
                println!("Wrote {} chart specs to {:?}", summary.charts, dir);
            }
        }

        Commands::Describe { input, delimiter } => {
            let table = load_normalized(&input, delimiter_byte(delimiter)?)?;
            print_overview(&table);
        }

        Commands::ListAnalyses => {
            println!("Available analyses:\n");
            for kind in AnalysisKind::ALL {
                println!("  {:<18} {}", kind.name(), kind.description());
            }
        }
    }

    Ok(())
}
