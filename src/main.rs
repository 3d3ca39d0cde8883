
use log::{LevelFilter, error, info};
use std::io::Write;
use std::time::Instant;

use levenshtein_dag::alignment::aligner::Alignment;
use levenshtein_dag::cli::align::{AlignSettings, check_align_settings};
use levenshtein_dag::cli::core::{Commands, CostSettings, get_cli};
use levenshtein_dag::cli::graph::{GraphSettings, check_graph_settings};
use levenshtein_dag::dag::builder::build_dag;
use levenshtein_dag::util::json_io::save_json;
use levenshtein_dag::writers::dot::{save_dot, save_graph_json};
use levenshtein_dag::writers::report::{ReportWriter, write_report};

fn init_logging(verbosity: u8) {
    let filter_level: LevelFilter = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();
}

/// Runs the alignment and prints the table (unless skipped) plus the report to stdout.
fn align_and_print(source: &str, target: &str, costs: &CostSettings, skip_table: bool) -> Alignment {
    let cost_model = match costs.cost_model() {
        Ok(cm) => cm,
        Err(e) => {
            error!("Error while building cost model: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    info!("Aligning sequences...");
    let alignment = Alignment::new(source, target, cost_model);
    info!("Alignment score: {}", alignment.score());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if !skip_table {
        if let Err(e) = writeln!(handle, "{}", alignment.table()) {
            error!("Error while printing table: {e}");
            std::process::exit(exitcode::IOERR);
        }
    }
    if let Err(e) = write_report(alignment.operations(), &mut handle) {
        error!("Error while printing results: {e}");
        std::process::exit(exitcode::IOERR);
    }

    alignment
}

fn run_align(settings: AlignSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    init_logging(settings.verbosity);

    let settings = match check_align_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let alignment = align_and_print(&settings.source, &settings.target, &settings.costs, settings.skip_table);

    if let Some(report_fn) = settings.output_report.as_deref() {
        info!("Saving report to {report_fn:?}...");
        let saved = ReportWriter::new(report_fn)
            .and_then(|mut writer| writer.write_operations(alignment.operations()));
        if let Err(e) = saved {
            error!("Error while saving report: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    if let Some(json_fn) = settings.output_json.as_deref() {
        info!("Saving alignment JSON to {json_fn:?}...");
        if let Err(e) = save_json(&alignment, json_fn) {
            error!("Error while saving alignment JSON: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    info!("Alignment completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn run_graph(settings: GraphSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    init_logging(settings.verbosity);

    let settings = match check_graph_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let graph_config = match settings.graph_config() {
        Ok(gc) => gc,
        Err(e) => {
            error!("Error while building graph config: {e:?}");
            std::process::exit(exitcode::SOFTWARE);
        }
    };

    let alignment = align_and_print(&settings.source, &settings.target, &settings.costs, settings.skip_table);

    info!("Building alignment DAG...");
    let dag = build_dag(alignment.operations(), &graph_config);
    info!("DAG contains {} nodes and {} edges", dag.nodes().len(), dag.edges().len());

    info!("Saving DOT graph to {:?}...", &settings.output_dot);
    if let Err(e) = save_dot(&dag, &graph_config, &settings.output_dot) {
        error!("Error while saving DOT graph: {e:#}");
        std::process::exit(exitcode::IOERR);
    }

    if let Some(json_fn) = settings.output_json.as_deref() {
        info!("Saving graph JSON to {json_fn:?}...");
        if let Err(e) = save_graph_json(&dag, &graph_config, json_fn) {
            error!("Error while saving graph JSON: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    info!("Render with: dot -T{0} {1:?} -o graphs.{0}", graph_config.image_format(), &settings.output_dot);
    info!("Graph export completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Align(settings) => {
            run_align(*settings);
        },
        Commands::Graph(settings) => {
            run_graph(*settings);
        }
    }

    info!("Process finished successfully.");
}
