use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod diagnostics;
mod error;
mod graph;
mod label;
mod plan;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "mapping-plan-viz", version)]
#[command(about = "Graphviz visualizer for mapping algebra trees", long_about = None)]
struct Cli {
    /// JSON file containing the mapping plan
    json_file: String,

    /// Name of the RML document the mapping plan was generated from
    rml_doc_name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = render::RenderConfig::from_env();

    // 1) Load the plan.
    let mapping_plan = plan::load_plan(&cli.json_file)
        .with_context(|| diagnostics::error_message("loading mapping plan"))?;

    // 2) Walk every root into one graph.
    let comment = format!("The mapping plan for {}", cli.rml_doc_name);
    let graph = render::render_plan(&mapping_plan, &config.graph_name, Some(&comment))
        .with_context(|| diagnostics::error_message(format!("rendering {}", cli.json_file)))?;

    // 3) Hand it to Graphviz.
    let files = render::render_to_dir(&graph, &config)
        .with_context(|| diagnostics::error_message("writing graph output"))?;
    tracing::debug!(source = %files.source.display(), "kept graph source");
    println!("Wrote {}", files.image.display());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
