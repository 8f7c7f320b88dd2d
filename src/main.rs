use pikachu_research::pipeline;

/// Fixed output path; the tool takes no flags or arguments.
const OUTPUT_PATH: &str = "pikachu-research.json";

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=pikachu_research=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Pikachu Research - Pokemon TCG card collector");

    if let Err(e) = pipeline::run(OUTPUT_PATH) {
        log::error!("Pipeline error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
