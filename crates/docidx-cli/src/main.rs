use clap::Parser;
use docidx_cli::args::CliArgs;
use docidx_cli::front_end::UnintegratedFrontEnd;
use docidx_cli::{compile_db, config_loader};
use docidx_engine::Indexer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "docidx=info,warn".to_string()))
        .init();

    let args = CliArgs::parse();

    let config = config_loader::load_config(&args.config)?;
    let config = config_loader::apply_overrides(config, &args);

    let compile_db = compile_db::load_compile_database(&config.compile_commands_json)?;

    let front_end = UnintegratedFrontEnd;
    let mut indexer = Indexer::new(&config, &front_end);
    let index = indexer.run(&compile_db)?;

    tracing::info!(
        records = index.records.len(),
        functions = index.functions.len(),
        enums = index.enums.len(),
        namespaces = index.namespaces.len(),
        aliases = index.aliases.len(),
        "indexing run complete"
    );

    if args.print_stats {
        for line in indexer.print_stats() {
            println!("{line}");
        }
    }

    Ok(())
}
