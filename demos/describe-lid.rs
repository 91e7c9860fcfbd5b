mod common;

use clap::Parser;
use psem_lids::{Loggable, LogOutput, Logger};

#[derive(Parser)]
struct Command {
    #[clap(flatten)]
    common: common::CliOpts,
    /// List every named LID of the selected family instead
    #[clap(long)]
    list: bool,
    /// LIDs to describe, by name or hexadecimal value
    lids: Vec<String>,
}

fn main() -> std::io::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or("info".to_string()))
        .init();

    let command = Command::parse();
    let catalog = command.common.catalog();

    let log_output = &LogOutput::LogTarget(log::Level::Info, "describe_lid".into());

    if command.list {
        for (name, lid) in catalog.iter() {
            log::info!("{name:<40} 0x{:08X} {:<16} {}", lid.value(), lid.data_type(), lid.description());
        }
        return Ok(());
    }

    for lid in &command.lids {
        let lid = command.common.lid(&catalog, lid)?;

        if let Some(name) = catalog.name_of(lid.value()) {
            log::info!("{name}");
        }

        Logger::log(log_output, &lid);
        log::debug!("{} log lines", lid.as_log().len());
    }

    Ok(())
}
