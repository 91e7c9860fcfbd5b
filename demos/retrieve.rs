//! Retrieve LIDs from a simulated meter whose response table holds the
//! given bytes.

mod common;

use clap::Parser;
use psem_lids::{
    connection::{MemoryTables, RequestMode, TableId},
    LidRetriever, LogOutput, Logger,
};

#[derive(Parser)]
struct Command {
    #[clap(flatten)]
    common: common::CliOpts,
    /// Hex encoded contents of the LID response table
    #[clap(long, short)]
    response: String,
    /// Expect each value to be preceded by its LID
    #[clap(long)]
    echo: bool,
    /// LIDs to retrieve, by name or hexadecimal value
    lids: Vec<String>,
}

fn main() -> std::io::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or("info".to_string()))
        .init();

    let command = Command::parse();
    let catalog = command.common.catalog();

    let lids = command
        .lids
        .iter()
        .map(|lid| command.common.lid(&catalog, lid))
        .collect::<std::io::Result<Vec<_>>>()?;

    let response = hex::decode(&command.response)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let tables = MemoryTables::new().with_table(TableId::LID_RESPONSE, response);
    let mut retriever = LidRetriever::new(tables);

    let mode = if command.echo {
        RequestMode::LidAndData
    } else {
        RequestMode::DataOnly
    };

    let log_output = &LogOutput::LogTarget(log::Level::Info, "retrieve".into());

    match retriever.retrieve_readings(&lids, mode) {
        Ok(readings) => Logger::log_all(log_output, &readings),
        Err(e) => log::error!("Retrieval failed: {e}"),
    }

    if let Some((_, request)) = retriever.service().writes().last() {
        log::debug!("Request: {}", hex::encode(request));
    }

    Ok(())
}
