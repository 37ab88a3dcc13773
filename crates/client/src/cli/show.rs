use std::io;

use clap::Args;
use sealife_app::domain::records::RecordId;
use sealife_client::{RecordsClient, table};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Record identifier
    id: String,
}

pub(crate) async fn run(
    client: &RecordsClient,
    args: ShowArgs,
    out: impl io::Write,
) -> Result<(), String> {
    let record = client
        .get_record(&RecordId::from(args.id))
        .await
        .map_err(|error| error.to_string())?;

    table::write_record(out, &record).map_err(|error| error.to_string())
}
