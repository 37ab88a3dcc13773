use std::io;

use clap::Args;
use sealife_app::domain::records::RecordId;
use sealife_client::RecordsClient;

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Record identifier
    id: String,
}

pub(crate) async fn run(
    client: &RecordsClient,
    args: DeleteArgs,
    mut out: impl io::Write,
) -> Result<(), String> {
    let message = client
        .delete_record(&RecordId::from(args.id))
        .await
        .map_err(|error| error.to_string())?;

    writeln!(out, "{message}").map_err(|error| error.to_string())
}
