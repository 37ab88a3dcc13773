use std::io;

use sealife_app::domain::records::view::RecordStats;
use sealife_client::{RecordsClient, table};

pub(crate) async fn run(client: &RecordsClient, out: impl io::Write) -> Result<(), String> {
    let records = client
        .list_records()
        .await
        .map_err(|error| error.to_string())?;

    let stats = RecordStats::from_records(&records);

    table::write_stats(out, &stats).map_err(|error| error.to_string())
}
