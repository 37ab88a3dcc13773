use std::io;

use clap::Args;
use sealife_app::domain::records::{
    NewRecord,
    view::{RecordFilter, RecordsView, insert_created},
};
use sealife_client::{RecordsClient, table};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Common or scientific species name
    #[arg(long)]
    species: String,

    /// One of fish, mammal, turtle, coral, jellyfish, crab, mollusk or other
    #[arg(long)]
    category: String,

    /// Where the sighting happened
    #[arg(long)]
    location: String,

    /// Observation date as YYYY-MM-DD, defaults to today on the server
    #[arg(long)]
    date: Option<String>,

    /// Observation time as HH:MM, defaults to now on the server
    #[arg(long)]
    time: Option<String>,

    /// What was seen
    #[arg(long)]
    description: String,

    /// Link to a photo of the sighting
    #[arg(long)]
    image_url: Option<String>,

    /// Who made the observation
    #[arg(long = "observer")]
    observer_name: String,
}

impl From<AddArgs> for NewRecord {
    fn from(args: AddArgs) -> Self {
        Self {
            species: args.species,
            category: args.category,
            location: args.location,
            date: args.date,
            time: args.time,
            description: args.description,
            image_url: args.image_url,
            observer_name: args.observer_name,
        }
    }
}

/// Submit the sighting, then shows the collection as it stands with the new
/// record included.
pub(crate) async fn run(
    client: &RecordsClient,
    args: AddArgs,
    mut out: impl io::Write,
) -> Result<(), String> {
    let mut records = client
        .list_records()
        .await
        .map_err(|error| error.to_string())?;

    let record = client
        .create_record(&args.into())
        .await
        .map_err(|error| error.to_string())?;

    writeln!(
        out,
        "Recorded {} ({}) as {}",
        record.species,
        record.category.display_label(),
        record.id
    )
    .map_err(|error| error.to_string())?;

    insert_created(&mut records, record);

    let filter = RecordFilter::default();

    table::write_records(out, &RecordsView::derive(&records, &filter), &filter)
        .map_err(|error| error.to_string())
}
