//! Record fixtures.

use jiff::{
    Timestamp,
    civil::{Date, Time},
};

use crate::domain::records::{MarineRecord, NewRecord, RecordId};

pub(crate) fn make_record(
    species: &str,
    category: &str,
    observer_name: &str,
    date: Date,
    time: Time,
) -> MarineRecord {
    MarineRecord {
        id: RecordId::generate(),
        species: species.to_string(),
        category: category.into(),
        location: "Jeju harbour".to_string(),
        date,
        time,
        description: "Routine sighting".to_string(),
        image_url: "https://example.com/sighting.jpg".to_string(),
        observer_name: observer_name.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_new_record() -> NewRecord {
    NewRecord {
        species: "Sea Turtle".to_string(),
        category: "turtle".to_string(),
        location: "Jeju harbour".to_string(),
        date: Some("2024-01-01".to_string()),
        time: Some("09:00".to_string()),
        description: "Surfacing near the breakwater".to_string(),
        image_url: Some("https://example.com/turtle.jpg".to_string()),
        observer_name: "Kim".to_string(),
    }
}
