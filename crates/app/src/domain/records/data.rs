//! Records Data

/// New Record Data
///
/// Carries the submitted fields as-is; the service validates them before
/// anything is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub species: String,
    pub category: String,
    pub location: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: String,
    pub image_url: Option<String>,
    pub observer_name: String,
}

impl NewRecord {
    /// Whether every required text field is present and non-blank.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        [
            &self.species,
            &self.category,
            &self.location,
            &self.description,
            &self.observer_name,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::test::make_new_record;

    use super::*;

    #[test]
    fn complete_record_has_required_fields() {
        assert!(make_new_record().has_required_fields());
    }

    #[test]
    fn optional_fields_are_not_required() {
        let new = NewRecord {
            date: None,
            time: None,
            image_url: None,
            ..make_new_record()
        };

        assert!(new.has_required_fields());
    }

    #[test]
    fn blank_required_field_is_missing() {
        let blanks: [fn(&mut NewRecord); 5] = [
            |new| new.species.clear(),
            |new| new.category.clear(),
            |new| new.location = "   ".to_string(),
            |new| new.description.clear(),
            |new| new.observer_name.clear(),
        ];

        for blank in blanks {
            let mut new = make_new_record();

            blank(&mut new);

            assert!(!new.has_required_fields(), "expected {new:?} to be rejected");
        }
    }
}
