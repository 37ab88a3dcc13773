//! Sea Life Domain Concerns

pub mod records;
