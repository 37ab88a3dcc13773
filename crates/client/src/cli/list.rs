use std::io;

use clap::Args;
use sealife_app::domain::records::view::{ALL_CATEGORIES, RecordFilter, RecordsView};
use sealife_client::{RecordsClient, table};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Match species, location or observer name, ignoring case
    #[arg(long, short, default_value = "")]
    query: String,

    /// Only show records in this category
    #[arg(long, short, default_value = ALL_CATEGORIES)]
    category: String,
}

pub(crate) async fn run(
    client: &RecordsClient,
    args: ListArgs,
    out: impl io::Write,
) -> Result<(), String> {
    let records = client
        .list_records()
        .await
        .map_err(|error| error.to_string())?;

    let filter = RecordFilter::new(args.query, args.category.as_str());
    let view = RecordsView::derive(&records, &filter);

    table::write_records(out, &view, &filter).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use crate::cli::test::{make_client, output, record_json};

    use super::*;

    async fn serve_records(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/records"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "records": [
                    record_json("a", "Green Turtle", "turtle", "2024-03-01"),
                    record_json("b", "Moon Jellyfish", "jellyfish", "2024-03-02"),
                ]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn list_filters_by_category() -> TestResult {
        let server = MockServer::start().await;

        serve_records(&server).await;

        let mut out = Vec::new();

        run(
            &make_client(&server),
            ListArgs {
                query: String::new(),
                category: "turtle".to_string(),
            },
            &mut out,
        )
        .await?;

        let output = output(out);

        assert!(output.contains("Green Turtle"));
        assert!(!output.contains("Moon Jellyfish"));
        assert!(output.contains("1 of 2 records shown"));

        Ok(())
    }

    #[tokio::test]
    async fn list_reports_when_nothing_matches() -> TestResult {
        let server = MockServer::start().await;

        serve_records(&server).await;

        let mut out = Vec::new();

        run(
            &make_client(&server),
            ListArgs {
                query: "shark".to_string(),
                category: ALL_CATEGORIES.to_string(),
            },
            &mut out,
        )
        .await?;

        assert!(output(out).contains("No records match"));

        Ok(())
    }

    #[tokio::test]
    async fn list_surfaces_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/records"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({ "error": "Failed to fetch records" })),
            )
            .mount(&server)
            .await;

        let result = run(
            &make_client(&server),
            ListArgs {
                query: String::new(),
                category: ALL_CATEGORIES.to_string(),
            },
            Vec::new(),
        )
        .await;

        assert_eq!(result, Err("Failed to fetch records".to_string()));
    }
}
