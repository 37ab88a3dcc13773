use std::io;

use sealife_client::RecordsClient;

pub(crate) async fn run(client: &RecordsClient, mut out: impl io::Write) -> Result<(), String> {
    let status = client.health().await.map_err(|error| error.to_string())?;

    writeln!(out, "{status}").map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use crate::cli::test::{make_client, output};

    use super::*;

    #[tokio::test]
    async fn health_prints_status() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let mut out = Vec::new();

        run(&make_client(&server), &mut out).await?;

        assert_eq!(output(out), "ok\n");

        Ok(())
    }
}
