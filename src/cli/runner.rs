//! CLI runner - executes the fetch and renders the result

use crate::auth::Credential;
use crate::cli::commands::{Cli, OutputFormat};
use crate::engine::RosterEngine;
use crate::error::{Error, Result};
use crate::github::QueryExecutor;
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::{self, RosterReport};
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the single-shot collection and print the rendered report
    pub async fn run(&self) -> Result<()> {
        self.validate()?;

        let config = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.cli.timeout))
            .build();
        let client = HttpClient::with_config(config)
            .with_credential(Credential::token(self.cli.token.as_str()));

        let executor = QueryExecutor::new(client, &self.cli.url, self.cli.org.as_str())?;
        let engine = RosterEngine::new(executor);
        let records = engine.collect_all().await?;

        info!(
            organization = %self.cli.org,
            records = records.len(),
            "collection complete"
        );

        let rendered = match self.cli.format {
            OutputFormat::Table => output::render_table(&records),
            OutputFormat::Json => {
                output::render_json(&RosterReport::build(&self.cli.org, &records))?
            }
            OutputFormat::Plain => output::render_plain(&records),
        };
        println!("{rendered}");

        Ok(())
    }

    /// Reject empty inputs before any network traffic
    fn validate(&self) -> Result<()> {
        if self.cli.org.trim().is_empty() {
            return Err(Error::config("organization must not be empty"));
        }
        if self.cli.token.trim().is_empty() {
            return Err(Error::config("token must not be empty"));
        }
        Ok(())
    }
}
