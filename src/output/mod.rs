//! Report rendering
//!
//! Turns the collected roster into user-facing output. Three renderings:
//! a terminal table (default), a JSON report with explicit nulls, and
//! plain tab-separated lines for shell piping.

use crate::error::Result;
use crate::types::LinkageRecord;
use chrono::Utc;
use comfy_table::{Cell, Table};
use serde::Serialize;

/// JSON report wrapper: the roster plus run metadata
#[derive(Debug, Serialize)]
pub struct RosterReport<'a> {
    /// Organization the roster was collected for
    pub organization: &'a str,
    /// RFC 3339 timestamp of report generation
    pub generated_at: String,
    /// The collected records, in server order
    pub identities: &'a [LinkageRecord],
}

impl<'a> RosterReport<'a> {
    /// Build a report over a collected roster
    pub fn build(organization: &'a str, identities: &'a [LinkageRecord]) -> Self {
        Self {
            organization,
            generated_at: Utc::now().to_rfc3339(),
            identities,
        }
    }
}

/// Render the roster as a terminal table
pub fn render_table(records: &[LinkageRecord]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Login", "SAML Name ID", "SCIM Username"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.login_display()),
            Cell::new(record.saml_display()),
            Cell::new(record.scim_display()),
        ]);
    }
    table.to_string()
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &RosterReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the roster as tab-separated lines, one record per line
pub fn render_plain(records: &[LinkageRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "{}\t{}\t{}",
                record.login_display(),
                record.saml_display(),
                record.scim_display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
