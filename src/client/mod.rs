//! HTTP client for a running cep-proxy server
//!
//! Backs the `cep-cli` binary. The list endpoint is fetched unsorted and
//! ordered locally by [`sort_records`], a deliberately separate sorter
//! from the server's: it orders strictly by the one field the user picked.

use std::cmp::Ordering;
use std::time::Duration;

use reqwest::Client;

use crate::errors::{AppError, AppResult};
use crate::models::{AddressRecord, SortDirection, SortField};
use crate::web::ErrorResponse;

/// Client for the cep-proxy HTTP API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("cep-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Look up a single CEP through the proxy.
    pub async fn lookup(&self, cep: &str) -> AppResult<AddressRecord> {
        let url = format!("{}/api/cep/{}", self.base_url, cep);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let body: ErrorResponse = response
                .json()
                .await
                .unwrap_or_else(|_| ErrorResponse {
                    error: "Erro ao buscar o endereço. Verifique o CEP e tente novamente."
                        .to_string(),
                });
            Err(AppError::api(body.error))
        }
    }

    /// Fetch every CEP the server has cached, unsorted; ordering is the
    /// client's business.
    pub async fn list(&self) -> AppResult<Vec<AddressRecord>> {
        let url = format!("{}/api/ceps", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Sort records in place by a single field.
pub fn sort_records(records: &mut [AddressRecord], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = field.value_of(a).cmp(field.value_of(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Render records as the five-column table the UI has always shown.
pub fn render_table(records: &[AddressRecord]) -> String {
    let headers = ["CEP", "Logradouro", "Bairro", "Cidade", "Estado"];
    let rows: Vec<[&str; 5]> = records
        .iter()
        .map(|r| {
            [
                r.cep.as_str(),
                r.street.as_str(),
                r.neighborhood.as_str(),
                r.city.as_str(),
                r.state.as_str(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    // Trailing padding on the last column is noise
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 5]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push('\n');
}
