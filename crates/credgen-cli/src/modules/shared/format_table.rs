use chrono::{DateTime, Utc};
use credgen_core::CredentialRequest;

const EMPTY: &str = "-";

fn format_expiry(item: &CredentialRequest, now: DateTime<Utc>) -> String {
    match (item.expires_at_utc(), item.expires_at.as_deref()) {
        (Some(expires), _) => {
            let text = expires.format("%Y-%m-%d %H:%M:%S UTC").to_string();
            if item.is_expired_at(now) {
                format!("{text} (expired)")
            } else {
                text
            }
        }
        (None, Some(raw)) => raw.to_string(),
        (None, None) => EMPTY.to_string(),
    }
}

/// Plain-text table of the listing. TYPE, SCOPES and EXPIRES columns are only
/// shown when at least one entry carries them.
pub(crate) fn format_list_table(items: &[CredentialRequest], now: DateTime<Utc>) -> String {
    if items.is_empty() {
        return "No credentials found.".to_string();
    }
    let show_kind = items.iter().any(|item| item.kind.is_some());
    let show_scopes = items.iter().any(|item| item.scopes.is_some());
    let show_expires = items.iter().any(|item| item.expires_at.is_some());

    let mut header = vec!["ID", "PRINCIPAL", "STATUS"];
    if show_kind {
        header.push("TYPE");
    }
    if show_scopes {
        header.push("SCOPES");
    }
    if show_expires {
        header.push("EXPIRES");
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let mut row = vec![
                item.id.clone(),
                item.principal.clone(),
                item.status.to_string(),
            ];
            if show_kind {
                row.push(item.kind.clone().unwrap_or_else(|| EMPTY.to_string()));
            }
            if show_scopes {
                row.push(
                    item.scopes
                        .as_ref()
                        .map(|scopes| scopes.join(","))
                        .unwrap_or_else(|| EMPTY.to_string()),
                );
            }
            if show_expires {
                row.push(format_expiry(item, now));
            }
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|title| title.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(header.iter().copied(), &widths));
    for row in &rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
