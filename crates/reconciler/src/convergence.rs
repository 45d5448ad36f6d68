// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The full convergence pass (spec §4.3 "Convergence algorithm"), grounded
//! 1:1 on `sync_cloudflare.py::sync_dns_records`: build the desired record
//! set, diff against the provider's existing records, create/update what
//! differs, and prune orphans only when the source actually yielded
//! hostnames.

use std::collections::HashMap;

use tracing::{error, info};

use crate::error::Result;
use crate::provider::DnsProvider;
use crate::proxy::{reserved_hostname, should_proxy};

/// A single desired `(hostname, proxied)` pair in the convergence target set.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredRecord {
    pub name: String,
    pub proxied: bool,
}

/// Outcome of a full pass (spec §7 item 4: "partial reconciliation errors").
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    pub succeeded: bool,
    pub failures: Vec<String>,
}

/// Build the desired record set `D` (spec §4.3 step 4): the root domain
/// (always proxied), the reserved helper hostname (always unproxied), and
/// every extracted hostname with its proxy flag, first entry wins on
/// duplicates.
pub fn desired_records(base: &str, extracted: &[String]) -> Vec<DesiredRecord> {
    let mut order = Vec::new();
    let mut seen: HashMap<String, bool> = HashMap::new();

    let mut insert = |name: String, proxied: bool, order: &mut Vec<String>| {
        if !seen.contains_key(&name) {
            seen.insert(name.clone(), proxied);
            order.push(name);
        }
    };

    insert(base.to_lowercase(), true, &mut order);
    insert(reserved_hostname(base), false, &mut order);
    for hostname in extracted {
        let hostname = hostname.to_lowercase();
        if hostname == reserved_hostname(base) {
            continue;
        }
        let proxied = should_proxy(&hostname, base);
        insert(hostname, proxied, &mut order);
    }

    order.into_iter().map(|name| DesiredRecord { proxied: seen[&name], name }).collect()
}

/// Run one full convergence pass against `provider`.
pub async fn run_full_pass(
    provider: &dyn DnsProvider,
    base: &str,
    extracted: &[String],
    external_ip: &str,
) -> Result<ReconcileReport> {
    let zone_id = provider.zone_id(base).await?;
    let existing = provider.list_records(&zone_id).await?;
    let desired = desired_records(base, extracted);

    let mut failures = Vec::new();
    let mut processed: Vec<&str> = Vec::new();

    for record in &desired {
        processed.push(&record.name);
        match existing.iter().find(|r| r.name == record.name) {
            Some(found) if found.content == external_ip && found.proxied == record.proxied => {}
            Some(found) => {
                info!(hostname = %record.name, ip = external_ip, proxied = record.proxied, "updating DNS record");
                if let Err(err) =
                    provider.update_record(&zone_id, &found.id, &record.name, external_ip, record.proxied).await
                {
                    error!(hostname = %record.name, error = %err, "failed to update DNS record");
                    failures.push(format!("update {}: {err}", record.name));
                }
            }
            None => {
                info!(hostname = %record.name, ip = external_ip, proxied = record.proxied, "creating DNS record");
                if let Err(err) = provider.create_record(&zone_id, &record.name, external_ip, record.proxied).await {
                    error!(hostname = %record.name, error = %err, "failed to create DNS record");
                    failures.push(format!("create {}: {err}", record.name));
                }
            }
        }
    }

    // Pruning guard: never delete anything if the source yielded no
    // hostnames at all, to avoid wiping the zone on a transient parse
    // failure (spec §4.3 step 6).
    if !extracted.is_empty() {
        let suffix = format!(".{}", base.to_lowercase());
        for record in &existing {
            let orphaned = record.name.ends_with(&suffix) && !processed.contains(&record.name.as_str());
            if orphaned {
                info!(hostname = %record.name, "removing orphaned DNS record");
                if let Err(err) = provider.delete_record(&zone_id, &record.id).await {
                    error!(hostname = %record.name, error = %err, "failed to delete orphaned DNS record");
                    failures.push(format!("delete {}: {err}", record.name));
                }
            }
        }
    }

    let succeeded = failures.is_empty();
    Ok(ReconcileReport { succeeded, failures })
}

#[cfg(test)]
#[path = "convergence_tests.rs"]
mod tests;
