// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `DnsProvider` implementation over the Cloudflare v4 REST API, grounded
//! 1:1 on `sync_cloudflare.py`'s `get_zone_id`/`get_existing_records`/
//! `create_dns_record`/`update_dns_record`/`delete_dns_record`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ReconcileError, Result};
use crate::provider::{DnsProvider, DnsRecord};

const API_BASE: &str = "https://api.cloudflare.com/client/v4";

pub struct CloudflareProvider {
    http: reqwest::Client,
    api_token: String,
}

impl CloudflareProvider {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), api_token: api_token.into() }
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http.request(method, url).bearer_auth(&self.api_token)
    }

    fn first_error(envelope: &CfEnvelope<serde_json::Value>) -> String {
        envelope
            .errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "unknown error".to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CfEnvelope<T> {
    success: bool,
    result: T,
    #[serde(default)]
    errors: Vec<CfError>,
}

#[derive(Debug, Deserialize)]
struct CfError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CfZone {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CfRecord {
    id: String,
    #[serde(rename = "type")]
    record_type: String,
    name: String,
    content: String,
    #[serde(default = "default_proxied")]
    proxied: bool,
}

fn default_proxied() -> bool {
    true
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    async fn zone_id(&self, domain: &str) -> Result<String> {
        let url = format!("{API_BASE}/zones?name={domain}");
        let envelope: CfEnvelope<Vec<CfZone>> = self.request(reqwest::Method::GET, &url).send().await?.json().await?;

        if !envelope.success {
            let message = envelope
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ReconcileError::Provider(format!("failed to get zone ID: {message}")));
        }
        envelope.result.into_iter().next().map(|z| z.id).ok_or_else(|| ReconcileError::ZoneNotFound(domain.to_string()))
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>> {
        let url = format!("{API_BASE}/zones/{zone_id}/dns_records");
        let envelope: CfEnvelope<Vec<CfRecord>> =
            self.request(reqwest::Method::GET, &url).send().await?.json().await?;

        if !envelope.success {
            let message = envelope
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ReconcileError::Provider(format!("failed to get existing DNS records: {message}")));
        }

        Ok(envelope
            .result
            .into_iter()
            .filter(|r| r.record_type == "A")
            .map(|r| DnsRecord { id: r.id, name: r.name, content: r.content, proxied: r.proxied })
            .collect())
    }

    async fn create_record(&self, zone_id: &str, name: &str, ip: &str, proxied: bool) -> Result<()> {
        let url = format!("{API_BASE}/zones/{zone_id}/dns_records");
        let body = json!({ "type": "A", "name": name, "content": ip, "ttl": 1, "proxied": proxied });
        let envelope: CfEnvelope<serde_json::Value> =
            self.request(reqwest::Method::POST, &url).json(&body).send().await?.json().await?;
        if !envelope.success {
            return Err(ReconcileError::Provider(format!(
                "failed to create record for {name}: {}",
                Self::first_error(&envelope)
            )));
        }
        Ok(())
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        name: &str,
        ip: &str,
        proxied: bool,
    ) -> Result<()> {
        let url = format!("{API_BASE}/zones/{zone_id}/dns_records/{record_id}");
        let body = json!({ "type": "A", "name": name, "content": ip, "ttl": 1, "proxied": proxied });
        let envelope: CfEnvelope<serde_json::Value> =
            self.request(reqwest::Method::PUT, &url).json(&body).send().await?.json().await?;
        if !envelope.success {
            return Err(ReconcileError::Provider(format!(
                "failed to update record for {name}: {}",
                Self::first_error(&envelope)
            )));
        }
        Ok(())
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        let url = format!("{API_BASE}/zones/{zone_id}/dns_records/{record_id}");
        let envelope: CfEnvelope<serde_json::Value> =
            self.request(reqwest::Method::DELETE, &url).send().await?.json().await?;
        if !envelope.success {
            return Err(ReconcileError::Provider(format!(
                "failed to delete record {record_id}: {}",
                Self::first_error(&envelope)
            )));
        }
        Ok(())
    }
}
