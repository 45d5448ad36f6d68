// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provider-agnostic DNS boundary. The convergence algorithm in
//! [`crate::convergence`] is written entirely against this trait so a
//! Cloudflare-backed implementation (`crate::cloudflare::CloudflareProvider`)
//! and a test fake both satisfy it, the same way `oj_adapters`'s traits
//! abstract external model runtimes.

use async_trait::async_trait;

use crate::error::Result;

/// A single A-record as observed from (or sent to) the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    pub content: String,
    pub proxied: bool,
}

#[async_trait]
pub trait DnsProvider: Send + Sync + 'static {
    /// Resolve the zone id backing `domain`.
    async fn zone_id(&self, domain: &str) -> Result<String>;

    /// List every A-record in the given zone.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>>;

    async fn create_record(&self, zone_id: &str, name: &str, ip: &str, proxied: bool) -> Result<()>;

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        name: &str,
        ip: &str,
        proxied: bool,
    ) -> Result<()>;

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()>;
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDnsProvider;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    /// In-memory `DnsProvider` for tests. Records a call log so convergence
    /// tests can assert which create/update/delete operations were issued.
    #[derive(Default, Clone)]
    pub struct FakeDnsProvider {
        zone_id: String,
        records: Arc<Mutex<Vec<DnsRecord>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeDnsProvider {
        pub fn new(zone_id: impl Into<String>, records: Vec<DnsRecord>) -> Self {
            Self { zone_id: zone_id.into(), records: Arc::new(Mutex::new(records)), calls: Arc::new(Mutex::new(Vec::new())) }
        }

        pub fn records(&self) -> Vec<DnsRecord> {
            self.records.lock().clone()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl DnsProvider for FakeDnsProvider {
        async fn zone_id(&self, _domain: &str) -> Result<String> {
            Ok(self.zone_id.clone())
        }

        async fn list_records(&self, _zone_id: &str) -> Result<Vec<DnsRecord>> {
            Ok(self.records.lock().clone())
        }

        async fn create_record(&self, _zone_id: &str, name: &str, ip: &str, proxied: bool) -> Result<()> {
            self.calls.lock().push(format!("create {name} {ip} proxied={proxied}"));
            let id = format!("rec-{}", self.records.lock().len());
            self.records.lock().push(DnsRecord { id, name: name.to_string(), content: ip.to_string(), proxied });
            Ok(())
        }

        async fn update_record(
            &self,
            _zone_id: &str,
            record_id: &str,
            name: &str,
            ip: &str,
            proxied: bool,
        ) -> Result<()> {
            self.calls.lock().push(format!("update {name} {ip} proxied={proxied}"));
            let mut records = self.records.lock();
            if let Some(record) = records.iter_mut().find(|r| r.id == record_id) {
                record.content = ip.to_string();
                record.proxied = proxied;
            }
            Ok(())
        }

        async fn delete_record(&self, _zone_id: &str, record_id: &str) -> Result<()> {
            self.calls.lock().push(format!("delete {record_id}"));
            self.records.lock().retain(|r| r.id != record_id);
            Ok(())
        }
    }
}
