//! Aggregation document builder.

use serde_yaml::Value;

use crate::document::error::{DocumentError, DocumentResult};
use crate::document::schema::{ClashDocument, ProxyGroup, ProxyList};
use crate::subscription::{FieldMap, ProxyRecord};

/// Accumulates proxies from every source into one document.
///
/// Each proxy is appended to `proxies` and its name to the first proxy
/// group, in ingestion order. Names are trimmed but never deduplicated.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: ClashDocument,
}

impl DocumentBuilder {
    /// Start from `template`, discarding its proxies and groups in favour of
    /// a single empty group.
    pub fn new(template: ClashDocument, group_name: &str, group_type: &str) -> Self {
        let mut document = template;
        document.proxies = Vec::new();
        document.proxy_groups = vec![ProxyGroup {
            name: group_name.to_string(),
            kind: group_type.to_string(),
            proxies: Vec::new(),
        }];
        Self { document }
    }

    /// Append field maps as-is, apart from trimming their names.
    ///
    /// Either every entry is added or none is.
    pub fn add_proxies(&mut self, proxies: Vec<FieldMap>) -> DocumentResult<usize> {
        let names = proxies
            .iter()
            .enumerate()
            .map(|(index, proxy)| {
                proxy
                    .get("name")
                    .and_then(Value::as_str)
                    .map(|name| name.trim().to_string())
                    .ok_or(DocumentError::MissingName { index })
            })
            .collect::<DocumentResult<Vec<_>>>()?;

        let added = proxies.len();
        for (mut proxy, name) in proxies.into_iter().zip(names) {
            proxy.insert(Value::from("name"), Value::from(name.as_str()));
            self.document.proxies.push(proxy);
            self.group_mut().proxies.push(name);
        }
        Ok(added)
    }

    /// Normalize decoded records and append them.
    pub fn add_records(&mut self, records: &[ProxyRecord]) -> DocumentResult<usize> {
        self.add_proxies(records.iter().map(ProxyRecord::to_field_map).collect())
    }

    /// Parse a `{proxies: [...]}` document and append its entries.
    pub fn add_yaml(&mut self, data: &str) -> DocumentResult<usize> {
        let list: ProxyList = serde_yaml::from_str(data)?;
        self.add_proxies(list.proxies)
    }

    pub fn proxy_count(&self) -> usize {
        self.document.proxies.len()
    }

    /// Member names of the proxy group, in ingestion order.
    pub fn group_members(&self) -> &[String] {
        &self.document.proxy_groups[0].proxies
    }

    pub fn document(&self) -> &ClashDocument {
        &self.document
    }

    /// Finish building. The returned document is not modified afterwards.
    pub fn finish(self) -> ClashDocument {
        self.document
    }

    fn group_mut(&mut self) -> &mut ProxyGroup {
        &mut self.document.proxy_groups[0]
    }
}
