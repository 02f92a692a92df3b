use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider name -> arbitrary info object, in server order
pub type ResourceMap = Map<String, Value>;

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Inventory of one cloud provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloudResource {
    pub provider: String,
    /// Usually a list; any other value the server sent is kept as is
    #[serde(default = "empty_list")]
    pub vms: Value,
    #[serde(default = "empty_list")]
    pub buckets: Value,
    /// Every other field of the provider's info object (e.g. `error`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CloudResource {
    /// Builds an entry from one `(provider, info)` pair of a resource map.
    ///
    /// `vms`/`buckets` fall back to empty lists only when the key is missing.
    pub fn from_info(provider: &str, info: &Value) -> Self {
        let list = |field: &str| info.get(field).cloned().unwrap_or_else(empty_list);

        let extra = match info {
            Value::Object(fields) => fields
                .iter()
                .filter(|(k, _)| !matches!(k.as_str(), "provider" | "vms" | "buckets"))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => Map::new(),
        };

        Self {
            provider: provider.to_string(),
            vms: list("vms"),
            buckets: list("buckets"),
            extra,
        }
    }

    /// Object as displayed in the tree: `provider`, `vms`, `buckets`,
    /// then the remaining fields in source order.
    pub fn to_tree_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("provider".into(), Value::String(self.provider.clone()));
        map.insert("vms".into(), self.vms.clone());
        map.insert("buckets".into(), self.buckets.clone());
        for (k, v) in &self.extra {
            map.insert(k.clone(), v.clone());
        }
        map
    }
}

/// One entry per provider key, in response order.
pub fn normalize_resources(map: &ResourceMap) -> Vec<CloudResource> {
    map.iter()
        .map(|(provider, info)| CloudResource::from_info(provider, info))
        .collect()
}
