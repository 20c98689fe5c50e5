use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Standard response envelope for all machine-readable outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(meta: EnvelopeMeta, data: T) -> Self {
        Self { meta, data }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeMeta {
    pub generated_at: String,
    pub latency_ms: u64,
    pub cache_hit: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(latency_ms: u64, cache_hit: bool) -> Self {
        Self {
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .expect("UTC now must be RFC3339 formattable"),
            latency_ms,
            cache_hit,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_warnings_are_omitted_from_json() {
        let meta = EnvelopeMeta::new(3, true);
        let value = serde_json::to_value(Envelope::new(meta, 1u32)).expect("serialize");

        assert_eq!(value["meta"]["cache_hit"], true);
        assert!(value["meta"].get("warnings").is_none());
    }

    #[test]
    fn warnings_serialize_in_order() {
        let mut meta = EnvelopeMeta::new(0, false);
        meta.push_warning("first");
        meta.push_warning("second");

        let value = serde_json::to_value(Envelope::new(meta, ())).expect("serialize");
        assert_eq!(value["meta"]["warnings"][0], "first");
        assert_eq!(value["meta"]["warnings"][1], "second");
    }
}
