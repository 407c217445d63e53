use {clap::ValueEnum, mongodb::bson::Document};

pub const DEFAULT_DATABASE: &str = "AI-data";
pub const DEFAULT_COLLECTION: &str = "images-and-interpretations";
pub const DEFAULT_FIELD: &str = "str_id";
pub const DEFAULT_VALUE: &str = "679eb3dcf630cd4042fe3cd4";

/// Database and collection a lookup runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTarget {
    pub database: String,
    pub collection: String,
}

impl Default for LookupTarget {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl std::fmt::Display for LookupTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.database, self.collection)
    }
}

/// Single exact-match condition on a string field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub field: String,
    pub value: String,
}

impl QueryFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        filter.insert(self.field.as_str(), self.value.as_str());
        filter
    }
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD, DEFAULT_VALUE)
    }
}

/// How a result document is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty relaxed extended JSON
    #[default]
    Relaxed,
    /// Pretty canonical extended JSON
    Canonical,
    /// Relaxed extended JSON on one line
    Compact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    pub target: LookupTarget,
    pub filter: QueryFilter,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_filter_document_is_exact_string_match() {
        let filter = QueryFilter::default().to_document();

        assert_eq!(filter.len(), 1);
        assert_eq!(
            filter.get("str_id"),
            Some(&Bson::String("679eb3dcf630cd4042fe3cd4".to_string()))
        );
    }

    #[test]
    fn test_filter_value_is_not_coerced_to_object_id() {
        let filter = QueryFilter::new("_id", "679eb3dcf630cd4042fe3cd4").to_document();
        assert!(matches!(filter.get("_id"), Some(Bson::String(_))));
    }

    #[test]
    fn test_target_display() {
        assert_eq!(
            LookupTarget::default().to_string(),
            "AI-data.images-and-interpretations"
        );
    }
}
