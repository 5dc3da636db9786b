// file: src/exporter/json.rs
// description: json export of the documents collected by a query run

use crate::config::FetchOrder;
use crate::controller::FetchStats;
use crate::error::{Result, SearchError};
use crate::models::DocumentText;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct QueryExport {
    pub run_id: Uuid,
    pub query: String,
    pub exported_at: String,
    pub order: FetchOrder,
    pub stats: FetchStats,
    pub total_documents: usize,
    pub documents: Vec<DocumentText>,
}

impl QueryExport {
    pub fn new(
        query: impl Into<String>,
        order: FetchOrder,
        stats: FetchStats,
        documents: Vec<DocumentText>,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            query: query.into(),
            exported_at: Utc::now().to_rfc3339(),
            order,
            stats,
            total_documents: documents.len(),
            documents,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, export: &QueryExport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(export)
        } else {
            serde_json::to_string(export)
        };
        rendered.map_err(|e| SearchError::Serialization(e.to_string()))
    }

    pub fn write_to(&self, export: &QueryExport, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.render(export)?)?;

        info!(
            "Exported {} documents to {}",
            export.total_documents,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample_export() -> QueryExport {
        QueryExport::new(
            "cats",
            FetchOrder::Query,
            FetchStats {
                requested: 2,
                appended: 1,
                failed: 1,
                duration_ms: 12,
            },
            vec![DocumentText::new("d1", "hello")],
        )
    }

    #[test]
    fn test_render_compact() {
        let rendered = JsonExporter::new(false).render(&sample_export()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["query"], "cats");
        assert_eq!(value["order"], "query");
        assert_eq!(value["total_documents"], 1);
        assert_eq!(value["stats"]["failed"], 1);
        assert_eq!(value["documents"][0]["text"], "hello");
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exports/cats.json");

        JsonExporter::new(true)
            .write_to(&sample_export(), &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"document_id\": \"d1\""));
    }
}
