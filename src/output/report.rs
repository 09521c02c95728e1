// Tue Jan 13 2026 - Alex

use super::{ArtifactPaths, OutputError, OutputResult};
use crate::orchestration::{BatchStats, ResolutionBatch};
use crate::resolver::ResolutionRecord;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON summary of one run: settings, counts, and every record.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input: PathBuf,
    pub mapping_file: PathBuf,
    pub resolved_file: PathBuf,
    pub resolver: String,
    pub workers: usize,
    pub elapsed_secs: f64,
    pub stats: &'a BatchStats,
    pub records: Vec<&'a ResolutionRecord>,
}

impl<'a> RunReport<'a> {
    pub fn new(
        input: &Path,
        paths: &ArtifactPaths,
        resolver: &str,
        workers: usize,
        elapsed_secs: f64,
        batch: &'a ResolutionBatch,
    ) -> Self {
        Self {
            input: input.to_path_buf(),
            mapping_file: paths.mapping.clone(),
            resolved_file: paths.resolved.clone(),
            resolver: resolver.to_string(),
            workers,
            elapsed_secs,
            stats: batch.stats(),
            records: batch.records().collect(),
        }
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> OutputResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::names::RawName;
    use crate::orchestration::ResolutionPipeline;
    use crate::resolver::OfflineResolver;
    use std::sync::Arc;

    #[test]
    fn test_report_json_shape() {
        let pipeline = ResolutionPipeline::new(&Config::default().with_workers(1), Arc::new(OfflineResolver));
        let input: Vec<RawName> = ["Bad[Name]", "Homo sapiens"].iter().filter_map(|n| RawName::new(*n)).collect();
        let batch = pipeline.run(&input).unwrap();

        let paths = ArtifactPaths {
            mapping: PathBuf::from("Merged_x.txt"),
            resolved: PathBuf::from("New_x.txt"),
        };
        let report = RunReport::new(Path::new("x.txt"), &paths, "offline", 1, 0.5, &batch);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["stats"]["distinct_names"], 2);
        assert_eq!(value["stats"]["fallback_by_kind"]["NotFound"], 2);
        assert_eq!(value["records"][0]["raw"], "Bad[Name]");
        assert_eq!(value["records"][0]["resolved"], "BadName");
        assert_eq!(value["records"][0]["outcome"]["status"], "fallback");
        assert_eq!(value["records"][0]["outcome"]["reason"], "NotFound");
        assert_eq!(value["records"][1]["resolved"], "Homo_sapiens");
    }
}
