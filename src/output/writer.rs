// Tue Jan 13 2026 - Alex

use super::{OutputError, OutputResult};
use crate::config::Config;
use crate::orchestration::ResolutionBatch;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const MAPPING_COLUMNS: [&str; 2] = ["Previous_Name", "New_Name"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub mapping: PathBuf,
    pub resolved: PathBuf,
}

/// Writes the two-column mapping file and the resolved-names list.
pub struct ArtifactWriter {
    output_dir: Option<PathBuf>,
    mapping_prefix: String,
    resolved_prefix: String,
    atomic: bool,
}

impl ArtifactWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            mapping_prefix: config.mapping_prefix.clone(),
            resolved_prefix: config.resolved_prefix.clone(),
            atomic: config.atomic_writes,
        }
    }

    /// `Merged_<input name>` and `New_<input name>`, next to the input unless
    /// an output directory is configured.
    pub fn paths_for(&self, input: &Path) -> ArtifactPaths {
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };

        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        ArtifactPaths {
            mapping: dir.join(format!("{}{}", self.mapping_prefix, file_name)),
            resolved: dir.join(format!("{}{}", self.resolved_prefix, file_name)),
        }
    }

    pub fn write(&self, batch: &ResolutionBatch, paths: &ArtifactPaths) -> OutputResult<()> {
        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir).map_err(|source| OutputError::Io {
                path: dir.clone(),
                source,
            })?;
        }

        self.write_file(&paths.mapping, |file| {
            write_mapping(batch, file).map_err(|source| OutputError::Mapping {
                path: paths.mapping.clone(),
                source,
            })
        })?;
        self.write_file(&paths.resolved, |file| {
            write_resolved(batch, file).map_err(|source| OutputError::Io {
                path: paths.resolved.clone(),
                source,
            })
        })?;

        info!(
            "Wrote {} rows to {} and {}",
            batch.len(),
            paths.mapping.display(),
            paths.resolved.display()
        );
        Ok(())
    }

    /// Creates the target (or a hidden sibling when writes are atomic), lets
    /// `fill` write into it, then renames the sibling into place.
    fn write_file<F>(&self, path: &Path, fill: F) -> OutputResult<()>
    where
        F: FnOnce(File) -> OutputResult<()>,
    {
        let io_error = |source: io::Error| OutputError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !self.atomic {
            return fill(File::create(path).map_err(io_error)?);
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

        debug!("Writing {} via {}", path.display(), temp_path.display());
        let written = File::create(&temp_path)
            .map_err(io_error)
            .and_then(fill)
            .and_then(|_| fs::rename(&temp_path, path).map_err(io_error));

        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written
    }
}

/// Tab-separated, header first. Fields holding a tab, quote or line break are
/// quoted by the csv writer; everything else is written as is.
pub fn write_mapping<W: Write>(batch: &ResolutionBatch, out: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);

    writer.write_record(MAPPING_COLUMNS)?;
    for (raw, resolved) in batch.mapping() {
        writer.write_record([raw.as_str(), resolved.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_resolved<W: Write>(batch: &ResolutionBatch, out: W) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for name in batch.resolved_names() {
        writeln!(out, "{}", name)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::RawName;
    use crate::orchestration::ResolutionPipeline;
    use crate::resolver::OfflineResolver;
    use std::sync::Arc;

    #[test]
    fn test_paths_next_to_input() {
        let writer = ArtifactWriter::new(&Config::default());
        let paths = writer.paths_for(Path::new("/data/run1/species.txt"));
        assert_eq!(paths.mapping, PathBuf::from("/data/run1/Merged_species.txt"));
        assert_eq!(paths.resolved, PathBuf::from("/data/run1/New_species.txt"));
    }

    #[test]
    fn test_paths_for_bare_file_name() {
        let writer = ArtifactWriter::new(&Config::default());
        let paths = writer.paths_for(Path::new("species.txt"));
        assert_eq!(paths.mapping, PathBuf::from("./Merged_species.txt"));
    }

    #[test]
    fn test_paths_in_output_dir() {
        let writer = ArtifactWriter::new(&Config::default().with_output_dir(PathBuf::from("/tmp/out")));
        let paths = writer.paths_for(Path::new("/data/species.txt"));
        assert_eq!(paths.resolved, PathBuf::from("/tmp/out/New_species.txt"));
    }

    fn render(batch: &ResolutionBatch) -> (String, String) {
        let mut mapping = Vec::new();
        write_mapping(batch, &mut mapping).unwrap();
        let mut resolved = Vec::new();
        write_resolved(batch, &mut resolved).unwrap();
        (String::from_utf8(mapping).unwrap(), String::from_utf8(resolved).unwrap())
    }

    fn batch_of(names: &[&str]) -> ResolutionBatch {
        let input: Vec<RawName> = names.iter().filter_map(|n| RawName::new(*n)).collect();
        ResolutionPipeline::new(&Config::default().with_workers(1), Arc::new(OfflineResolver))
            .run(&input)
            .unwrap()
    }

    #[test]
    fn test_empty_batch_renders_header_only() {
        let (mapping, resolved) = render(&ResolutionBatch::default());
        assert_eq!(mapping, "Previous_Name\tNew_Name\n");
        assert_eq!(resolved, "");
    }

    #[test]
    fn test_mapping_quotes_only_when_needed() {
        let (mapping, resolved) = render(&batch_of(&["Homo sapiens", "say \"hi\"", "a\tb"]));
        let rows: Vec<&str> = mapping.lines().collect();

        assert_eq!(rows[1], "Homo sapiens\tHomo_sapiens");
        assert_eq!(rows[2], "\"say \"\"hi\"\"\"\t\"say_\"\"hi\"\"\"");
        assert_eq!(rows[3], "\"a\tb\"\t\"a\tb\"");
        assert_eq!(resolved.lines().count(), 3);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(&Config::default());
        let paths = writer.paths_for(&dir.path().join("species.txt"));

        writer.write(&ResolutionBatch::default(), &paths).unwrap();

        assert!(paths.mapping.exists());
        assert!(paths.resolved.exists());
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(&Config::default().with_atomic_writes(false));
        let paths = writer.paths_for(&dir.path().join("nope").join("species.txt"));

        let err = writer.write(&ResolutionBatch::default(), &paths).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
