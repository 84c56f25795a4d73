//! Init command implementation.
//!
//! Generates a `pmap.yaml` manifest from discovered documents.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{PmapError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a pmap project by generating a pmap.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing pmap.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(PmapError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // No manifest yet, so this scans the whole directory
    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    let mut source_dirs = BTreeSet::new();
    for file in &discovery.scan.documents {
        if let Some(parent) = file.parent() {
            let relative = parent.strip_prefix(&discovery.root).unwrap_or(parent);

            let dir_str = if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            };
            source_dirs.insert(dir_str);
        }
    }

    // Build YAML by hand for clean formatting
    let mut yaml = String::new();

    if !(source_dirs.is_empty() || (source_dirs.len() == 1 && source_dirs.contains("."))) {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("output: dist\n");
    yaml.push_str("format: html\n");

    fs::write(&manifest_path, &yaml).map_err(|e| PmapError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "document", "documents")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use tempfile::tempdir;

    fn init_args(path: &Path, force: bool) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            force,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.pmap"), "# Home").unwrap();

        run(init_args(dir.path(), false), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("pmap.yaml")).unwrap();
        assert!(content.contains("output: dist"));
        assert!(!content.contains("sources:"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pmap.yaml"), "output: build").unwrap();

        let result = run(init_args(dir.path(), false), &Printer::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pmap.yaml"), "output: build").unwrap();

        run(init_args(dir.path(), true), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("pmap.yaml")).unwrap();
        assert!(content.contains("output: dist"));
    }

    #[test]
    fn test_init_discovers_source_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guides")).unwrap();
        fs::create_dir_all(dir.path().join("notes")).unwrap();
        fs::write(dir.path().join("guides/setup.pmap"), "# Setup").unwrap();
        fs::write(dir.path().join("notes/today.pmap"), "- milk").unwrap();

        run(init_args(dir.path(), false), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join("pmap.yaml")).unwrap();
        assert!(content.contains("sources:"));
        assert!(content.contains("guides/"));
        assert!(content.contains("notes/"));
    }

    #[test]
    fn test_init_output_is_loadable() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/a.pmap"), "text").unwrap();

        run(init_args(dir.path(), false), &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join("pmap.yaml")).unwrap();
        assert_eq!(manifest.sources, vec!["docs/"]);
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }
}
