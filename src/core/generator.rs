//! Handler file emission.
//!
//! Takes a [`Resolution`] and writes one file per class name from a stub.
//! Configuration is checked and the base type resolved before the first
//! write, so a bad config never leaves a partial set of files behind.

use std::path::{Path, PathBuf};

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::namespace;
use crate::output::{ArtifactOutcome, ArtifactResult, GenerateOutput};
use crate::resolver::Resolution;
use crate::utils::template::{self, TemplateVars};

const DEFAULT_STUB: &str = include_str!("../../stubs/handler.stub");

const FILE_EXTENSION: &str = "php";

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Overwrite files that already exist.
    pub force: bool,
    /// Report what would be written without touching disk.
    pub dry_run: bool,
}

pub struct Generator<'a, F: FileSystem> {
    fs: &'a F,
    project_root: PathBuf,
    defaults: &'a Defaults,
}

impl<'a, F: FileSystem> Generator<'a, F> {
    pub fn new(fs: &'a F, project_root: impl Into<PathBuf>, defaults: &'a Defaults) -> Self {
        Self {
            fs,
            project_root: project_root.into(),
            defaults,
        }
    }

    pub fn generate(
        &self,
        resolution: &Resolution,
        options: GenerateOptions,
    ) -> Result<GenerateOutput> {
        self.defaults.validate()?;
        let base_type = self.defaults.registry().resolve(&self.defaults.base_type)?;
        let stub = self.load_stub()?;

        let mut output =
            GenerateOutput::new(resolution.namespace.clone(), base_type.clone(), options.dry_run);

        for qualified in resolution.qualified_names() {
            let qualified = namespace::qualify(&qualified, &self.defaults.root_namespace);
            let result = self.emit(&qualified, &stub, &base_type, options)?;
            output.push(result);
        }

        Ok(output)
    }

    /// File path for a fully qualified class name.
    pub fn artifact_path(&self, qualified: &str) -> PathBuf {
        let mut path = self.project_root.join(&self.defaults.app_path);
        for segment in namespace::relative_segments(qualified, &self.defaults.root_namespace) {
            path.push(segment);
        }
        path.set_extension(FILE_EXTENSION);
        path
    }

    fn emit(
        &self,
        qualified: &str,
        stub: &str,
        base_type: &str,
        options: GenerateOptions,
    ) -> Result<ArtifactResult> {
        let class_name = namespace::short_name(qualified).to_string();
        let path = self.artifact_path(qualified);
        let exists = self.fs.exists(&path);

        let (outcome, message) = if exists && !options.force {
            (
                ArtifactOutcome::Skipped,
                Some(format!("{} handler already exists!", class_name)),
            )
        } else if options.dry_run {
            (ArtifactOutcome::Planned, None)
        } else {
            self.write(&path, &render(stub, qualified, base_type))?;
            if exists {
                (ArtifactOutcome::Overwritten, None)
            } else {
                (ArtifactOutcome::Created, None)
            }
        };

        match outcome {
            ArtifactOutcome::Skipped => {
                log_status!("make", "{} handler already exists, skipping", class_name)
            }
            ArtifactOutcome::Planned => log_status!("make", "Would write {}", path.display()),
            _ => log_status!("make", "{} handler written to {}", class_name, path.display()),
        }

        Ok(ArtifactResult {
            class_name,
            qualified_name: qualified.to_string(),
            path: path.display().to_string(),
            outcome,
            message,
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.fs.ensure_dir(parent)?;
        }
        self.fs.write(path, content)
    }

    fn load_stub(&self) -> Result<String> {
        let Some(stub_path) = self.defaults.stub_path.as_deref() else {
            return Ok(DEFAULT_STUB.to_string());
        };

        let path = self.project_root.join(stub_path);
        let stub = self.fs.read(&path)?;

        if !template::is_present(&stub, TemplateVars::CLASS) {
            return Err(Error::config_invalid_value(
                "stub_path",
                Some(path.display().to_string()),
                "Stub must contain the {{class}} placeholder",
            ));
        }

        Ok(stub)
    }
}

fn render(stub: &str, qualified: &str, base_type: &str) -> String {
    template::render(
        stub,
        &[
            (TemplateVars::NAMESPACE, namespace::parent(qualified)),
            (TemplateVars::CLASS, namespace::short_name(qualified)),
            (TemplateVars::BASE_TYPE, base_type),
            (TemplateVars::BASE_TYPE_NAME, namespace::short_name(base_type)),
        ],
    )
}
