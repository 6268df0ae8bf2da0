//! Providers padrão do TopHit.
//!
//! - `ConfiguredOptionsProvider`: opções declaradas no `tophit.toml`
//! - `ProjectFilesProvider`: uma opção por entrada no diretório do projeto

use std::sync::Arc;

use crate::types::options::{OptionDescription, Project, SearchOption};
use crate::{TopHitError, TopHitResult};

use super::{ApplicationLevelProvider, OptionList, OptionSource, ProjectLevelProvider, TopHitProvider};

// ═══════════════════════════════════════════════════════════════════════════
// ConfiguredOptionsProvider
// ═══════════════════════════════════════════════════════════════════════════

/// Provider global que serve as opções da configuração.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredOptionsProvider {
    options: Vec<OptionDescription>,
}

impl ConfiguredOptionsProvider {
    /// Cria o provider com as opções informadas.
    pub fn new(options: Vec<OptionDescription>) -> Self {
        Self { options }
    }
}

impl ApplicationLevelProvider for ConfiguredOptionsProvider {
    fn options(&self) -> TopHitResult<OptionList> {
        Ok(self
            .options
            .iter()
            .cloned()
            .map(|o| Arc::new(o) as Arc<dyn SearchOption>)
            .collect())
    }
}

impl TopHitProvider for ConfiguredOptionsProvider {
    fn id(&self) -> &str {
        "settings"
    }

    fn source(&self) -> OptionSource<'_> {
        OptionSource::Application(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ProjectFilesProvider
// ═══════════════════════════════════════════════════════════════════════════

/// Provider de projeto que lista as entradas do diretório base.
///
/// Entradas ocultas (começando com `.`) são ignoradas.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilesProvider;

impl ProjectLevelProvider for ProjectFilesProvider {
    fn options(&self, project: &Project) -> TopHitResult<OptionList> {
        let entries = std::fs::read_dir(project.base_path())
            .map_err(|e| TopHitError::provider("files", e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TopHitError::provider("files", e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            names.push((name, is_dir));
        }
        names.sort();

        tracing::debug!(
            project = project.name(),
            entries = names.len(),
            "Listed project files"
        );

        Ok(names
            .into_iter()
            .map(|(name, is_dir)| {
                let group = if is_dir { "Directories" } else { "Files" };
                Arc::new(
                    OptionDescription::new(name.clone())
                        .with_path(format!("{} | {}", project.name(), name))
                        .with_group(group),
                ) as Arc<dyn SearchOption>
            })
            .collect())
    }
}

impl TopHitProvider for ProjectFilesProvider {
    fn id(&self) -> &str {
        "files"
    }

    fn source(&self) -> OptionSource<'_> {
        OptionSource::Project(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderKey;

    #[test]
    fn test_configured_options() {
        let provider = ConfiguredOptionsProvider::new(vec![
            OptionDescription::new("a"),
            OptionDescription::new("b"),
        ]);

        let options = ApplicationLevelProvider::options(&provider).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].description().option, "b");
        assert_eq!(provider.id(), "settings");
    }

    #[test]
    fn test_project_files_lists_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "").unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();

        let project = Project::new("demo", dir.path());
        let options = ProjectLevelProvider::options(&ProjectFilesProvider, &project).unwrap();

        let names: Vec<_> = options
            .iter()
            .map(|o| o.description().option.as_str())
            .collect();
        assert_eq!(names, vec!["Cargo.toml", "src"]);
        assert_eq!(options[1].description().group.as_deref(), Some("Directories"));
        assert_eq!(options[0].description().path.as_deref(), Some("demo | Cargo.toml"));
    }

    #[test]
    fn test_project_files_missing_dir() {
        let project = Project::new("ghost", "/definitely/not/here");
        let err = ProjectLevelProvider::options(&ProjectFilesProvider, &project).unwrap_err();
        assert!(matches!(err, TopHitError::Provider { .. }));
    }

    #[test]
    fn test_project_files_requires_project() {
        let key = ProviderKey::of::<ProjectFilesProvider>();
        let err = ProjectFilesProvider.source().compute(&key, None).unwrap_err();
        assert!(matches!(err, TopHitError::ProjectRequired(_)));
    }
}
