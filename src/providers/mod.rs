//! Providers de opções top-hit.
//!
//! Um provider descreve a lógica que calcula um [`OptionSet`]. O cache não
//! implementa nenhuma variante; ele apenas despacha pelo [`OptionSource`]
//! que o provider expõe:
//!
//! - `Application`: cálculo global, sem projeto
//! - `Project`: cálculo restrito a um projeto
//! - `Combined`: variante legada que aceita projeto opcional

mod builtin;

pub use builtin::{ConfiguredOptionsProvider, ProjectFilesProvider};

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::types::options::{OptionSet, Project, SearchOption};
use crate::TopHitResult;

/// Lista de opções devolvida por um provider antes de ser publicada.
pub type OptionList = Vec<Arc<dyn SearchOption>>;

// ═══════════════════════════════════════════════════════════════════════════
// Chave do provider
// ═══════════════════════════════════════════════════════════════════════════

/// Identidade da lógica de cálculo, usada como chave do cache.
///
/// Derivada do tipo do provider: instâncias diferentes do mesmo tipo
/// compartilham a mesma chave.
#[derive(Clone, Copy)]
pub struct ProviderKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl ProviderKey {
    /// Chave do tipo `P`.
    pub fn of<P: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<P>(),
            type_name: std::any::type_name::<P>(),
        }
    }

    /// Nome completo do tipo.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Nome curto do tipo (sem o caminho do módulo).
    pub fn short_name(&self) -> &'static str {
        let base = self.type_name.split('<').next().unwrap_or(self.type_name);
        let start = base.rfind("::").map(|i| i + 2).unwrap_or(0);
        &self.type_name[start..]
    }
}

impl PartialEq for ProviderKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ProviderKey {}

impl std::hash::Hash for ProviderKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderKey").field(&self.type_name).finish()
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Variantes de cálculo
// ═══════════════════════════════════════════════════════════════════════════

/// Provider global (não depende de projeto).
pub trait ApplicationLevelProvider: Send + Sync {
    /// Calcula as opções.
    fn options(&self) -> TopHitResult<OptionList>;
}

/// Provider que exige um projeto.
pub trait ProjectLevelProvider: Send + Sync {
    /// Calcula as opções para o projeto.
    fn options(&self, project: &Project) -> TopHitResult<OptionList>;
}

/// Provider legado que aceita projeto opcional.
pub trait CombinedProvider: Send + Sync {
    /// Calcula as opções, com ou sem projeto.
    fn options(&self, project: Option<&Project>) -> TopHitResult<OptionList>;
}

/// Variante de cálculo exposta por um provider.
#[derive(Clone, Copy)]
pub enum OptionSource<'a> {
    /// Cálculo global.
    Application(&'a dyn ApplicationLevelProvider),

    /// Cálculo restrito a projeto.
    Project(&'a dyn ProjectLevelProvider),

    /// Cálculo legado.
    Combined(&'a dyn CombinedProvider),
}

impl<'a> OptionSource<'a> {
    /// Nome da variante (para logs).
    pub fn kind(&self) -> &'static str {
        match self {
            OptionSource::Application(_) => "application",
            OptionSource::Project(_) => "project",
            OptionSource::Combined(_) => "combined",
        }
    }

    /// Executa o cálculo com o escopo informado.
    ///
    /// Falha com [`TopHitError::ProjectRequired`](crate::TopHitError::ProjectRequired)
    /// quando a variante `Project` é chamada sem projeto.
    pub fn compute(&self, key: &ProviderKey, project: Option<&Project>) -> TopHitResult<OptionSet> {
        let options = match (*self, project) {
            (OptionSource::Application(provider), _) => provider.options()?,
            (OptionSource::Project(provider), Some(project)) => provider.options(project)?,
            (OptionSource::Project(_), None) => {
                return Err(crate::TopHitError::ProjectRequired(
                    key.short_name().to_string(),
                ))
            }
            (OptionSource::Combined(provider), project) => provider.options(project)?,
        };
        Ok(Arc::new(options))
    }
}

/// Trait implementada por todo provider de opções top-hit.
pub trait TopHitProvider: Send + Sync + 'static {
    /// Identificador usado na busca (ex.: "editor", "files").
    fn id(&self) -> &str;

    /// Variante de cálculo deste provider.
    fn source(&self) -> OptionSource<'_>;

    /// Chave do cache, derivada do tipo concreto (também via `dyn`).
    ///
    /// Adaptadores que envolvem outro provider devem delegar este método.
    fn key(&self) -> ProviderKey {
        ProviderKey::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::options::OptionDescription;
    use crate::TopHitError;

    struct Global;

    impl ApplicationLevelProvider for Global {
        fn options(&self) -> TopHitResult<OptionList> {
            Ok(vec![Arc::new(OptionDescription::new("global"))])
        }
    }

    impl TopHitProvider for Global {
        fn id(&self) -> &str {
            "global"
        }

        fn source(&self) -> OptionSource<'_> {
            OptionSource::Application(self)
        }
    }

    struct Scoped;

    impl ProjectLevelProvider for Scoped {
        fn options(&self, project: &Project) -> TopHitResult<OptionList> {
            Ok(vec![Arc::new(OptionDescription::new(project.name()))])
        }
    }

    impl TopHitProvider for Scoped {
        fn id(&self) -> &str {
            "scoped"
        }

        fn source(&self) -> OptionSource<'_> {
            OptionSource::Project(self)
        }
    }

    struct Legacy;

    impl CombinedProvider for Legacy {
        fn options(&self, project: Option<&Project>) -> TopHitResult<OptionList> {
            let name = project.map(|p| p.name()).unwrap_or("none");
            Ok(vec![Arc::new(OptionDescription::new(name))])
        }
    }

    impl TopHitProvider for Legacy {
        fn id(&self) -> &str {
            "legacy"
        }

        fn source(&self) -> OptionSource<'_> {
            OptionSource::Combined(self)
        }
    }

    fn first_option(set: &OptionSet) -> String {
        set[0].description().option.clone()
    }

    #[test]
    fn test_key_is_per_type() {
        assert_eq!(ProviderKey::of::<Global>(), ProviderKey::of::<Global>());
        assert_ne!(ProviderKey::of::<Global>(), ProviderKey::of::<Scoped>());
    }

    #[test]
    fn test_key_short_name() {
        let key = ProviderKey::of::<Global>();
        assert_eq!(key.short_name(), "Global");
        assert!(key.type_name().ends_with("::Global"));
        assert_eq!(key.to_string(), "Global");
    }

    #[test]
    fn test_key_through_trait_object() {
        let providers: Vec<Box<dyn TopHitProvider>> = vec![Box::new(Global), Box::new(Scoped)];

        assert_eq!(providers[0].key(), ProviderKey::of::<Global>());
        assert_eq!(providers[1].key(), ProviderKey::of::<Scoped>());
    }

    #[test]
    fn test_application_ignores_project() {
        let key = ProviderKey::of::<Global>();
        let project = Project::new("demo", "/tmp/demo");

        let set = Global.source().compute(&key, Some(&project)).unwrap();
        assert_eq!(first_option(&set), "global");
        assert_eq!(Global.source().kind(), "application");
    }

    #[test]
    fn test_project_variant_uses_project() {
        let key = ProviderKey::of::<Scoped>();
        let project = Project::new("demo", "/tmp/demo");

        let set = Scoped.source().compute(&key, Some(&project)).unwrap();
        assert_eq!(first_option(&set), "demo");
    }

    #[test]
    fn test_project_variant_without_project_fails() {
        let key = ProviderKey::of::<Scoped>();
        let err = Scoped.source().compute(&key, None).unwrap_err();
        assert!(matches!(err, TopHitError::ProjectRequired(ref name) if name == "Scoped"));
    }

    #[test]
    fn test_combined_variant_accepts_both() {
        let key = ProviderKey::of::<Legacy>();
        let project = Project::new("demo", "/tmp/demo");

        let with = Legacy.source().compute(&key, Some(&project)).unwrap();
        let without = Legacy.source().compute(&key, None).unwrap();
        assert_eq!(first_option(&with), "demo");
        assert_eq!(first_option(&without), "none");
    }
}
