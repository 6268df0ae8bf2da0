//! Opções de busca produzidas pelos providers.
//!
//! O cache trata cada opção como opaca: só interessa saber se ela
//! expõe a capacidade de ser liberada ([`Disposable`]).

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::TopHitResult;

/// Conjunto de opções calculado por um provider.
///
/// Uma vez publicado no cache, o conjunto nunca é alterado; todos os
/// chamadores recebem clones do mesmo `Arc`.
pub type OptionSet = Arc<Vec<Arc<dyn SearchOption>>>;

/// Capacidade de liberar recursos presos a uma opção.
pub trait Disposable: Send + Sync {
    /// Libera os recursos. O cache chama isto no máximo uma vez por opção.
    fn dispose(&self) -> TopHitResult<()>;
}

/// Uma opção de busca (entrada de um [`OptionSet`]).
pub trait SearchOption: Send + Sync + fmt::Debug {
    /// Descrição exibida e pesquisada.
    fn description(&self) -> &OptionDescription;

    /// Retorna a capacidade de liberação, se a opção tiver uma.
    fn as_disposable(&self) -> Option<&dyn Disposable> {
        None
    }
}

/// Descrição de uma opção de configuração encontrável pela busca.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescription {
    /// Texto pesquisado.
    pub option: String,

    /// Texto exibido no resultado (padrão: o próprio `option`).
    #[serde(default)]
    pub hit: Option<String>,

    /// Caminho da opção nas configurações (ex.: "Editor | Font").
    #[serde(default)]
    pub path: Option<String>,

    /// Identificador da tela de configuração dona da opção.
    #[serde(default)]
    pub configurable_id: Option<String>,

    /// Grupo exibido na lista de resultados.
    #[serde(default)]
    pub group: Option<String>,
}

impl OptionDescription {
    /// Cria uma descrição apenas com o texto pesquisado.
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            hit: None,
            path: None,
            configurable_id: None,
            group: None,
        }
    }

    /// Define o texto exibido.
    pub fn with_hit(mut self, hit: impl Into<String>) -> Self {
        self.hit = Some(hit.into());
        self
    }

    /// Define o caminho nas configurações.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Define a tela de configuração dona.
    pub fn with_configurable_id(mut self, id: impl Into<String>) -> Self {
        self.configurable_id = Some(id.into());
        self
    }

    /// Define o grupo.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Texto exibido.
    pub fn display_text(&self) -> &str {
        self.hit.as_deref().unwrap_or(&self.option)
    }

    /// Verifica se a opção casa com a consulta (sem diferenciar maiúsculas).
    ///
    /// Consulta vazia casa com tudo.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.option.to_lowercase().contains(&query)
            || self
                .hit
                .as_deref()
                .is_some_and(|hit| hit.to_lowercase().contains(&query))
    }
}

impl SearchOption for OptionDescription {
    fn description(&self) -> &OptionDescription {
        self
    }
}

impl fmt::Display for OptionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} ({})", self.display_text(), path),
            None => write!(f, "{}", self.display_text()),
        }
    }
}

/// Contexto de projeto que restringe o cálculo de um provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    base_path: PathBuf,
}

impl Project {
    /// Cria um projeto.
    pub fn new(name: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
        }
    }

    /// Cria um projeto a partir do diretório, usando o nome do diretório.
    pub fn from_dir(base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        let name = base_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_path.display().to_string());
        Self { name, base_path }
    }

    /// Nome do projeto.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diretório base.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Plugin de origem de um provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Identificador do plugin.
    pub id: String,
}

impl PluginDescriptor {
    /// Cria um descritor só com o identificador.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
