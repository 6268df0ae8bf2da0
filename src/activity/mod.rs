//! Registro de atividades (instrumentação).
//!
//! Cada cálculo de provider feito pelo cache gera uma atividade com o
//! instante de início, a chave do provider, a categoria e o plugin de
//! origem. Falhas do registrador nunca afetam o cache.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::providers::ProviderKey;
use crate::TopHitResult;

/// Categoria de uma atividade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    /// Cálculo global (sem projeto).
    AppOptionsTopHitProvider,

    /// Cálculo com projeto.
    ProjectOptionsTopHitProvider,
}

impl ActivityCategory {
    /// Categoria correspondente à presença de um projeto.
    pub fn for_scope(has_project: bool) -> Self {
        if has_project {
            ActivityCategory::ProjectOptionsTopHitProvider
        } else {
            ActivityCategory::AppOptionsTopHitProvider
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityCategory::AppOptionsTopHitProvider => write!(f, "app_options_top_hit_provider"),
            ActivityCategory::ProjectOptionsTopHitProvider => {
                write!(f, "project_options_top_hit_provider")
            }
        }
    }
}

/// Atividade concluída.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Provider que foi calculado.
    pub provider: String,

    /// Categoria.
    pub category: ActivityCategory,

    /// Plugin de origem, se conhecido.
    pub plugin_id: Option<String>,

    /// Duração do cálculo em milissegundos.
    pub duration_ms: u64,

    /// Momento em que foi registrada.
    pub finished_at: DateTime<Utc>,
}

/// Destino das atividades concluídas.
pub trait ActivityRecorder: Send + Sync {
    /// Registra uma atividade iniciada em `start` e concluída agora.
    fn add_completed_activity(
        &self,
        start: Instant,
        key: &ProviderKey,
        category: ActivityCategory,
        plugin_id: Option<&str>,
    ) -> TopHitResult<()>;
}

/// Registrador que descarta tudo.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl ActivityRecorder for NoopRecorder {
    fn add_completed_activity(
        &self,
        _start: Instant,
        _key: &ProviderKey,
        _category: ActivityCategory,
        _plugin_id: Option<&str>,
    ) -> TopHitResult<()> {
        Ok(())
    }
}

/// Registrador em memória que também emite um evento de log.
#[derive(Debug, Default)]
pub struct ActivityLog {
    activities: Mutex<Vec<Activity>>,
}

impl ActivityLog {
    /// Cria um registro vazio.
    pub fn new() -> Self {
        Self::default()
    }

    // Um registro envenenado continua válido: cada push é atômico.
    fn entries(&self) -> MutexGuard<'_, Vec<Activity>> {
        self.activities.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cópia das atividades registradas.
    pub fn activities(&self) -> Vec<Activity> {
        self.entries().to_vec()
    }

    /// Número de atividades registradas.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Verifica se não há atividades.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Soma das durações registradas.
    pub fn total_duration(&self) -> Duration {
        self.entries()
            .iter()
            .map(|a| Duration::from_millis(a.duration_ms))
            .sum()
    }
}

impl ActivityRecorder for ActivityLog {
    fn add_completed_activity(
        &self,
        start: Instant,
        key: &ProviderKey,
        category: ActivityCategory,
        plugin_id: Option<&str>,
    ) -> TopHitResult<()> {
        let duration = start.elapsed();
        let activity = Activity {
            provider: key.short_name().to_string(),
            category,
            plugin_id: plugin_id.map(str::to_string),
            duration_ms: duration.as_millis() as u64,
            finished_at: Utc::now(),
        };

        tracing::debug!(
            provider = %activity.provider,
            category = %category,
            plugin = ?activity.plugin_id,
            duration_ms = activity.duration_ms,
            "Activity completed"
        );

        self.entries().push(activity);
        Ok(())
    }
}
