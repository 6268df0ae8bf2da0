//! Cache de opções top-hit por provider.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::activity::{ActivityCategory, ActivityRecorder, NoopRecorder};
use crate::providers::{ProviderKey, TopHitProvider};
use crate::types::config::CacheConfig;
use crate::types::options::{OptionSet, PluginDescriptor, Project};
use crate::TopHitResult;

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número atual de providers em cache.
    pub size: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,

    /// Cálculos concluídos com sucesso.
    pub computations: u64,

    /// Cálculos descartados por perderem a corrida de publicação.
    pub discarded: u64,

    /// Cálculos que falharam.
    pub failures: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Falha ao liberar uma opção durante o `dispose_all`.
#[derive(Debug, Clone)]
pub struct DisposeFailure {
    /// Provider dono da opção.
    pub provider: String,

    /// Texto da opção.
    pub option: String,

    /// Mensagem de erro.
    pub error: String,
}

/// Resultado de um `dispose_all`.
#[derive(Debug, Clone, Default)]
pub struct DisposeReport {
    /// Conjuntos removidos.
    pub sets: usize,

    /// Opções liberadas com sucesso.
    pub disposed: usize,

    /// Opções cuja liberação falhou.
    pub failures: Vec<DisposeFailure>,
}

impl DisposeReport {
    /// Verifica se todas as liberações tiveram sucesso.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Cache preguiçoso de opções top-hit.
///
/// Cada provider (identificado pelo seu tipo) tem no máximo um
/// [`OptionSet`] publicado. O cálculo acontece fora de qualquer lock; a
/// publicação usa inserção-se-ausente, então sob concorrência o cálculo
/// pode rodar mais de uma vez, mas apenas um resultado fica visível.
pub struct TopHitCache {
    map: DashMap<ProviderKey, OptionSet>,
    recorder: Arc<dyn ActivityRecorder>,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
    computations: AtomicU64,
    discarded: AtomicU64,
    failures: AtomicU64,
    disposed: AtomicBool,
}

impl TopHitCache {
    /// Cria um cache sem registro de atividades.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default(), Arc::new(NoopRecorder))
    }

    /// Cria um cache que reporta atividades ao registrador informado.
    pub fn with_recorder(recorder: Arc<dyn ActivityRecorder>) -> Self {
        Self::with_config(CacheConfig::default(), recorder)
    }

    /// Cria um cache com configuração explícita.
    pub fn with_config(config: CacheConfig, recorder: Arc<dyn ActivityRecorder>) -> Self {
        Self {
            map: DashMap::new(),
            recorder,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            computations: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            disposed: AtomicBool::new(false),
        }
    }

    /// Busca as opções do provider, calculando-as na primeira vez.
    ///
    /// - Hit: devolve o conjunto publicado, sem efeitos colaterais.
    /// - Miss: calcula sem lock, registra a atividade e publica com
    ///   inserção-se-ausente. Se outro chamador publicou antes, o
    ///   candidato é descartado e o vencedor é devolvido.
    ///
    /// Erros do provider são propagados e nada é publicado.
    pub fn get_cached_options<P: TopHitProvider + ?Sized>(
        &self,
        provider: &P,
        project: Option<&Project>,
        plugin: Option<&PluginDescriptor>,
    ) -> TopHitResult<OptionSet> {
        let key = provider.key();

        if let Some(options) = self.lookup(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(provider = %key, "Top-hit cache hit");
            return Ok(options);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        if self.is_disposed() {
            tracing::warn!(provider = %key, "Top-hit cache used after dispose");
        }

        let source = provider.source();
        tracing::debug!(
            provider = %key,
            id = provider.id(),
            kind = source.kind(),
            project = project.map(|p| p.name()),
            "Computing top-hit options"
        );

        let start = Instant::now();
        let candidate = match source.compute(&key, project) {
            Ok(options) => options,
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(provider = %key, error = %e, "Top-hit provider failed");
                return Err(e);
            }
        };
        self.computations.fetch_add(1, Ordering::Relaxed);

        let elapsed = start.elapsed();
        if elapsed > Duration::from_millis(self.config.slow_provider_ms) {
            tracing::warn!(
                provider = %key,
                elapsed_ms = elapsed.as_millis() as u64,
                "Slow top-hit provider"
            );
        }

        if self.config.record_activities {
            let category = ActivityCategory::for_scope(project.is_some());
            let plugin_id = plugin.map(|p| p.id.as_str());
            if let Err(e) = self
                .recorder
                .add_completed_activity(start, &key, category, plugin_id)
            {
                tracing::warn!(provider = %key, error = %e, "Failed to record activity");
            }
        }

        let winner = self
            .map
            .entry(key)
            .or_insert_with(|| Arc::clone(&candidate))
            .value()
            .clone();

        if Arc::ptr_eq(&winner, &candidate) {
            tracing::debug!(provider = %key, options = winner.len(), "Published top-hit options");
        } else {
            self.discarded.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(provider = %key, "Lost publish race, discarding computed options");
        }

        Ok(winner)
    }

    fn lookup(&self, key: &ProviderKey) -> Option<OptionSet> {
        self.map.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove o conjunto do provider, se houver.
    ///
    /// Não libera as opções: o conjunto removido é devolvido e passa a ser
    /// responsabilidade do chamador.
    pub fn invalidate(&self, key: &ProviderKey) -> Option<OptionSet> {
        let removed = self.map.remove(key).map(|(_, options)| options);
        if removed.is_some() {
            tracing::debug!(provider = %key, "Invalidated top-hit options");
        }
        removed
    }

    /// Remove o conjunto do provider `P`.
    pub fn invalidate_provider<P: TopHitProvider>(&self) -> Option<OptionSet> {
        self.invalidate(&ProviderKey::of::<P>())
    }

    /// Libera todas as opções em cache.
    ///
    /// Cada chave é removida antes de ter suas opções liberadas, então
    /// cada opção é liberada uma única vez mesmo com chamadas repetidas.
    /// Uma falha não interrompe a varredura.
    pub fn dispose_all(&self) -> DisposeReport {
        self.disposed.store(true, Ordering::Release);

        let keys: Vec<ProviderKey> = self.map.iter().map(|entry| *entry.key()).collect();
        let mut report = DisposeReport::default();

        for key in keys {
            let Some((_, options)) = self.map.remove(&key) else {
                continue;
            };
            report.sets += 1;

            for option in options.iter() {
                let Some(disposable) = option.as_disposable() else {
                    continue;
                };
                match disposable.dispose() {
                    Ok(()) => report.disposed += 1,
                    Err(e) => {
                        tracing::warn!(
                            provider = %key,
                            option = %option.description().option,
                            error = %e,
                            "Failed to dispose top-hit option"
                        );
                        report.failures.push(DisposeFailure {
                            provider: key.short_name().to_string(),
                            option: option.description().option.clone(),
                            error: e.to_string(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            sets = report.sets,
            disposed = report.disposed,
            failures = report.failures.len(),
            "Top-hit cache disposed"
        );
        report
    }

    /// Verifica se há conjunto publicado para a chave.
    pub fn contains(&self, key: &ProviderKey) -> bool {
        self.map.contains_key(key)
    }

    /// Chaves atualmente em cache.
    pub fn keys(&self) -> Vec<ProviderKey> {
        self.map.iter().map(|entry| *entry.key()).collect()
    }

    /// Número de providers em cache.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Verifica se `dispose_all` já foi chamado.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.map.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for TopHitCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TopHitCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopHitCache")
            .field("keys", &self.keys())
            .field("config", &self.config)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
