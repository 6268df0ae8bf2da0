//! Cache de opções top-hit.
//!
//! Este módulo implementa um cache preguiçoso que associa cada provider
//! ao conjunto de opções que ele produz, evitando recalcular resultados
//! semi-estáticos a cada busca. Não há política de expulsão nem TTL:
//! entradas saem apenas por invalidação ou por `dispose_all`.

pub mod registry;
mod top_hit;

pub use top_hit::{CacheStats, DisposeFailure, DisposeReport, TopHitCache};
