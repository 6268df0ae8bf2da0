//! # TopHit
//!
//! Cache de opções top-hit para busca interativa.
//!
//! Cada provider produz um conjunto semi-estático de opções de busca. O
//! TopHit calcula esse conjunto na primeira vez que ele é pedido e o
//! compartilha com todos os chamadores seguintes; sob concorrência, apenas
//! um resultado por provider fica visível.
//!
//! ## Módulos
//!
//! - [`cache`] - Cache por provider (busca-ou-calcula, invalidação, liberação)
//! - [`providers`] - Providers de opções e suas variantes de cálculo
//! - [`activity`] - Registro de atividades de cálculo
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

pub mod activity;
pub mod cache;
pub mod cli;
pub mod providers;
pub mod types;

pub use cache::TopHitCache;
pub use types::config::Config;
pub use types::errors::{TopHitError, TopHitResult};
