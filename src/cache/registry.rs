//! Instância do cache compartilhada pelo processo.
//!
//! Deve ser usada apenas na raiz de composição (o binário); o restante do
//! código recebe o cache por referência.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{TopHitError, TopHitResult};

use super::{DisposeReport, TopHitCache};

static GLOBAL: OnceCell<Arc<TopHitCache>> = OnceCell::new();

/// Instala o cache global. Falha se já houver um instalado.
pub fn install_global(cache: TopHitCache) -> TopHitResult<Arc<TopHitCache>> {
    let cache = Arc::new(cache);
    GLOBAL
        .set(Arc::clone(&cache))
        .map_err(|_| TopHitError::other("global top-hit cache already installed"))?;
    Ok(cache)
}

/// Retorna o cache global, criando um padrão se nenhum foi instalado.
pub fn global() -> Arc<TopHitCache> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(TopHitCache::new())))
}

/// Libera o cache global, se existir.
pub fn dispose_global() -> Option<DisposeReport> {
    GLOBAL.get().map(|cache| cache.dispose_all())
}
