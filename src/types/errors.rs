//! Tipos de erro do TopHit.

use thiserror::Error;

/// Tipo de resultado padrão do TopHit.
pub type TopHitResult<T> = Result<T, TopHitError>;

/// Erros possíveis no TopHit.
#[derive(Error, Debug)]
pub enum TopHitError {
    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider '{provider}' falhou: {source}")]
    Provider {
        provider: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Provider '{0}' exige um projeto")]
    ProjectRequired(String),

    #[error("Falha ao liberar opção '{0}': {1}")]
    Dispose(String, String),

    #[error("Falha ao registrar atividade: {0}")]
    Activity(String),

    #[error("{0}")]
    Other(String),
}

impl TopHitError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de provider a partir de qualquer erro.
    pub fn provider<S, E>(provider: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<anyhow::Error>,
    {
        Self::Provider {
            provider: provider.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_message() {
        let err = TopHitError::provider("settings", anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "Provider 'settings' falhou: boom");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TopHitError = io.into();
        assert!(matches!(err, TopHitError::Io(_)));
    }
}
