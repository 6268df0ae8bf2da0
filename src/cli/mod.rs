//! Interface de linha de comando do TopHit.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TopHit - cache de opções top-hit para busca interativa.
#[derive(Parser, Debug)]
#[command(name = "tophit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "tophit.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Busca opções nos providers padrão.
    Search {
        /// Texto a buscar (vazio lista tudo).
        #[arg(default_value = "")]
        query: String,

        /// Diretório do projeto (habilita providers de projeto).
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Saída em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Lista os providers padrão.
    Providers,

    /// Mostra versão.
    Version,
}
