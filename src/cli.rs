use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};

use frequencia_client::features::reports::ReportKind;
use frequencia_client::shared::ui::Dialogs;

#[derive(Debug, Parser)]
#[command(name = "frequencia", version, about = "Cliente de linha de comando da frequência de eletricistas")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Type-ahead search, as the suggestion panels show it
    #[command(visible_alias = "b")]
    Buscar {
        #[arg(value_enum)]
        alvo: SearchTarget,
        termo: String,
    },

    /// Generate an attendance report
    #[command(visible_alias = "r")]
    Relatorio {
        #[arg(value_enum)]
        tipo: ReportArg,

        /// Single day (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["inicio", "fim"])]
        dia: Option<String>,

        #[arg(long, requires = "fim")]
        inicio: Option<String>,

        #[arg(long, requires = "inicio")]
        fim: Option<String>,

        /// Print the HTML fragment instead of a text table
        #[arg(long)]
        html: bool,
    },

    /// Move a crew member found by `termo` under your supervision
    Remanejar {
        termo: String,

        /// Position in the search results, starting at 0
        #[arg(long, default_value_t = 0)]
        item: usize,
    },

    /// User administration
    Usuario {
        #[command(subcommand)]
        acao: UserCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Activate or deactivate a user
    Status {
        user_id: i64,
        #[arg(long, action = clap::ArgAction::Set)]
        ativo: bool,
    },

    /// Reset a user's password (asked twice)
    Senha { user_id: i64, nome: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchTarget {
    Eletricistas,
    Prefixos,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportArg {
    Geral,
    Supervisor,
    Prefixo,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Geral => ReportKind::Geral,
            ReportArg::Supervisor => ReportKind::PorSupervisor,
            ReportArg::Prefixo => ReportKind::PorPrefixo,
        }
    }
}

/// Dialogs answered on the terminal
pub struct TerminalDialogs {
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn read_line(message: &str) -> Option<String> {
        let mut stdout = io::stdout();
        if write!(stdout, "{} ", message).and_then(|_| stdout.flush()).is_err() {
            return None;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Dialogs for TerminalDialogs {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            println!("{} [s/N] s", message);
            return true;
        }
        matches!(
            Self::read_line(&format!("{} [s/N]", message))
                .as_deref()
                .map(str::trim)
                .map(str::to_lowercase)
                .as_deref(),
            Some("s" | "sim" | "y" | "yes")
        )
    }

    fn prompt(&self, message: &str) -> Option<String> {
        Self::read_line(message).filter(|answer| !answer.is_empty())
    }
}
