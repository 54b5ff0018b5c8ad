mod cli;

use clap::Parser;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frequencia_client::core::config::Config;
use frequencia_client::core::http::HttpClient;
use frequencia_client::features::admin::{AdminActions, HttpAdminClient};
use frequencia_client::features::registration::{
    HttpRegistrationClient, RegistrationServices, RegistrationWorkspace,
};
use frequencia_client::features::reports::services::{render_html, render_text};
use frequencia_client::features::reports::{HttpReportClient, PeriodSelection, ReportRenderer};
use frequencia_client::features::search::{
    HttpSearchClient, PersonnelSource, PrefixSource, SearchBackend, SuggestionSource,
};
use frequencia_client::shared::ui::{event_channel, ActionOutcome, AppEvent, Dialogs};

use crate::cli::{Cli, Command, SearchTarget, TerminalDialogs, UserCommand};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Using backend at {}", config.api.base_url);

    let http = Arc::new(HttpClient::new(&config.api)?);
    let dialogs: Arc<dyn Dialogs> = Arc::new(TerminalDialogs::new(cli.yes));
    let search: Arc<dyn SearchBackend> = Arc::new(HttpSearchClient::new(http.clone()));
    let (events, mut event_rx) = event_channel();

    let outcome = match cli.command {
        Command::Buscar { alvo, termo } => {
            let term = termo.trim();
            if term.chars().count() < config.search.min_chars {
                anyhow::bail!(
                    "O termo de busca precisa de pelo menos {} caracteres",
                    config.search.min_chars
                );
            }
            match alvo {
                SearchTarget::Eletricistas => {
                    print_suggestions(&PersonnelSource::new(search), term).await?
                }
                SearchTarget::Prefixos => {
                    print_suggestions(&PrefixSource::new(search), term).await?
                }
            }
            ActionOutcome::Completed
        }

        Command::Relatorio {
            tipo,
            dia,
            inicio,
            fim,
            html,
        } => {
            let renderer = ReportRenderer::new(
                Arc::new(HttpReportClient::new(http.clone())),
                dialogs.clone(),
            );
            renderer.select_tab(tipo.into());
            renderer.set_period(match dia {
                Some(dia) => PeriodSelection::day(dia),
                None => PeriodSelection::interval(
                    inicio.unwrap_or_default(),
                    fim.unwrap_or_default(),
                ),
            });

            let outcome = renderer.generate().await;
            if let Some(report) = renderer.last_report() {
                if html {
                    println!("{}", render_html(&report)?);
                } else {
                    println!("{}", render_text(&report));
                }
            }
            outcome
        }

        Command::Remanejar { termo, item } => {
            let found = search.search_personnel(termo.trim()).await?;
            let Some(person) = found.get(item) else {
                anyhow::bail!(
                    "Nenhum eletricista na posição {} ({} encontrado(s))",
                    item,
                    found.len()
                );
            };

            let services = RegistrationServices {
                search: search.clone(),
                registration: Arc::new(HttpRegistrationClient::new(http.clone())),
                dialogs: dialogs.clone(),
                events: events.clone(),
                search_config: config.search,
            };
            RegistrationWorkspace::new(Vec::new(), services)
                .reassign(person)
                .await
        }

        Command::Usuario { acao } => {
            let actions = AdminActions::new(
                Arc::new(HttpAdminClient::new(http.clone())),
                dialogs.clone(),
                events.clone(),
            );
            match acao {
                UserCommand::Status { user_id, ativo } => {
                    actions.toggle_status(user_id, ativo).await
                }
                UserCommand::Senha { user_id, nome } => {
                    actions.reset_password(user_id, &nome).await
                }
            }
        }
    };

    drop(events);
    log_events(&mut event_rx).await;

    match outcome {
        ActionOutcome::Completed | ActionOutcome::Cancelled => Ok(()),
        ActionOutcome::Blocked => anyhow::bail!("Ação não executada"),
        ActionOutcome::Failed => anyhow::bail!("A ação falhou"),
    }
}

async fn print_suggestions<S: SuggestionSource>(source: &S, term: &str) -> anyhow::Result<()> {
    let items = source.search(term).await?;
    if items.is_empty() {
        println!("{}", source.empty_label());
        return Ok(());
    }
    for (index, item) in items.iter().enumerate() {
        let row = source.row(item);
        println!("[{}] {}\n    {}", index, row.title, row.details);
    }
    Ok(())
}

async fn log_events(rx: &mut UnboundedReceiver<AppEvent>) {
    while let Some(event) = rx.recv().await {
        tracing::info!("Event: {:?}", event);
    }
}
