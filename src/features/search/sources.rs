use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::search::clients::SearchBackend;
use crate::features::search::dtos::{Eletricista, PrefixoSugestao, SuggestionRow};

/// Where a suggestion widget gets its results from and how it shows them
#[async_trait]
pub trait SuggestionSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    async fn search(&self, term: &str) -> Result<Vec<Self::Item>>;

    /// Row shown in the panel; `title` is also what the input receives on selection
    fn row(&self, item: &Self::Item) -> SuggestionRow;

    /// Single row shown when a search returns nothing
    fn empty_label(&self) -> &'static str;
}

/// Personnel lookup for the attendance and unavailability forms
#[derive(Clone)]
pub struct PersonnelSource {
    backend: Arc<dyn SearchBackend>,
}

impl PersonnelSource {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl SuggestionSource for PersonnelSource {
    type Item = Eletricista;

    async fn search(&self, term: &str) -> Result<Vec<Eletricista>> {
        self.backend.search_personnel(term).await
    }

    fn row(&self, item: &Eletricista) -> SuggestionRow {
        SuggestionRow {
            title: item.nome.clone(),
            details: format!("Mat: {} | Base: {}", item.matricula, item.base),
        }
    }

    fn empty_label(&self) -> &'static str {
        "Nenhum eletricista encontrado"
    }
}

/// Personnel lookup for the reassignment section, showing the current supervision
#[derive(Clone)]
pub struct ReassignmentSource {
    backend: Arc<dyn SearchBackend>,
}

impl ReassignmentSource {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl SuggestionSource for ReassignmentSource {
    type Item = Eletricista;

    async fn search(&self, term: &str) -> Result<Vec<Eletricista>> {
        self.backend.search_personnel(term).await
    }

    fn row(&self, item: &Eletricista) -> SuggestionRow {
        let supervisor = item
            .polo
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("N/A");
        SuggestionRow {
            title: item.nome.clone(),
            details: format!(
                "Mat: {} | Base: {} | Supervisor: {}",
                item.matricula, item.base, supervisor
            ),
        }
    }

    fn empty_label(&self) -> &'static str {
        "Nenhum eletricista encontrado"
    }
}

/// Team prefix lookup
#[derive(Clone)]
pub struct PrefixSource {
    backend: Arc<dyn SearchBackend>,
}

impl PrefixSource {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl SuggestionSource for PrefixSource {
    type Item = PrefixoSugestao;

    async fn search(&self, term: &str) -> Result<Vec<PrefixoSugestao>> {
        self.backend.search_prefixes(term).await
    }

    fn row(&self, item: &PrefixoSugestao) -> SuggestionRow {
        SuggestionRow {
            title: item.prefixo.clone(),
            details: format!(
                "Base: {} | {} eletricista(s)",
                item.base, item.total_eletricistas
            ),
        }
    }

    fn empty_label(&self) -> &'static str {
        "Nenhum prefixo encontrado"
    }
}
