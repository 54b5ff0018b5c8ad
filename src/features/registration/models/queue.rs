use serde::Serialize;

use crate::features::registration::dtos::PendingAssociation;
use crate::features::registration::models::BoardError;

/// One line of the pending-associations list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRow {
    pub index: usize,
    pub nome: String,
    pub detalhe: String,
}

/// Associations built on the client before the batched save.
///
/// Holds at most one entry per `eletricista_id`.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    entries: Vec<PendingAssociation>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PendingAssociation] {
        &self.entries
    }

    pub fn contains(&self, personnel_id: i64) -> bool {
        self.entries
            .iter()
            .any(|a| a.eletricista_id == personnel_id)
    }

    pub fn push(&mut self, association: PendingAssociation) -> Result<(), BoardError> {
        if self.contains(association.eletricista_id) {
            return Err(BoardError::AlreadyQueued);
        }
        self.entries.push(association);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<PendingAssociation> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Vec<PendingAssociation> {
        std::mem::take(&mut self.entries)
    }

    /// Drop the entries whose ids were part of a successful save
    pub fn discard(&mut self, personnel_ids: &[i64]) {
        self.entries
            .retain(|a| !personnel_ids.contains(&a.eletricista_id));
    }

    pub fn rows(&self) -> Vec<PendingRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, a)| PendingRow {
                index,
                nome: a.nome.clone(),
                detalhe: format!("Mat: {} → Prefixo: {}", a.matricula, a.prefixo),
            })
            .collect()
    }
}
