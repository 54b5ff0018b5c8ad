use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use crate::features::search::dtos::null_as_empty;

/// Bounds echoed back by the report endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Periodo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inicio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fim: String,
}

impl Periodo {
    pub fn label(&self) -> String {
        format!("{} até {}", self.inicio, self.fim)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Counter map where a null map is empty and a null count is 0
fn null_as_zero_counters<'de, D>(deserializer: D) -> Result<HashMap<String, i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let counters = Option::<HashMap<String, Option<i64>>>::deserialize(deserializer)?;
    Ok(counters
        .unwrap_or_default()
        .into_iter()
        .map(|(motivo, count)| (motivo, count.unwrap_or_default()))
        .collect())
}

/// Percentages sent by the backend. Null entries are dropped so the
/// table recomputes them from the counters.
fn null_entries_dropped<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let percentages = Option::<HashMap<String, Option<f64>>>::deserialize(deserializer)?;
    Ok(percentages.map(|map| {
        map.into_iter()
            .filter_map(|(motivo, value)| value.map(|v| (motivo, v)))
            .collect()
    }))
}

// =============================================================================
// GERAL
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OverallReport {
    #[serde(default)]
    pub periodo: Periodo,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_eletricistas: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_registros: i64,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub dados: Vec<OverallRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverallRow {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub motivo: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub qtde: i64,
    #[serde(default)]
    pub percentual: Option<f64>,
}

// =============================================================================
// POR SUPERVISOR
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupervisorReport {
    #[serde(default)]
    pub periodo: Periodo,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_geral: i64,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub motivos: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub dados: Vec<SupervisorRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupervisorRow {
    #[serde(default)]
    pub supervisor: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero_counters")]
    pub contadores: HashMap<String, i64>,
    #[serde(default, deserialize_with = "null_entries_dropped")]
    pub percentuais: Option<HashMap<String, f64>>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_registros: i64,
}

// =============================================================================
// POR PREFIXO
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrefixReport {
    #[serde(default)]
    pub periodo: Periodo,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_prefixos: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_registros: i64,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub dados: Vec<PrefixRow>,
}

/// One crew member on one day; `motivo2` is the optional second status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrefixRow {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prefixo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: String,
    #[serde(default)]
    pub motivo1: Option<String>,
    #[serde(default)]
    pub motivo2: Option<String>,
}
