use serde::{Deserialize, Deserializer, Serialize};

/// Nullable text columns arrive as `null`; the form fields want "".
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Crew member returned by `/api/buscar-eletricistas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eletricista {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matricula: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base: String,
    /// Team prefix the crew member is normally assigned to
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prefixo: String,
    /// Supervision (polo) the crew member reports to
    #[serde(default)]
    pub polo: Option<String>,
    #[serde(default)]
    pub regional: Option<String>,
}

/// Team prefix returned by `/api/buscar-prefixos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixoSugestao {
    pub prefixo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base: String,
    #[serde(default)]
    pub total_eletricistas: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonnelSearchResponse {
    #[serde(default)]
    pub eletricistas: Vec<Eletricista>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixSearchResponse {
    #[serde(default)]
    pub prefixos: Vec<PrefixoSugestao>,
}

/// Display form of one suggestion: a bold title over a details line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionRow {
    pub title: String,
    pub details: String,
}
