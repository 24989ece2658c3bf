//! Flat string projection of a WorkItem used by every export format.

use crate::models::WorkItem;
use crate::utils::{date, duration};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ItemExport {
    pub protocolo: String,
    pub usuario: String,
    pub status: String,
    pub tempo_de_analise: String,
    pub proximo: String,
    pub carteira: String,
}

impl From<&WorkItem> for ItemExport {
    fn from(item: &WorkItem) -> Self {
        Self {
            protocolo: item.protocol.clone(),
            usuario: item.analyst.clone(),
            status: item.status.as_str().to_string(),
            tempo_de_analise: duration::serialize_duration(item.analysis_time),
            proximo: date::serialize_next(item.next_review),
            carteira: item.portfolio.clone().unwrap_or_default(),
        }
    }
}

pub fn get_headers() -> [&'static str; 6] {
    [
        "Protocolo",
        "Usuário",
        "Status",
        "Tempo de Análise",
        "Próximo",
        "Carteira",
    ]
}

pub fn item_to_row(item: &ItemExport) -> [String; 6] {
    [
        item.protocolo.clone(),
        item.usuario.clone(),
        item.status.clone(),
        item.tempo_de_analise.clone(),
        item.proximo.clone(),
        item.carteira.clone(),
    ]
}
