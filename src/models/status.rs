/// Work-item status as stored in the `Status` column. Values outside the
/// three known ones pass through unclassified rather than failing the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Finalizado,
    Reclassificado,
    AndamentoPre,
    Other(String),
}

impl Status {
    pub fn from_str(s: &str) -> Self {
        match s {
            "FINALIZADO" => Status::Finalizado,
            "RECLASSIFICADO" => Status::Reclassificado,
            "ANDAMENTO_PRE" => Status::AndamentoPre,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Finalizado => "FINALIZADO",
            Status::Reclassificado => "RECLASSIFICADO",
            Status::AndamentoPre => "ANDAMENTO_PRE",
            Status::Other(s) => s,
        }
    }

    /// Label used on the charts and metric cards.
    pub fn label(&self) -> &str {
        match self {
            Status::Finalizado => "Finalizado",
            Status::Reclassificado => "Reclassificado",
            Status::AndamentoPre => "Andamento",
            Status::Other(s) => s,
        }
    }
}
