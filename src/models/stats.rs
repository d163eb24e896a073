use serde::Serialize;

/// (lawyer, count) pair produced by the cession/reception queries.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LawyerCount {
    pub abogado: String,
    pub cantidad: i64,
}

/// A lawyer that both gives and receives shifts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CedeRecibe {
    pub abogado: String,
    pub cesiones: i64,
    pub recepciones: i64,
}
