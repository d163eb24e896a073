use serde::{Deserialize, Serialize};

/// A stored shift transfer, as read back from the `guardias` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GuardiaRecord {
    pub id: i64,
    pub tipo_guardia: String,
    pub abogado_cede: String,
    pub abogado_recibe: String,
}

/// One CSV data row. Fields are positional: type, giver, receiver.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NewGuardia {
    pub tipo_guardia: String,
    pub abogado_cede: String,
    pub abogado_recibe: String,
}
