//! Per-lawyer breakdown: lawyer → direction → shift type → counterparts.
//!
//! Every level keeps insertion order, so iterating reproduces the order of
//! the sorted query that fed it.

use super::direction::Direction;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Counterpart {
    pub abogado: String,
    pub cantidad: i64,
}

/// Shift type → counterparts, in query order.
pub type ByTipo = IndexMap<String, Vec<Counterpart>>;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LawyerBreakdown {
    pub cede: ByTipo,
    pub recibe: ByTipo,
}

impl LawyerBreakdown {
    pub fn side(&self, dir: Direction) -> &ByTipo {
        match dir {
            Direction::Cede => &self.cede,
            Direction::Recibe => &self.recibe,
        }
    }

    fn side_mut(&mut self, dir: Direction) -> &mut ByTipo {
        match dir {
            Direction::Cede => &mut self.cede,
            Direction::Recibe => &mut self.recibe,
        }
    }

    /// Sum of every count on one side.
    pub fn total(&self, dir: Direction) -> i64 {
        self.side(dir)
            .values()
            .flat_map(|list| list.iter().map(|c| c.cantidad))
            .sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Breakdown {
    pub lawyers: IndexMap<String, LawyerBreakdown>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one grouped row. Lawyers and shift types are created on first sight.
    pub fn push(
        &mut self,
        abogado: &str,
        dir: Direction,
        tipo: &str,
        contraparte: &str,
        cantidad: i64,
    ) {
        self.lawyers
            .entry(abogado.to_string())
            .or_default()
            .side_mut(dir)
            .entry(tipo.to_string())
            .or_default()
            .push(Counterpart {
                abogado: contraparte.to_string(),
                cantidad,
            });
    }

    pub fn get(&self, abogado: &str) -> Option<&LawyerBreakdown> {
        self.lawyers.get(abogado)
    }

    pub fn is_empty(&self) -> bool {
        self.lawyers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LawyerBreakdown)> {
        self.lawyers.iter()
    }
}
