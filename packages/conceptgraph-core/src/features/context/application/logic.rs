//! Logical relations between properties
//!
//! Each property is read as a truth-value sequence over the objects (its
//! column extent). A single sequence is a tautology, a contradiction or
//! contingent; two contingent sequences relate by which of the four value
//! combinations `TT`, `TF`, `FT`, `FF` occur at some object.

use std::fmt;

use crate::features::bitset::BitVector;
use crate::features::context::domain::Context;

/// Kind of a unary or binary logical relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Contradiction,
    Tautology,
    Contingency,
    Equivalent,
    Complement,
    Incompatible,
    Implication,
    Subcontrary,
    Orthogonal,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contradiction => "contradiction",
            Self::Tautology => "tautology",
            Self::Contingency => "contingency",
            Self::Equivalent => "equivalent",
            Self::Complement => "complement",
            Self::Incompatible => "incompatible",
            Self::Implication => "implication",
            Self::Subcontrary => "subcontrary",
            Self::Orthogonal => "orthogonal",
        }
    }

    /// Listing rank: unary kinds first, then from strongest to weakest
    fn rank(&self) -> i8 {
        match self {
            Self::Contradiction => -2,
            Self::Tautology => -1,
            Self::Contingency => 0,
            Self::Equivalent => 1,
            Self::Complement => 2,
            Self::Incompatible => 3,
            Self::Implication => 4,
            Self::Subcontrary => 6,
            Self::Orthogonal => 7,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.rank() > 0
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One relation; `right` is `None` for unary kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRelation<'a> {
    pub kind: RelationKind,
    pub left: &'a str,
    pub right: Option<&'a str>,
}

impl fmt::Display for LogicalRelation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.right {
            Some(right) => write!(f, "{} {} {}", self.left, self.kind, right),
            None => write!(f, "{} {}", self.left, self.kind),
        }
    }
}

/// Classify one sequence
fn unary(values: &BitVector) -> RelationKind {
    if values.is_empty() {
        RelationKind::Contradiction
    } else if values.is_full() {
        RelationKind::Tautology
    } else {
        RelationKind::Contingency
    }
}

/// Classify two contingent sequences; `swap` means `right -> left`
fn binary(left: &BitVector, right: &BitVector) -> (RelationKind, bool) {
    let tt = left.intersects(right);
    let tf = !left.difference(right).is_empty();
    let ft = !right.difference(left).is_empty();
    let ff = !left.union(right).is_full();

    match (tt, tf, ft, ff) {
        (true, true, true, true) => (RelationKind::Orthogonal, false),
        (true, true, true, false) => (RelationKind::Subcontrary, false),
        (true, false, true, true) => (RelationKind::Implication, false),
        (true, true, false, true) => (RelationKind::Implication, true),
        (true, false, false, true) => (RelationKind::Equivalent, false),
        (false, true, true, true) => (RelationKind::Incompatible, false),
        // (false, true, true, false): the only pattern left for contingent pairs
        _ => (RelationKind::Complement, false),
    }
}

/// Relations among labeled truth-value sequences, ordered by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRelations<'a> {
    relations: Vec<LogicalRelation<'a>>,
}

impl<'a> PropertyRelations<'a> {
    /// Binary relations between every pair of contingent sequences, plus the
    /// unary classification of each sequence with `include_unary`
    ///
    /// Pairs keep the label order; within a kind the input order is stable.
    pub fn new(
        labels: impl IntoIterator<Item = &'a str>,
        values: &[BitVector],
        include_unary: bool,
    ) -> Self {
        let items: Vec<(&'a str, &BitVector, RelationKind)> = labels
            .into_iter()
            .zip(values)
            .map(|(label, value)| (label, value, unary(value)))
            .collect();

        let mut relations = Vec::new();
        if include_unary {
            relations.extend(items.iter().map(|&(left, _, kind)| LogicalRelation {
                kind,
                left,
                right: None,
            }));
        }

        let contingent: Vec<_> = items
            .iter()
            .filter(|(_, _, kind)| *kind == RelationKind::Contingency)
            .collect();
        for (i, &&(left, left_values, _)) in contingent.iter().enumerate() {
            for &&(right, right_values, _) in &contingent[i + 1..] {
                let (kind, swap) = binary(left_values, right_values);
                let (left, right) = if swap { (right, left) } else { (left, right) };
                relations.push(LogicalRelation {
                    kind,
                    left,
                    right: Some(right),
                });
            }
        }

        relations.sort_by_key(|r| r.kind.rank());
        Self { relations }
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogicalRelation<'a>> {
        self.relations.iter()
    }

    /// Aligned table; orthogonal pairs are left out
    pub fn to_table(&self) -> String {
        let width = self.relations.iter().map(|r| r.left.len()).max().unwrap_or(0);
        self.relations
            .iter()
            .filter(|r| r.kind != RelationKind::Orthogonal)
            .map(|r| {
                format!(
                    "{:<width$} {:<12} {}",
                    r.left,
                    r.kind.as_str(),
                    r.right.unwrap_or("")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a PropertyRelations<'a> {
    type Item = &'a LogicalRelation<'a>;
    type IntoIter = std::slice::Iter<'a, LogicalRelation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.iter()
    }
}

impl fmt::Display for PropertyRelations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_table())
    }
}

impl Context {
    /// Logical relations between the properties, read over the objects
    pub fn relations(&self, include_unary: bool) -> PropertyRelations<'_> {
        PropertyRelations::new(
            self.properties().labels().iter().map(String::as_str),
            self.relation().columns(),
            include_unary,
        )
    }

    /// Share of `true` cells in the incidence matrix
    pub fn fill_ratio(&self) -> f64 {
        let (n_objects, n_properties) = self.shape();
        let filled: usize = self.relation().rows().iter().map(BitVector::count).sum();
        filled as f64 / (n_objects * n_properties) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation_of(labels: [&'static str; 2], left: &[bool], right: &[bool]) -> Vec<String> {
        let values = [
            BitVector::from_bools(left.iter().copied()),
            BitVector::from_bools(right.iter().copied()),
        ];
        PropertyRelations::new(labels, &values, false)
            .iter()
            .map(|r| format!("{:?} {}", r.kind, r))
            .collect()
    }

    #[test]
    fn test_binary_kinds() {
        let (t, f) = (true, false);
        assert_eq!(
            relation_of(["+1", "-2 -3"], &[t, f, f], &[t, f, f]),
            vec!["Equivalent +1 equivalent -2 -3"]
        );
        assert_eq!(
            relation_of(["+1", "-1"], &[t, f, f], &[f, t, t]),
            vec!["Complement +1 complement -1"]
        );
        assert_eq!(
            relation_of(["+1", "+3"], &[t, f, f], &[f, f, t]),
            vec!["Incompatible +1 incompatible +3"]
        );
        assert_eq!(
            relation_of(["+1", "-3"], &[t, f, f], &[t, t, f]),
            vec!["Implication +1 implication -3"]
        );
        assert_eq!(
            relation_of(["-1", "-3"], &[f, t, t], &[t, t, f]),
            vec!["Subcontrary -1 subcontrary -3"]
        );
        assert_eq!(
            relation_of(["+1", "sg"], &[t, t, f, f], &[t, f, t, f]),
            vec!["Orthogonal +1 orthogonal sg"]
        );
    }

    #[test]
    fn test_converse_implication_is_flipped() {
        let (t, f) = (true, false);
        assert_eq!(
            relation_of(["-3", "+1"], &[t, t, f], &[t, f, f]),
            vec!["Implication +1 implication -3"]
        );
    }

    #[test]
    fn test_unary_and_table() {
        let values = [
            BitVector::from_bools([false, false]),
            BitVector::from_bools([true, true]),
            BitVector::from_bools([true, false]),
            BitVector::from_bools([true, false]),
        ];
        let relations =
            PropertyRelations::new(["Never", "Always", "Possibly", "Maybe"], &values, true);
        let kinds: Vec<RelationKind> = relations.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RelationKind::Contradiction,
                RelationKind::Tautology,
                RelationKind::Contingency,
                RelationKind::Contingency,
                RelationKind::Equivalent,
            ]
        );
        assert_eq!(
            relations.to_string(),
            "Never    contradiction \n\
             Always   tautology    \n\
             Possibly contingency  \n\
             Maybe    contingency  \n\
             Possibly equivalent   Maybe"
        );

        let first = relations.iter().next().unwrap();
        assert_eq!(first.to_string(), "Never contradiction");
        assert_eq!(relations.iter().last().unwrap().to_string(), "Possibly equivalent Maybe");
    }

    #[test]
    fn test_binary_skips_non_contingent() {
        let values = [
            BitVector::from_bools([true, true]),
            BitVector::from_bools([true, false]),
            BitVector::from_bools([false, true]),
        ];
        let relations = PropertyRelations::new(["all", "a", "b"], &values, false);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations.to_string(), "a complement   b");
    }

    #[test]
    fn test_fill_ratio() {
        let context = Context::new(
            ["x", "y"],
            ["a", "b"],
            vec![vec![true, false], vec![true, true]],
        )
        .unwrap();
        assert_eq!(context.fill_ratio(), 0.75);
    }
}
