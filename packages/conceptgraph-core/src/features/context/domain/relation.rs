//! Incidence relation and its Galois connection
//!
//! The n×m boolean matrix is held twice:
//! - `rows[g]`: intent of object `g` (over properties)
//! - `columns[m]`: extent of property `m` (over objects)
//!
//! The derivation operators only touch the vectors selected by their
//! argument, so `prime(x)` costs O(|x| · words) regardless of matrix size.

use crate::features::bitset::BitVector;

/// Row and column bit-vectors of one incidence matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    rows: Vec<BitVector>,
    columns: Vec<BitVector>,
}

impl Relation {
    /// Build from object rows over `n_properties` positions
    ///
    /// Callers validate the shape; rows longer than `n_properties` are
    /// truncated by construction.
    pub fn from_rows(rows: Vec<BitVector>, n_properties: usize) -> Self {
        let n_objects = rows.len();
        let columns = (0..n_properties)
            .map(|m| {
                BitVector::from_indices(
                    n_objects,
                    rows.iter()
                        .enumerate()
                        .filter_map(|(g, row)| row.contains(m).then_some(g)),
                )
            })
            .collect();
        Self { rows, columns }
    }

    /// Build from a boolean matrix (`bools[g][m]`)
    pub fn from_bools(bools: &[Vec<bool>], n_properties: usize) -> Self {
        let rows = bools
            .iter()
            .map(|row| {
                BitVector::from_indices(
                    n_properties,
                    row.iter()
                        .enumerate()
                        .filter_map(|(m, &flag)| flag.then_some(m)),
                )
            })
            .collect();
        Self::from_rows(rows, n_properties)
    }

    #[inline]
    pub fn n_objects(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_properties(&self) -> usize {
        self.columns.len()
    }

    /// Object intents
    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    /// Property extents
    pub fn columns(&self) -> &[BitVector] {
        &self.columns
    }

    /// Swap the roles of objects and properties
    pub fn transpose(&self) -> Relation {
        Relation {
            rows: self.columns.clone(),
            columns: self.rows.clone(),
        }
    }

    /// Derivation of object sets into property sets
    #[inline]
    pub fn objects(&self) -> Derivation<'_> {
        Derivation {
            forward: &self.rows,
            backward: &self.columns,
            source_len: self.rows.len(),
            target_len: self.columns.len(),
        }
    }

    /// Derivation of property sets into object sets
    #[inline]
    pub fn properties(&self) -> Derivation<'_> {
        Derivation {
            forward: &self.columns,
            backward: &self.rows,
            source_len: self.columns.len(),
            target_len: self.rows.len(),
        }
    }

    /// The matrix as booleans, one row per object
    pub fn bools(&self) -> Vec<Vec<bool>> {
        let m = self.n_properties();
        self.rows
            .iter()
            .map(|row| (0..m).map(|i| row.contains(i)).collect())
            .collect()
    }
}

/// One direction of the Galois connection
///
/// `forward[i]` is the opposite-side set of source position `i`,
/// `backward` the transposed collection.
#[derive(Debug, Clone, Copy)]
pub struct Derivation<'a> {
    forward: &'a [BitVector],
    backward: &'a [BitVector],
    source_len: usize,
    target_len: usize,
}

impl<'a> Derivation<'a> {
    /// Size of the universe this derivation maps from
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Size of the universe this derivation maps into
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Generator vectors: `generators()[i]` is the derivation of `{i}`
    pub fn generators(&self) -> &'a [BitVector] {
        self.forward
    }

    /// Common opposite-side members of `x` (full set for empty `x`)
    pub fn prime(&self, x: &BitVector) -> BitVector {
        intersect_selected(self.forward, x, self.target_len)
    }

    /// Closure of `x` on its own side
    pub fn double(&self, x: &BitVector) -> BitVector {
        intersect_selected(self.backward, &self.prime(x), self.source_len)
    }

    /// `(double(x), prime(x))`
    pub fn doubleprime(&self, x: &BitVector) -> (BitVector, BitVector) {
        let prime = self.prime(x);
        let double = intersect_selected(self.backward, &prime, self.source_len);
        (double, prime)
    }

    /// Reverse direction over the same relation
    pub fn dual(&self) -> Derivation<'a> {
        Derivation {
            forward: self.backward,
            backward: self.forward,
            source_len: self.target_len,
            target_len: self.source_len,
        }
    }
}

#[inline]
fn intersect_selected(vectors: &[BitVector], selection: &BitVector, len: usize) -> BitVector {
    let mut members = selection.iter();
    let Some(first) = members.next() else {
        return BitVector::full(len);
    };
    members.fold(vectors[first].clone(), |acc, i| acc.intersection(&vectors[i]))
}
