//! Custom assertions for lattice verification
//!
//! Structural invariants every assembled lattice must satisfy, whatever
//! algorithm built it.

use conceptgraph_core::Lattice;

/// Assert every concept is a closed pair and extents are unique
pub fn assert_closed(lattice: &Lattice) {
    let relation = lattice.context().relation();
    for concept in lattice {
        let (extent, intent) = relation.objects().doubleprime(concept.extent());
        assert_eq!(&extent, concept.extent(), "extent of {concept} is not closed");
        assert_eq!(&intent, concept.intent(), "intent of {concept} is not derived");
        assert_eq!(
            lattice.by_extent(concept.extent()).map(|c| c.index()),
            Some(concept.index()),
            "extent map disagrees for {concept}"
        );
    }
}

/// Assert `index` follows shortlex, `dindex` longlex, both bijective
pub fn assert_ordered(lattice: &Lattice) {
    let concepts = lattice.concepts();
    for (position, concept) in concepts.iter().enumerate() {
        assert_eq!(concept.index(), position);
    }
    for pair in concepts.windows(2) {
        assert!(
            pair[0].extent().cmp_shortlex(pair[1].extent()).is_lt(),
            "{} should precede {} in shortlex order",
            pair[0],
            pair[1]
        );
    }
    let mut by_dindex: Vec<_> = concepts.iter().collect();
    by_dindex.sort_by_key(|c| c.dindex());
    for (rank, concept) in by_dindex.iter().enumerate() {
        assert_eq!(concept.dindex(), rank, "dindex is not a bijection");
    }
    for pair in by_dindex.windows(2) {
        assert!(pair[0].extent().cmp_longlex(pair[1].extent()).is_lt());
    }
    assert_eq!(lattice.infimum().index(), 0);
    assert_eq!(lattice.supremum().dindex(), 0);
}

/// Assert neighbor lists are symmetric covering edges in canonical order
pub fn assert_covering(lattice: &Lattice) {
    for concept in lattice {
        for &upper in concept.upper_neighbors() {
            let other = &lattice[upper];
            assert!(other.lower_neighbors().contains(&concept.index()));
            assert!(concept.properly_implies(other));
            let between = lattice
                .iter()
                .any(|c| concept.properly_implies(c) && c.properly_implies(other));
            assert!(!between, "{concept} -> {other} is not a covering edge");
        }
        for &lower in concept.lower_neighbors() {
            assert!(lattice[lower].upper_neighbors().contains(&concept.index()));
        }
        assert!(concept.upper_neighbors().windows(2).all(|w| w[0] < w[1]));
        assert!(concept
            .lower_neighbors()
            .windows(2)
            .all(|w| lattice[w[0]].dindex() < lattice[w[1]].dindex()));

        // every concept with a strictly larger extent lies above some cover
        let covered = lattice.iter().filter(|c| concept.properly_implies(c)).all(|c| {
            concept
                .upper_neighbors()
                .iter()
                .any(|&u| lattice[u].implies(c))
        });
        assert!(covered, "{concept} is missing an upper cover");
    }
}

/// All structural checks
pub fn assert_well_formed(lattice: &Lattice) {
    assert_closed(lattice);
    assert_ordered(lattice);
    assert_covering(lattice);
}
