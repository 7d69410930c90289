use kinship::{Gender, Individual, KinshipError, Lineage, LineageTraversal, MemoryStore, ParentRole};

use crate::utils::{extended_family, fetch, nuclear_family, pnrs};

#[test]
fn test_nuclear_family_relatives() -> kinship::Result<()> {
    let store = nuclear_family();
    let traversal = LineageTraversal::new(&store);
    let c = fetch(&store, "C");

    assert_eq!(pnrs(&traversal.siblings(&c)?.unwrap_or_default()), ["D"]);
    assert!(traversal.half_siblings(&c)?.is_some_and(|half| half.is_empty()));
    assert_eq!(pnrs(&traversal.ancestors(&c)?), ["A", "B"]);
    assert!(traversal.descendants(&c)?.is_empty());
    Ok(())
}

#[test]
fn test_parent_queries() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);

    let e = fetch(&store, "E");
    assert_eq!(traversal.father(&e)?.map(|f| f.pnr), Some("A".to_string()));
    assert_eq!(traversal.mother(&e)?, None);

    let parents = traversal.parents(&e)?.expect("E has a father");
    assert_eq!(parents.get(ParentRole::Father).map(|f| f.pnr.as_str()), Some("A"));
    assert!(parents.get(ParentRole::Mother).is_none());

    assert!(traversal.parents(&fetch(&store, "I"))?.is_none());
    Ok(())
}

#[test]
fn test_shared_ancestors_are_listed_once() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);

    // G's parents C and F are both children of A and B
    let g = fetch(&store, "G");
    assert_eq!(pnrs(&traversal.ancestors(&g)?), ["C", "F", "A", "B"]);

    let a = fetch(&store, "A");
    assert_eq!(pnrs(&traversal.descendants(&a)?), ["C", "D", "E", "F", "H", "G"]);

    let b = fetch(&store, "B");
    assert_eq!(pnrs(&traversal.descendants(&b)?), ["C", "D", "F", "G"]);
    Ok(())
}

#[test]
fn test_offspring_follows_gender() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);

    assert_eq!(pnrs(&traversal.offspring(&fetch(&store, "A"))?), ["C", "D", "E", "F", "H"]);
    assert_eq!(pnrs(&traversal.offspring(&fetch(&store, "I"))?), ["H"]);
    assert!(traversal.offspring(&fetch(&store, "U"))?.is_empty());

    // Same PNR, wrong gender: looked up in the mother index
    let a_as_female = Individual::new("A", Gender::Female);
    assert!(traversal.offspring(&a_as_female)?.is_empty());
    Ok(())
}

#[test]
fn test_half_siblings_share_one_parent() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);
    let c = fetch(&store, "C");

    assert_eq!(pnrs(&traversal.siblings(&c)?.unwrap_or_default()), ["D", "F"]);
    assert_eq!(pnrs(&traversal.half_siblings(&c)?.unwrap_or_default()), ["E", "H"]);
    Ok(())
}

#[test]
fn test_siblings_require_both_parents() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);
    let e = fetch(&store, "E");

    assert!(traversal.siblings(&e)?.is_none());
    assert!(traversal.half_siblings(&e)?.is_none());
    Ok(())
}

#[test]
fn test_grandparents() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);
    let g = fetch(&store, "G");

    assert_eq!(traversal.paternal_grandfather(&g)?.map(|p| p.pnr), Some("A".to_string()));
    assert_eq!(traversal.maternal_grandmother(&g)?.map(|p| p.pnr), Some("B".to_string()));

    let grandparents = traversal.grandparents(&g)?;
    assert_eq!(grandparents.count(), 4);
    assert_eq!(
        grandparents
            .get(Lineage::Maternal, ParentRole::Father)
            .map(|p| p.pnr.as_str()),
        Some("A")
    );

    // Known parent without parents of its own
    let c = fetch(&store, "C");
    assert_eq!(traversal.paternal_grandfather(&c)?, None);
    assert_eq!(traversal.grandparents(&c)?.count(), 0);
    Ok(())
}

#[test]
fn test_grandparent_without_intermediate_parent_is_lineage_gap() {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);
    let e = fetch(&store, "E");

    let result = traversal.maternal_grandmother(&e);
    assert!(matches!(result, Err(KinshipError::LineageGap(_))));

    // The aggregate view leaves the missing side empty instead
    let grandparents = traversal.grandparents(&e).unwrap();
    assert_eq!(grandparents.count(), 0);
}

#[test]
fn test_is_ancestor() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);
    let a = fetch(&store, "A");
    let g = fetch(&store, "G");

    assert!(traversal.is_ancestor(&a, &g)?);
    assert!(!traversal.is_ancestor(&g, &a)?);
    assert!(!traversal.is_ancestor(&g, &g)?);
    Ok(())
}

#[test]
fn test_dangling_parent_is_treated_as_absent() -> kinship::Result<()> {
    let mut store = nuclear_family();
    store.insert(Individual::new("X", Gender::Male).with_father("ghost").with_mother("B"));
    let traversal = LineageTraversal::new(&store);
    let x = fetch(&store, "X");

    assert_eq!(traversal.father(&x)?, None);
    assert_eq!(pnrs(&traversal.ancestors(&x)?), ["B"]);
    assert!(matches!(
        traversal.paternal_grandmother(&x),
        Err(KinshipError::LineageGap(_))
    ));
    Ok(())
}

#[test]
fn test_dangling_parent_leaves_siblings_undefined() -> kinship::Result<()> {
    let mut store = nuclear_family();
    store.insert(Individual::new("X", Gender::Male).with_father("ghost").with_mother("B"));
    store.insert(Individual::new("Y", Gender::Female).with_father("ghost").with_mother("B"));
    let traversal = LineageTraversal::new(&store);
    let x = fetch(&store, "X");

    assert_eq!(traversal.father(&x)?, None);
    assert!(traversal.siblings(&x)?.is_none());
    assert!(traversal.half_siblings(&x)?.is_none());

    // B's other children still see X and Y as maternal half siblings
    let c = fetch(&store, "C");
    assert_eq!(pnrs(&traversal.half_siblings(&c)?.unwrap_or_default()), ["X", "Y"]);
    Ok(())
}

#[test]
fn test_corrupt_cycle_terminates() -> kinship::Result<()> {
    let store = MemoryStore::from_individuals([
        Individual::new("X", Gender::Male).with_father("Y"),
        Individual::new("Y", Gender::Male).with_father("X"),
    ]);
    let traversal = LineageTraversal::new(&store);
    let x = fetch(&store, "X");

    assert_eq!(pnrs(&traversal.ancestors(&x)?), ["Y"]);
    assert_eq!(pnrs(&traversal.descendants(&x)?), ["Y"]);
    Ok(())
}

#[test]
fn test_summary() -> kinship::Result<()> {
    let store = extended_family();
    let traversal = LineageTraversal::new(&store);
    let summary = traversal.summary(&fetch(&store, "G"))?;

    assert_eq!(summary.pnr, "G");
    assert_eq!(summary.father.as_deref(), Some("C"));
    assert_eq!(summary.mother.as_deref(), Some("F"));
    assert_eq!(summary.maternal_grandfather.as_deref(), Some("A"));
    assert_eq!(summary.ancestors, ["C", "F", "A", "B"]);
    assert!(summary.descendants.is_empty());
    assert_eq!(summary.siblings, Some(Vec::new()));
    assert_eq!(summary.relative_count(), 4);

    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(json["gender"], "Male");
    Ok(())
}
