use kinship::{
    Gender, Individual, KinshipError, LineageTraversal, MemoryStore, PedigreeStore,
    TransactionalBatch,
};

use crate::utils::{FlakyStore, extended_family, fetch, nuclear_family, pnrs};

fn nuclear_family_with_half_brother() -> MemoryStore {
    let mut store = nuclear_family();
    store.insert(Individual::new("E", Gender::Male).with_father("A"));
    store
}

#[test]
fn test_committed_batch_is_visible() -> kinship::Result<()> {
    let mut store = nuclear_family_with_half_brother();
    let c = fetch(&store, "C");
    let mut sibs = vec![fetch(&store, "E")];

    assert!(TransactionalBatch::new(&mut store).add_siblings(&c, &mut sibs)?);
    assert_eq!(sibs[0].father_pnr.as_deref(), Some("A"));
    assert_eq!(sibs[0].mother_pnr.as_deref(), Some("B"));

    let traversal = LineageTraversal::new(&store);
    assert_eq!(pnrs(&traversal.siblings(&c)?.unwrap_or_default()), ["D", "E"]);
    assert!(traversal.half_siblings(&c)?.is_some_and(|half| half.is_empty()));
    Ok(())
}

#[test]
fn test_ancestor_rejected_without_changes() {
    let mut store = nuclear_family();
    let c = fetch(&store, "C");
    let a = fetch(&store, "A");
    let mut sibs = vec![a.clone()];

    let result = TransactionalBatch::new(&mut store).add_siblings(&c, &mut sibs);
    assert!(matches!(result, Err(KinshipError::IncompatibleRelationship(_))));
    assert_eq!(sibs[0], a);
    assert_eq!(fetch(&store, "A"), a);
}

#[test]
fn test_failed_subject_save_rolls_back_siblings() {
    let mut store = FlakyStore::new(extended_family(), "C");
    let c = fetch(&store, "C");
    let original = vec![fetch(&store, "E"), fetch(&store, "I")];
    let mut sibs = original.clone();

    let result = TransactionalBatch::new(&mut store).add_siblings(&c, &mut sibs);
    assert!(matches!(result, Err(KinshipError::Persistence(_))));

    // Both siblings were written before the subject failed
    assert_eq!(store.saves, 2);
    assert_eq!(sibs, original);
    assert_eq!(fetch(&store, "E").mother_pnr, None);
    assert_eq!(fetch(&store, "I").father_pnr, None);
}

#[test]
fn test_failed_sibling_save_rolls_back_earlier_saves() {
    let mut store = FlakyStore::new(extended_family(), "I");
    let c = fetch(&store, "C");
    let original = vec![fetch(&store, "E"), fetch(&store, "I")];
    let mut sibs = original.clone();

    let result = TransactionalBatch::new(&mut store).add_siblings(&c, &mut sibs);
    assert!(result.is_err());
    assert_eq!(store.saves, 1);
    assert_eq!(sibs, original);
    assert_eq!(fetch(&store, "E"), original[0]);
}

#[test]
fn test_validation_failure_restores_linked_siblings() {
    let mut store = extended_family();
    let c = fetch(&store, "C");
    let i = fetch(&store, "I");
    let mut sibs = vec![i.clone(), Individual::new("P", Gender::Male).with_kind("pet")];

    let result = TransactionalBatch::new(&mut store).add_siblings(&c, &mut sibs);
    assert!(matches!(result, Err(KinshipError::IncompatibleObjectKind { .. })));
    assert_eq!(sibs[0], i);
    assert_eq!(fetch(&store, "I"), i);
}

#[test]
fn test_batch_joins_enclosing_transaction() {
    let mut store = nuclear_family_with_half_brother();
    let c = fetch(&store, "C");
    let mut sibs = vec![fetch(&store, "E")];

    let result: kinship::Result<()> = store.transaction(|tx| {
        TransactionalBatch::new(tx).add_siblings(&c, &mut sibs)?;
        Err(KinshipError::incompatible("abandoned by caller"))
    });

    assert!(result.is_err());
    // The batch committed into the outer scope, which then rolled back
    assert_eq!(sibs[0].mother_pnr.as_deref(), Some("B"));
    assert_eq!(fetch(&store, "E").mother_pnr, None);
}
