use std::io;

use kinship::{Gender, Individual, MemoryStore, PedigreeStore, StoreError};
use kinship::store::StoreResult;

/// Two parents with two sons
///
/// A(male) and B(female) are the parents of C(male) and D(male).
#[must_use]
pub fn nuclear_family() -> MemoryStore {
    MemoryStore::from_individuals([
        Individual::new("A", Gender::Male),
        Individual::new("B", Gender::Female),
        Individual::new("C", Gender::Male).with_father("A").with_mother("B"),
        Individual::new("D", Gender::Male).with_father("A").with_mother("B"),
    ])
}

/// `nuclear_family` plus a wider pedigree
///
/// - E(male): father A, no mother
/// - F(female): father A, mother B
/// - G(male): father C, mother F, so A and B are reachable twice
/// - H(female): father A, mother I
/// - I(female): no parents
/// - U(unknown gender): no parents
#[must_use]
pub fn extended_family() -> MemoryStore {
    let mut store = nuclear_family();
    for individual in [
        Individual::new("E", Gender::Male).with_father("A"),
        Individual::new("F", Gender::Female).with_father("A").with_mother("B"),
        Individual::new("G", Gender::Male).with_father("C").with_mother("F"),
        Individual::new("I", Gender::Female),
        Individual::new("H", Gender::Female).with_father("A").with_mother("I"),
        Individual::new("U", Gender::Unknown),
    ] {
        store.insert(individual);
    }
    store
}

/// Fetch a record that must exist
#[must_use]
pub fn fetch<S: PedigreeStore>(store: &S, pnr: &str) -> Individual {
    store
        .find(pnr)
        .expect("store lookup failed")
        .unwrap_or_else(|| panic!("{pnr} missing from fixture"))
}

/// PNRs of `individuals`, in order
#[must_use]
pub fn pnrs(individuals: &[Individual]) -> Vec<&str> {
    individuals.iter().map(|i| i.pnr.as_str()).collect()
}

/// Store whose `save` fails for one chosen PNR
///
/// Everything else is delegated to a `MemoryStore`, with transactions
/// snapshotting the inner store so a failing save exercises rollback.
#[derive(Debug, Clone)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_on: String,
    pub saves: usize,
}

impl FlakyStore {
    #[must_use]
    pub fn new(inner: MemoryStore, fail_on: &str) -> Self {
        Self {
            inner,
            fail_on: fail_on.to_string(),
            saves: 0,
        }
    }
}

impl PedigreeStore for FlakyStore {
    fn find(&self, pnr: &str) -> StoreResult<Option<Individual>> {
        self.inner.find(pnr)
    }

    fn find_by_father_id(&self, pnr: &str) -> StoreResult<Vec<Individual>> {
        self.inner.find_by_father_id(pnr)
    }

    fn find_by_mother_id(&self, pnr: &str) -> StoreResult<Vec<Individual>> {
        self.inner.find_by_mother_id(pnr)
    }

    fn save(&mut self, individual: &Individual) -> StoreResult<()> {
        if individual.pnr == self.fail_on {
            return Err(StoreError::Io(io::Error::other("disk full")));
        }
        self.saves += 1;
        self.inner.save(individual)
    }

    fn transaction<T, E, F>(&mut self, body: F) -> Result<T, E>
    where
        Self: Sized,
        E: From<StoreError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        let snapshot = self.inner.clone();
        let result = body(self);
        if result.is_err() {
            self.inner = snapshot;
        }
        result
    }
}
