use coop_admin::domain::model::{NewCycle, NewProduct};
use coop_admin::{
    submit, submit_with_callbacks, CoopError, CycleFormSnapshot, CycleType, Persistence,
    ProductFormSnapshot, Result,
};
use std::cell::{Cell, RefCell};

struct MemoryStore<P> {
    saved: RefCell<Vec<P>>,
}

impl<P> Default for MemoryStore<P> {
    fn default() -> Self {
        Self {
            saved: RefCell::new(Vec::new()),
        }
    }
}

impl<P> Persistence<P> for MemoryStore<P> {
    fn persist(&self, payload: P) -> Result<()> {
        self.saved.borrow_mut().push(payload);
        Ok(())
    }
}

struct FailingStore;

impl Persistence<NewProduct> for FailingStore {
    fn persist(&self, _payload: NewProduct) -> Result<()> {
        Err(CoopError::PersistenceError {
            message: "database unavailable".to_string(),
        })
    }
}

fn valid_product() -> ProductFormSnapshot {
    ProductFormSnapshot {
        product_id: Some(3),
        unit: Some("Unidade".to_string()),
        weight_kg: Some("0.15".to_string()),
        base_price: Some("4,50".to_string()),
        status: None,
    }
}

#[test]
fn test_valid_product_reaches_store() {
    let store = MemoryStore::<NewProduct>::default();
    submit(&valid_product(), &store).unwrap();

    let saved = store.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].base_price.cents(), 450);
    assert_eq!(saved[0].weight_kg, 0.15);
}

#[test]
fn test_invalid_product_never_reaches_store() {
    let store = MemoryStore::<NewProduct>::default();
    let snapshot = ProductFormSnapshot {
        base_price: Some("".to_string()),
        ..valid_product()
    };

    let err = submit(&snapshot, &store).unwrap_err();
    assert!(matches!(err, CoopError::FormRejected { ref field, .. } if field == "precoBase"));
    assert!(store.saved.borrow().is_empty());
}

#[test]
fn test_cycle_submission_passes_checked_range() {
    let store = MemoryStore::<NewCycle>::default();
    let snapshot = CycleFormSnapshot {
        start: Some("2025-09-01".to_string()),
        end: Some("2025-09-16".to_string()),
        cycle_type: Some("biweekly".to_string()),
    };
    submit(&snapshot, &store).unwrap();
    assert_eq!(store.saved.borrow()[0].range.cycle_type(), CycleType::Biweekly);

    let bad = CycleFormSnapshot {
        end: Some("2025-09-15".to_string()),
        ..snapshot
    };
    let err = submit(&bad, &store).unwrap_err();
    match err {
        CoopError::InvalidCycle { errors } => {
            assert_eq!(errors, vec!["duration mismatch: expected 15 days, got 14"])
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.saved.borrow().len(), 1);
}

#[test]
fn test_callbacks_report_outcome() {
    let successes = Cell::new(0);
    let failures = RefCell::new(Vec::new());

    let store = MemoryStore::<NewProduct>::default();
    submit_with_callbacks(
        &valid_product(),
        &store,
        || successes.set(successes.get() + 1),
        |e| failures.borrow_mut().push(e.to_string()),
    );
    submit_with_callbacks(
        &valid_product(),
        &FailingStore,
        || successes.set(successes.get() + 1),
        |e| failures.borrow_mut().push(e.to_string()),
    );

    assert_eq!(successes.get(), 1);
    assert_eq!(
        failures.into_inner(),
        vec!["Persistence failed: database unavailable".to_string()]
    );
}
