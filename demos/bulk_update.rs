use covenant::{maintains, require, run_error_tolerant};

/// Inventory whose `total` mirrors the sum of all stock levels.
#[maintains(self.stock.iter().sum::<u32>() == self.total)]
#[derive(Debug)]
struct Inventory {
    stock: Vec<u32>,
    total: u32,
}

#[derive(Debug, thiserror::Error)]
enum UpdateError {
    #[error("update {position} for item {item} would take stock below zero")]
    Negative { position: usize, item: usize },
}

/// Applies stock deltas in order. On failure the deltas before the bad one
/// stay applied and `total` is left for the caller to reconcile.
fn apply_deltas(inventory: &mut Inventory, deltas: &[(usize, i64)]) -> Result<(), UpdateError> {
    run_error_tolerant(inventory, (), |_, inv| {
        for (position, &(item, delta)) in deltas.iter().enumerate() {
            require!(item < inv.stock.len(), "item index in bounds");
            let Some(level) = inv.stock.get_mut(item) else {
                continue;
            };
            let updated = i64::from(*level) + delta;
            let Ok(updated) = u32::try_from(updated) else {
                return Err(UpdateError::Negative { position, item });
            };
            *level = updated;
        }
        inv.total = inv.stock.iter().sum();
        Ok(())
    })
}

fn reconcile(inventory: &mut Inventory) {
    inventory.total = inventory.stock.iter().sum();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut inventory = Inventory {
        stock: vec![5, 10, 3],
        total: 18,
    };

    apply_deltas(&mut inventory, &[(0, 2), (2, -1)]).expect("deltas are valid");
    println!("After valid deltas: {:?}", inventory);

    // The second delta fails; the first one stays applied and no invariant
    // violation is reported for the stale total.
    if let Err(e) = apply_deltas(&mut inventory, &[(1, -4), (2, -10)]) {
        println!("Partial update: {} -> {:?}", e, inventory);
        reconcile(&mut inventory);
        println!("Reconciled: {:?}", inventory);
    }
}
