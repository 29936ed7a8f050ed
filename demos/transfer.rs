use covenant::{ensure, maintains, require, run_strict};

#[maintains(self.balance >= 0)]
#[derive(Debug)]
struct Account {
    owner: &'static str,
    balance: i64,
}

#[derive(Debug, thiserror::Error)]
enum TransferError {
    #[error("{owner} has {available}, cannot send {requested}")]
    InsufficientFunds {
        owner: &'static str,
        available: i64,
        requested: i64,
    },
}

fn transfer(from: &mut Account, to: &mut Account, amount: i64) -> Result<(), TransferError> {
    let old = (from.balance, to.balance);
    run_strict(&mut (from, to), old, |&(old_from, old_to), (from, to)| {
        require!(amount > 0, "transfer amount must be positive");
        if from.balance < amount {
            return Err(TransferError::InsufficientFunds {
                owner: from.owner,
                available: from.balance,
                requested: amount,
            });
        }

        from.balance -= amount;
        to.balance += amount;

        ensure!(
            from.balance + to.balance == old_from + old_to,
            "transfer conserves the total balance"
        );
        Ok(())
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut alice = Account {
        owner: "alice",
        balance: 100,
    };
    let mut bob = Account {
        owner: "bob",
        balance: 20,
    };

    // Valid transfer
    match transfer(&mut alice, &mut bob, 30) {
        Ok(()) => println!("Moved 30: {:?} {:?}", alice, bob),
        Err(e) => println!("Transfer failed: {}", e),
    }

    // Insufficient funds is an ordinary error, the invariant is still checked
    if let Err(e) = transfer(&mut bob, &mut alice, 500) {
        println!("Transfer failed: {}", e);
    }

    // This violates the precondition: a debug build panics, `--features log`
    // only logs it
    let _ = transfer(&mut alice, &mut bob, -5);
    println!("After negative transfer: {:?} {:?}", alice, bob);
}
