use covenant::{PROFILE, ensure, maintains, require, run_strict};

#[maintains(self.count <= self.capacity)]
#[derive(Debug)]
struct Counter {
    count: u32,
    capacity: u32,
}

impl Counter {
    fn append(&mut self) {
        let old_count = self.count;
        run_strict(self, old_count, |old, counter| {
            require!(counter.count < counter.capacity, "counter is full");
            counter.count += 1;
            ensure!(counter.count == old + 1, "append adds exactly one");
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    tracing::info!(profile = %PROFILE, "contract checking");

    let mut counter = Counter {
        count: 0,
        capacity: 2,
    };

    // These calls satisfy the contract
    counter.append();
    counter.append();
    println!("Counter after valid appends: {:?}", counter);

    // This call violates the precondition (no capacity left). A debug build
    // panics here; with `--features log` the body carries on and the
    // invariant afterwards is reported too.
    counter.append();
    println!("Counter after violating append: {:?}", counter);
}
