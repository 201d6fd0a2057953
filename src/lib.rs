#![doc(test(attr(deny(warnings))))]

//! Split Core offers expense-sheet primitives for client-side cost
//! splitting: named sheets of people and shared expenses, derived per-person
//! totals, and pairwise who-owes-whom balances.

pub mod domain;
pub mod engine;
pub mod errors;
pub mod manager;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
