pub mod logging;
pub mod net;

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique connection id.
pub fn get_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
