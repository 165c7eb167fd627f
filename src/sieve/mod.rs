//! Partitioned parallel trial-division sieve
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────────────────────┐
//!                  │     SieveCoordinator     │
//!                  │  - spawn one per index   │
//!                  │  - join all, then merge  │
//!                  └────────────┬─────────────┘
//!                               │
//!        ┌──────────────────────┼──────────────────────┐
//!        │                      │                      │
//!  ┌─────▼─────┐          ┌─────▼─────┐          ┌─────▼─────┐
//!  │ Worker 1  │          │ Worker 2  │   ...    │ Worker W  │
//!  │ 6,6W+6,.. │          │ 12,6W+12..│          │ 6W,12W,.. │
//!  └─────┬─────┘          └─────┬─────┘          └─────┬─────┘
//!        │ private buffer       │                      │
//!        └──────────────────────┼──────────────────────┘
//!                               ▼
//!                  ┌──────────────────────────┐
//!                  │    merge (sequential)    │
//!                  │  same strides, + {2,3}   │
//!                  └────────────┬─────────────┘
//!                               ▼
//!                  ┌──────────────────────────┐
//!                  │ aggregate: count / sum / │
//!                  │     ten largest primes   │
//!                  └──────────────────────────┘
//! ```

pub mod aggregate;
pub mod coordinator;
pub mod merge;
pub mod partition;
pub mod primality;
pub mod worker;

pub use aggregate::{aggregate, PrimeStats, TOP_PRIMES};
pub use coordinator::{SieveCoordinator, SieveResult};
pub use partition::{PartialResult, SieveRange};
