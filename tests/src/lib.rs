//! # Pharma-Chain Test Suite
//!
//! Workspace-level tests that drive `pharma-ledger` the way a contract host
//! would.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Manufacturer → hospital → patient lifecycle
//!     ├── concurrency.rs  # Parallel invocations on a multi-thread runtime
//!     ├── recovery.rs     # Ledger faults and restarts over existing state
//!     ├── telemetry.rs    # Logging bootstrap and metrics exposition
//!     └── contract.rs     # String-argument invocations through the router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pharma-tests
//!
//! # By category
//! cargo test -p pharma-tests integration::concurrency::
//!
//! # Benchmarks
//! cargo bench -p pharma-tests
//! ```

#![allow(dead_code)]

pub mod integration;
