//! Common test utilities for netmon-live
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, RecordingPresenter, ScriptedConnector};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let (presenter, mut observations) = RecordingPresenter::new();
//!     let (connector, mut sessions) = ScriptedConnector::sessions(1);
//!     // ...
//! }
//! ```

pub mod connector;
pub mod presenter;

// Re-export commonly used items
pub use connector::{PushSession, ScriptedConnector};
pub use presenter::{Matcher, Observation, Observations, RecordingPresenter};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
