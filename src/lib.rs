//! EmpDir - employee directory search for the terminal
//!
//! Search-as-you-type over a directory HTTP API. Keystrokes are debounced so a
//! burst of typing produces a single request, and responses are sequence
//! tagged so a slow answer to an old query never replaces newer results.
//!
//! # Features
//!
//! - **Debounced search**: one request per pause in typing (400 ms by default)
//! - **Stale-response guard**: only the newest response is ever shown
//! - **Employee cards**: name, email, department, designation and a
//!   locale-formatted joining date
//! - **One-shot mode**: `empdir search <term>` prints cards or JSON
//!
//! # Example
//!
//! ```no_run
//! use empdir::{EmployeeApi, SearchCoordinator};
//! use std::time::{Duration, Instant};
//!
//! # async fn demo() -> empdir::Result<()> {
//! let api = EmployeeApi::new("http://localhost:8000")?;
//! let mut coordinator = SearchCoordinator::new(Duration::from_millis(400));
//!
//! let now = Instant::now();
//! coordinator.set_search_text("eng", now);
//! if let Some(request) = coordinator.poll(now + Duration::from_millis(400)) {
//!     let response = api.search(&request.query).await;
//!     coordinator.apply_response(request.seq, response);
//! }
//! for employee in coordinator.results() {
//!     println!("{} <{}>", employee.name, employee.email);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod coordinator;
pub mod employee;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export main types
pub use api::EmployeeApi;
pub use config::AppConfig;
pub use coordinator::{ResponseOutcome, SearchCoordinator, SearchRequest};
pub use employee::Employee;
pub use error::{EmpDirError, Result, SearchError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
