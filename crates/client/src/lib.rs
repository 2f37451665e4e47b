//! # signup-client
//!
//! Sends a validated registration to the create-user endpoint and turns the
//! outcome into the notice shown to the user.
//!
//! One POST per attempt: no retries, no duplicate-submission guard.
//!
//! ```rust,no_run
//! use signup_client::{ClientConfig, Registration, RegistrationClient, register};
//! use signup_registration::{RegistrationCandidate, SystemClock};
//!
//! # async fn run(candidate: RegistrationCandidate) -> Result<(), signup_client::SubmitError> {
//! let client = RegistrationClient::new(ClientConfig::default())?;
//! match register(&candidate, &SystemClock, &client).await {
//!     Registration::Rejected(errors) => eprintln!("{errors}"),
//!     outcome => println!("{}", outcome.notice().map(|n| n.message).unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod notice;
pub mod register;

pub use client::RegistrationClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::SubmitError;
pub use notice::{Notice, NoticeStatus};
pub use register::{Registration, register};
pub use reqwest::StatusCode;
