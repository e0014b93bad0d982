//! Paywall router - maps failed low-code actions to quota upgrade prompts.
//!
//! When an action fails, [`upgrade::classify`] decides whether the failure is
//! a quota problem the user can fix by upgrading (AI tokens, drive traffic,
//! drive storage). [`upgrade::classify_and_route`] and
//! [`upgrade::UpgradeRouter`] forward such failures to the host's prompt
//! dispatcher and leave everything else to the caller.
//!
//! ```
//! use paywall_router::action::Action;
//! use paywall_router::error::RuntimeError;
//! use paywall_router::upgrade::{classify_and_route, Classification, RecordingDispatcher, UpgradeCategory};
//!
//! let action: Action = serde_json::from_str(
//!     r#"{"actionType": "illadrive", "content": {"operation": "upload"}}"#,
//! ).unwrap();
//! let dispatcher = RecordingDispatcher::new();
//!
//! let result = classify_and_route(&action, &RuntimeError::default(), &dispatcher);
//!
//! assert_eq!(result, Classification::Prompt(UpgradeCategory::Storage));
//! assert_eq!(dispatcher.len(), 1);
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod upgrade;
