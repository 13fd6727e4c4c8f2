//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    API     │
//!             │  Adapter   │          │  (fetch)   │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`country`]: The `Country` record as served by the endpoint
//! - [`regions`]: Distinct regions in first-seen order
//! - [`filter`]: Name-prefix and region filtering
//! - [`store`]: Loaded countries, selection slot, lookups
//! - [`route`]: Paths, routes and the history stack
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered configuration
//! - [`prefs`]: The persisted dark-mode flag

pub mod action;
pub mod config;
pub mod country;
pub mod filter;
pub mod prefs;
pub mod regions;
pub mod route;
pub mod state;
pub mod store;
