//! submission-portal - coordination core of a creative-work submission portal
//!
//! Users upload work (files plus metadata), browse and filter their past
//! submissions, and edit them. This crate holds the view state, its reducer,
//! the filter engine, the collaborator services, and the lifecycle controller
//! driving the two-phase upload-then-persist protocol.

pub mod config;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod service;
pub mod state;
pub mod types;
