//! # Campus Scheduling Backend
//!
//! Backend engine for campus resource scheduling: weekly class sessions
//! scoped to student cohorts, gym opening slots scoped to gender, and the
//! personal timetable a user assembles from the session catalog. The
//! engine exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Admission control**: creating a session or slot checks the new
//!   interval against existing records for the same owner and weekday,
//!   rejecting overlaps before anything is persisted
//! - **Timetable management**: per-user selections with atomic replace-all
//!   semantics and a pairwise conflict report computed on every read
//! - **Calendar export**: projects weekly recurring sessions onto concrete
//!   dates and renders an iCalendar document with stable event UIDs
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and DTO re-exports for API consumers
//! - [`models`]: Core record and value types (intervals, sessions, slots)
//! - [`db`]: Repository pattern and persistence layer
//! - [`scheduling`]: Business logic — admission, timetables, calendar export
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod scheduling;

#[cfg(feature = "http-server")]
pub mod http;
