#![forbid(unsafe_code)]

//! Collaborator contracts and primitives for the overtoc floating outline
//! panel.
//!
//! This crate defines everything the panel core needs from the outside world,
//! without depending on any concrete host:
//!
//! - [`geometry`]: pixel-space points, sizes, and the measured panel frame.
//! - [`event`]: pointer input as the panel header sees it.
//! - [`timer`]: the debounce and one-shot timer state machines that drive
//!   re-synchronization.
//! - [`document`]: the host-document contract (heading queries, id
//!   assignment, scroll requests).
//! - [`memory`]: an in-memory host document for tests and demos.
//!
//! The panel logic itself lives in `overtoc-panel`.

pub mod document;
pub mod event;
pub mod geometry;
pub mod memory;
pub mod timer;
