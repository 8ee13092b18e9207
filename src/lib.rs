// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera rig and DOM panel helpers for a browser-based 3D scene editor.
//!
//! The crate holds two independent pieces:
//!
//! - [`editor::Editor`] - the camera rig. It owns a perspective camera and a
//!   scene root, collects keyboard and mouse-drag input through an
//!   [`input::InputSource`], and moves the camera once per frame. Given a
//!   [`editor::RenderHost`] it also wires a transform gizmo, pan-only orbit
//!   controls, a selection helper and the host's outline pass.
//! - [`dom::ElementUi`] - a chainable wrapper over a single DOM element used
//!   to build editor panels, generic over a [`dom::DomNode`] backend.
//!
//! # Platforms
//!
//! Everything above compiles natively and is driven by the in-memory DOM
//! ([`dom::memory`]) and direct [`input::InputSink`] pushes. The `web`
//! feature adds the `web-sys` backend and a window-level input source in
//! [`web`].
//!
//! Runtime configuration lives in [`options::Options`] and round-trips
//! through TOML.

pub mod camera;
pub mod dom;
pub mod editor;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use editor::Editor;
pub use error::EditorError;
