//! Pipeline stages for batch SVG-to-PDF conversion.
//!
//! Each submodule implements exactly one step of the per-file decision
//! procedure. Keeping stages separate makes each independently testable and
//! lets us swap implementations (e.g. a different discovery strategy) without
//! touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! discover ──▶ freshness ──▶ spawn
//! (walk/filter) (mtime check)  (external converter)
//! ```
//!
//! 1. [`discover`]  — enumerate candidates and filter to SVG inputs
//! 2. [`freshness`] — compare input/output mtimes to decide skip vs render
//! 3. [`spawn`]     — run the external converter and classify its exit

pub mod discover;
pub mod freshness;
pub mod spawn;
