//! Derivations over the annotated event set
//!
//! Matches are annotated once; playing time, danger passes and interceptions
//! are independent reads of the same annotated matches, joined by [`kpi`].

pub mod annotate;
pub mod context;
pub mod danger;
pub mod interceptions;
pub mod kpi;

pub use annotate::*;
pub use context::*;
pub use danger::*;
pub use interceptions::*;
pub use kpi::*;
