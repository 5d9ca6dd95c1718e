//! Computes the changes between two versions of a text as a list of
//! independently reviewable insert, delete and replace operations, then
//! applies any accepted subset of them back onto the original.
//!
//! ```
//! use suggestion_diff::{AcceptanceState, Granularity, apply_accepted, compute_diff};
//!
//! let old = "The Smart City Initiative aims to transform urban living.";
//! let new = "The City Initiative aims to revolutionize urban living.";
//!
//! let script = compute_diff(old, new, Granularity::Word);
//! assert_eq!(script.len(), 2);
//!
//! let mut acceptance = AcceptanceState::new(&script);
//! acceptance.accept("change-0".parse().unwrap());
//!
//! assert_eq!(
//!     apply_accepted(old, &script, &acceptance).unwrap(),
//!     "The City Initiative aims to transform urban living."
//! );
//! ```

mod edit_script;
mod raw_operation;
mod reconciliation;
mod tokenizer;
mod types;
mod utils;

pub use edit_script::{
    ConsistencyViolation, DiffError, EditOperation, EditScript, OperationId, OperationKind,
    compute_diff,
};
pub use reconciliation::{
    acceptance::{Acceptance, AcceptanceState},
    apply_accepted,
    review::Review,
    spans::render_spans,
};
pub use tokenizer::{
    Tokenizer, character_tokenizer::character_tokenizer, granularity::Granularity,
    line_tokenizer::line_tokenizer, token::Token, word_tokenizer::word_tokenizer,
};
pub use types::diff_span::{DiffSpan, SpanKind};

#[cfg(feature = "serde")]
pub mod transport;

#[cfg(feature = "wasm")]
pub mod wasm;
