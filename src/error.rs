//! Typed failures surfaced at the host boundary.

use crate::enums::Status;
use crate::handle::HandleKind;
use thiserror::Error;

/// Everything that can go wrong between the host runtime handing us a call
/// and the wrapped native operation completing.  All variants are detected
/// synchronously; nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    #[error("no such operation {0:?}")]
    UnknownOperation(String),

    /// Wrong argument count.  Raised before any argument is decoded and
    /// before any native call is made.
    #[error("{op}: expected {expected} arguments, got {got}")]
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// An argument had the wrong shape (non-numeric where a number was
    /// expected, malformed tuple, text with an interior NUL, ...).
    #[error("{op}: argument {index} must be {expected}, got {got}")]
    ArgumentType {
        op: &'static str,
        index: usize,
        expected: &'static str,
        got: String,
    },

    /// A handle argument was tagged with a different kind than the
    /// operation requires.
    #[error("expected a {expected} handle, got a {got} handle")]
    KindMismatch {
        expected: HandleKind,
        got: HandleKind,
    },

    /// The handle's native pointer is null, either because construction
    /// failed upstream or because the handle was already finalized.
    #[error("{kind} handle no longer refers to a native object")]
    NullHandle { kind: HandleKind },

    #[error("unknown {category} tag {tag:?}")]
    UnknownEnumerant {
        category: &'static str,
        tag: String,
    },

    #[error("native {category} value {value} has no mapping")]
    UnmappedNativeValue {
        category: &'static str,
        value: i32,
    },

    /// The wrapped native call reported a non-success status.
    #[error("{op}: {status}")]
    NativeStatus { op: &'static str, status: Status },

    /// A constructing call produced nothing to track.
    #[error("could not allocate a {kind} handle")]
    Allocation { kind: HandleKind },
}
