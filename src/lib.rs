//! Resource-safe binding surface exposing the cairo 2D graphics library to
//! a managed host runtime.
//!
//! Everything of substance here is lifetime plumbing: host calls arrive as
//! an operation name plus dynamic [`Value`] arguments, get arity- and
//! shape-checked, resolve their handle arguments to native pointers, make
//! one native call, and wrap the results back, registering any returned
//! pointer as either *owned* (released exactly once when the host collects
//! it) or *borrowed* (never released by us).  The drawing itself is all
//! cairo's.
//!
//! ```no_run
//! use cairo_host::{runtime, Value};
//!
//! let rt = runtime();
//! let surface = rt.invoke(
//!     "image_surface_create",
//!     &[Value::tag("argb32"), Value::Int(256), Value::Int(256)],
//! )?;
//! let cr = rt.invoke("create", &[surface])?;
//! rt.invoke("set_source_rgb", &[cr.clone(), Value::Float(1.0), Value::Float(0.0), Value::Float(0.0)])?;
//! rt.invoke("paint", &[cr])?;
//! # Ok::<(), cairo_host::CallError>(())
//! ```

pub mod adapter;
pub mod enums;
pub mod error;
pub mod handle;
mod ops;
pub mod value;

pub use adapter::{Args, OpDef, OpTable};
pub use error::CallError;
pub use handle::{Handle, HandleKind, KindTable, Registry};
pub use value::Value;

use once_cell::sync::OnceCell;
use std::ffi::CStr;

/// The read-only per-process state: the handle-kind destructor table, the
/// handle registry bound to it, and the operation table.  Built once and
/// never mutated afterwards.
pub struct Runtime {
    registry: Registry,
    ops: OpTable,
}

impl Runtime {
    /// Runtime bound to the real native destructors.
    pub fn new() -> Runtime {
        Runtime::with_kind_table(KindTable::native())
    }

    /// Runtime with a caller-supplied destructor table.  Tests use this to
    /// count finalizations without touching the native library.
    pub fn with_kind_table(kinds: &'static KindTable) -> Runtime {
        Runtime {
            registry: Registry::new(kinds),
            ops: OpTable::build(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ops(&self) -> &OpTable {
        &self.ops
    }

    /// Dispatch one host call.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        adapter::invoke(self, name, args)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

/// The process-wide runtime, created on first use.
pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceCell<Runtime> = OnceCell::new();
    RUNTIME.get_or_init(|| {
        let version = unsafe { CStr::from_ptr(cairo_ffi::cairo_version_string()) };
        log::debug!(
            "initializing binding against cairo {}",
            version.to_string_lossy()
        );
        Runtime::new()
    })
}
