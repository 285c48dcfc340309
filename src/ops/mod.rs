//! The wrapped-call surface, one module per native API area.
//!
//! Every handler follows the same shape: decode the subject handle and the
//! remaining arguments, make exactly one native call (plus its status
//! query), encode the result.  Handlers hold no state of their own.

use crate::adapter::{Args, OpTable};
use crate::enums::status_result;
use crate::error::CallError;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;
use std::ffi::CStr;

mod context;
mod matrix;
mod path;
mod pattern;
mod region;
mod surface;
mod text;

pub(crate) fn register(table: &mut OpTable) {
    table.def("version", 0, version);
    table.def("version_string", 0, version_string);
    context::register(table);
    matrix::register(table);
    path::register(table);
    pattern::register(table);
    region::register(table);
    surface::register(table);
    text::register(table);
}

fn version(_rt: &Runtime, _args: &mut Args) -> Result<Value, CallError> {
    Ok(Value::Int(unsafe { ffi::cairo_version() } as i64))
}

fn version_string(_rt: &Runtime, _args: &mut Args) -> Result<Value, CallError> {
    let s = unsafe { CStr::from_ptr(ffi::cairo_version_string()) };
    Ok(Value::Text(s.to_string_lossy().into_owned()))
}

/// Post-call check for operations that mutate a drawing context; the
/// native library latches errors in the context instead of returning them.
fn context_ok(op: &'static str, cr: *mut ffi::cairo_t) -> Result<Value, CallError> {
    status_result(op, unsafe { ffi::cairo_status(cr) })?;
    Ok(Value::Unit)
}
