//! Per-operation dispatch: arity enforcement, argument decoding, result
//! encoding.
//!
//! Operations are registered by name with a fixed arity.  [`invoke`] looks
//! the operation up, rejects a wrong argument count before decoding
//! anything, and hands the handler a cursor over the argument slice.  The
//! decoding helpers convert host values into native primitives and raise
//! `ArgumentType` before any native call can be reached.

use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;
use libc::{c_int, c_void};
use std::collections::HashMap;
use std::ffi::CString;
use std::ptr::NonNull;

pub type Handler = fn(&Runtime, &mut Args) -> Result<Value, CallError>;

pub struct OpDef {
    pub name: &'static str,
    pub arity: usize,
    pub handler: Handler,
}

/// The read-only operation table, built once at initialization.
pub struct OpTable {
    ops: HashMap<&'static str, OpDef>,
}

impl OpTable {
    pub(crate) fn build() -> OpTable {
        let mut table = OpTable {
            ops: HashMap::new(),
        };
        crate::ops::register(&mut table);
        table
    }

    pub(crate) fn def(&mut self, name: &'static str, arity: usize, handler: Handler) {
        let prev = self.ops.insert(name, OpDef {
            name,
            arity,
            handler,
        });
        debug_assert!(prev.is_none(), "operation {name} registered twice");
    }

    pub fn get(&self, name: &str) -> Option<&OpDef> {
        self.ops.get(name)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.keys().copied()
    }
}

pub fn invoke(rt: &Runtime, name: &str, args: &[Value]) -> Result<Value, CallError> {
    let def = rt
        .ops()
        .get(name)
        .ok_or_else(|| CallError::UnknownOperation(name.to_string()))?;
    if args.len() != def.arity {
        return Err(CallError::Arity {
            op: def.name,
            expected: def.arity,
            got: args.len(),
        });
    }
    log::trace!("invoke {}/{}", def.name, def.arity);
    let mut cursor = Args {
        op: def.name,
        rt,
        vals: args,
        pos: 0,
    };
    (def.handler)(rt, &mut cursor)
}

/// Cursor over an operation's argument slice.
pub struct Args<'a> {
    op: &'static str,
    rt: &'a Runtime,
    vals: &'a [Value],
    pos: usize,
}

impl<'a> Args<'a> {
    pub fn op(&self) -> &'static str {
        self.op
    }

    fn take(&mut self) -> Result<(usize, &'a Value), CallError> {
        let index = self.pos;
        // arity is checked before dispatch, so this indexing cannot fail for
        // a well-formed operation definition
        let val = self.vals.get(index).ok_or(CallError::Arity {
            op: self.op,
            expected: index + 1,
            got: self.vals.len(),
        })?;
        self.pos += 1;
        Ok((index, val))
    }

    fn mismatch(&self, index: usize, expected: &'static str, got: &Value) -> CallError {
        CallError::ArgumentType {
            op: self.op,
            index,
            expected,
            got: got.describe(),
        }
    }

    pub fn float(&mut self) -> Result<f64, CallError> {
        let (index, val) = self.take()?;
        match val {
            Value::Float(f) => Ok(*f),
            other => Err(self.mismatch(index, "float", other)),
        }
    }

    pub fn int(&mut self) -> Result<c_int, CallError> {
        let (index, val) = self.take()?;
        match val {
            Value::Int(i) => c_int::try_from(*i)
                .map_err(|_| self.mismatch(index, "int in native range", val)),
            other => Err(self.mismatch(index, "int", other)),
        }
    }

    pub fn text(&mut self) -> Result<&'a str, CallError> {
        let (index, val) = self.take()?;
        match val {
            Value::Text(s) => Ok(s),
            other => Err(self.mismatch(index, "text", other)),
        }
    }

    /// Text argument destined for the native layer: copied into a buffer
    /// sized from the input with the terminator appended.  Interior NUL
    /// cannot be represented and is an argument error.
    pub fn cstring(&mut self) -> Result<CString, CallError> {
        let (index, val) = self.take()?;
        match val {
            Value::Text(s) => CString::new(s.as_str())
                .map_err(|_| self.mismatch(index, "text without interior NUL", val)),
            other => Err(self.mismatch(index, "text", other)),
        }
    }

    pub fn tag(&mut self) -> Result<&'a str, CallError> {
        let (index, val) = self.take()?;
        match val {
            Value::Tag(tag) => Ok(tag),
            other => Err(self.mismatch(index, "tag", other)),
        }
    }

    pub fn matrix(&mut self) -> Result<ffi::cairo_matrix_t, CallError> {
        let (index, val) = self.take()?;
        val.as_matrix()
            .ok_or_else(|| self.mismatch(index, "matrix as ((xx,yx),(xy,yy),(x0,y0))", val))
    }

    /// Integer rectangle `(x, y, width, height)`.
    pub fn int_rect(&mut self) -> Result<ffi::cairo_rectangle_int_t, CallError> {
        let (index, val) = self.take()?;
        let items = match val {
            Value::Tuple(items) if items.len() == 4 => items,
            other => return Err(self.mismatch(index, "(x, y, width, height) int tuple", other)),
        };
        let mut fields = [0 as c_int; 4];
        for (item, slot) in items.iter().zip(fields.iter_mut()) {
            match item {
                Value::Int(i) => {
                    *slot = c_int::try_from(*i).map_err(|_| {
                        self.mismatch(index, "(x, y, width, height) int tuple", val)
                    })?;
                }
                _ => return Err(self.mismatch(index, "(x, y, width, height) int tuple", val)),
            }
        }
        Ok(ffi::cairo_rectangle_int_t {
            x: fields[0],
            y: fields[1],
            width: fields[2],
            height: fields[3],
        })
    }

    pub fn float_list(&mut self) -> Result<Vec<f64>, CallError> {
        let (index, val) = self.take()?;
        let items = match val {
            Value::List(items) => items,
            other => return Err(self.mismatch(index, "list of floats", other)),
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Float(f) => out.push(*f),
                _ => return Err(self.mismatch(index, "list of floats", val)),
            }
        }
        Ok(out)
    }

    fn expectation(kind: HandleKind) -> &'static str {
        match kind {
            HandleKind::Surface => "surface handle",
            HandleKind::Context => "context handle",
            HandleKind::Path => "path handle",
            HandleKind::Pattern => "pattern handle",
            HandleKind::FontFace => "font_face handle",
            HandleKind::FontOptions => "font_options handle",
            HandleKind::Region => "region handle",
        }
    }

    pub fn handle(&mut self, kind: HandleKind) -> Result<NonNull<c_void>, CallError> {
        let expected = Self::expectation(kind);
        let (index, val) = self.take()?;
        match val {
            Value::Handle(h) => self.rt.registry().resolve(h, kind),
            other => Err(self.mismatch(index, expected, other)),
        }
    }

    pub fn context(&mut self) -> Result<*mut ffi::cairo_t, CallError> {
        Ok(self.handle(HandleKind::Context)?.as_ptr().cast())
    }

    pub fn surface(&mut self) -> Result<*mut ffi::cairo_surface_t, CallError> {
        Ok(self.handle(HandleKind::Surface)?.as_ptr().cast())
    }

    pub fn path(&mut self) -> Result<*mut ffi::cairo_path_t, CallError> {
        Ok(self.handle(HandleKind::Path)?.as_ptr().cast())
    }

    pub fn pattern(&mut self) -> Result<*mut ffi::cairo_pattern_t, CallError> {
        Ok(self.handle(HandleKind::Pattern)?.as_ptr().cast())
    }

    pub fn font_face(&mut self) -> Result<*mut ffi::cairo_font_face_t, CallError> {
        Ok(self.handle(HandleKind::FontFace)?.as_ptr().cast())
    }

    pub fn font_options(&mut self) -> Result<*mut ffi::cairo_font_options_t, CallError> {
        Ok(self.handle(HandleKind::FontOptions)?.as_ptr().cast())
    }

    pub fn region(&mut self) -> Result<*mut ffi::cairo_region_t, CallError> {
        Ok(self.handle(HandleKind::Region)?.as_ptr().cast())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Runtime;

    #[test]
    fn unknown_operations_are_rejected() {
        let rt = Runtime::new();
        let err = rt.invoke("frobnicate", &[]).unwrap_err();
        assert_eq!(err, CallError::UnknownOperation("frobnicate".to_string()));
    }

    #[test]
    fn arity_is_checked_before_any_decoding() {
        let rt = Runtime::new();
        // A wrong-shaped first argument would raise ArgumentType; the wrong
        // count must win because nothing is decoded yet.
        let err = rt
            .invoke("arc", &[Value::Text("not even a handle".into())])
            .unwrap_err();
        assert_eq!(
            err,
            CallError::Arity {
                op: "arc",
                expected: 6,
                got: 1,
            }
        );
    }

    #[test]
    fn shape_errors_fire_before_the_native_call() {
        let rt = Runtime::new();
        let err = rt.invoke("matrix_invert", &[Value::Int(3)]).unwrap_err();
        assert_eq!(
            err,
            CallError::ArgumentType {
                op: "matrix_invert",
                index: 0,
                expected: "matrix as ((xx,yx),(xy,yy),(x0,y0))",
                got: "int".to_string(),
            }
        );
    }

    #[test]
    fn enum_tags_are_validated_during_decoding() {
        let rt = Runtime::new();
        let err = rt
            .invoke(
                "image_surface_create",
                &[Value::tag("argb64"), Value::Int(4), Value::Int(4)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            CallError::UnknownEnumerant {
                category: "format",
                tag: "argb64".to_string(),
            }
        );
    }

    #[test]
    fn out_of_range_ints_are_shape_errors() {
        let rt = Runtime::new();
        let err = rt
            .invoke(
                "image_surface_create",
                &[Value::tag("argb32"), Value::Int(i64::MAX), Value::Int(4)],
            )
            .unwrap_err();
        assert!(matches!(err, CallError::ArgumentType { op: "image_surface_create", index: 1, .. }));
    }
}
