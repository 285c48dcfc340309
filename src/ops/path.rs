//! Path construction and inspection.

use super::context_ok;
use crate::adapter::{Args, OpTable};
use crate::enums::status_result;
use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;

pub(super) fn register(table: &mut OpTable) {
    table.def("copy_path", 1, copy_path);
    table.def("copy_path_flat", 1, copy_path_flat);
    table.def("append_path", 2, append_path);
    table.def("has_current_point", 1, has_current_point);
    table.def("get_current_point", 1, get_current_point);
    table.def("new_path", 1, new_path);
    table.def("new_sub_path", 1, new_sub_path);
    table.def("close_path", 1, close_path);
    table.def("arc", 6, arc);
    table.def("arc_negative", 6, arc_negative);
    table.def("curve_to", 7, curve_to);
    table.def("line_to", 3, line_to);
    table.def("move_to", 3, move_to);
    table.def("rectangle", 5, rectangle);
    table.def("rel_curve_to", 7, rel_curve_to);
    table.def("rel_line_to", 3, rel_line_to);
    table.def("rel_move_to", 3, rel_move_to);
    table.def("path_extents", 1, path_extents);
}

/// Register a path snapshot copied out of a context.  The snapshot must be
/// destroyed even when its status is an error, so it is wrapped before the
/// status check.
fn wrap_path(
    rt: &Runtime,
    op: &'static str,
    path: *mut ffi::cairo_path_t,
) -> Result<Value, CallError> {
    let handle = rt.registry().register_owned(HandleKind::Path, path.cast())?;
    status_result(op, unsafe { (*path).status })?;
    Ok(Value::Handle(handle))
}

fn copy_path(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let path = unsafe { ffi::cairo_copy_path(cr) };
    wrap_path(rt, args.op(), path)
}

fn copy_path_flat(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let path = unsafe { ffi::cairo_copy_path_flat(cr) };
    wrap_path(rt, args.op(), path)
}

fn append_path(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let path = args.path()?;
    unsafe { ffi::cairo_append_path(cr, path) };
    context_ok(args.op(), cr)
}

fn has_current_point(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    Ok(Value::Bool(unsafe { ffi::cairo_has_current_point(cr) } != 0))
}

fn get_current_point(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let (mut x, mut y) = (0f64, 0f64);
    unsafe { ffi::cairo_get_current_point(cr, &mut x, &mut y) };
    Ok(Value::pair(x, y))
}

fn new_path(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_new_path(cr) };
    context_ok(args.op(), cr)
}

fn new_sub_path(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_new_sub_path(cr) };
    context_ok(args.op(), cr)
}

fn close_path(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_close_path(cr) };
    context_ok(args.op(), cr)
}

fn arc(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let xc = args.float()?;
    let yc = args.float()?;
    let radius = args.float()?;
    let angle1 = args.float()?;
    let angle2 = args.float()?;
    unsafe { ffi::cairo_arc(cr, xc, yc, radius, angle1, angle2) };
    context_ok(args.op(), cr)
}

fn arc_negative(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let xc = args.float()?;
    let yc = args.float()?;
    let radius = args.float()?;
    let angle1 = args.float()?;
    let angle2 = args.float()?;
    unsafe { ffi::cairo_arc_negative(cr, xc, yc, radius, angle1, angle2) };
    context_ok(args.op(), cr)
}

fn curve_to(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x1 = args.float()?;
    let y1 = args.float()?;
    let x2 = args.float()?;
    let y2 = args.float()?;
    let x3 = args.float()?;
    let y3 = args.float()?;
    unsafe { ffi::cairo_curve_to(cr, x1, y1, x2, y2, x3, y3) };
    context_ok(args.op(), cr)
}

fn line_to(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x = args.float()?;
    let y = args.float()?;
    unsafe { ffi::cairo_line_to(cr, x, y) };
    context_ok(args.op(), cr)
}

fn move_to(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x = args.float()?;
    let y = args.float()?;
    unsafe { ffi::cairo_move_to(cr, x, y) };
    context_ok(args.op(), cr)
}

fn rectangle(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x = args.float()?;
    let y = args.float()?;
    let width = args.float()?;
    let height = args.float()?;
    unsafe { ffi::cairo_rectangle(cr, x, y, width, height) };
    context_ok(args.op(), cr)
}

fn rel_curve_to(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let dx1 = args.float()?;
    let dy1 = args.float()?;
    let dx2 = args.float()?;
    let dy2 = args.float()?;
    let dx3 = args.float()?;
    let dy3 = args.float()?;
    unsafe { ffi::cairo_rel_curve_to(cr, dx1, dy1, dx2, dy2, dx3, dy3) };
    context_ok(args.op(), cr)
}

fn rel_line_to(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let dx = args.float()?;
    let dy = args.float()?;
    unsafe { ffi::cairo_rel_line_to(cr, dx, dy) };
    context_ok(args.op(), cr)
}

fn rel_move_to(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let dx = args.float()?;
    let dy = args.float()?;
    unsafe { ffi::cairo_rel_move_to(cr, dx, dy) };
    context_ok(args.op(), cr)
}

fn path_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let (mut x1, mut y1, mut x2, mut y2) = (0f64, 0f64, 0f64, 0f64);
    unsafe { ffi::cairo_path_extents(cr, &mut x1, &mut y1, &mut x2, &mut y2) };
    Ok(Value::quad(x1, y1, x2, y2))
}
