//! Affine transforms: the context's current transformation matrix, and the
//! pure matrix-value operations that never touch a handle.

use super::context_ok;
use crate::adapter::{Args, OpTable};
use crate::enums::status_result;
use crate::error::CallError;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;

pub(super) fn register(table: &mut OpTable) {
    table.def("translate", 3, translate);
    table.def("scale", 3, scale);
    table.def("rotate", 2, rotate);
    table.def("transform", 2, transform);
    table.def("set_matrix", 2, set_matrix);
    table.def("get_matrix", 1, get_matrix);
    table.def("identity_matrix", 1, identity_matrix);
    table.def("user_to_device", 3, user_to_device);
    table.def("user_to_device_distance", 3, user_to_device_distance);
    table.def("device_to_user", 3, device_to_user);
    table.def("device_to_user_distance", 3, device_to_user_distance);
    table.def("matrix_init_identity", 0, matrix_init_identity);
    table.def("matrix_init_translate", 2, matrix_init_translate);
    table.def("matrix_init_scale", 2, matrix_init_scale);
    table.def("matrix_init_rotate", 1, matrix_init_rotate);
    table.def("matrix_translate", 3, matrix_translate);
    table.def("matrix_scale", 3, matrix_scale);
    table.def("matrix_rotate", 2, matrix_rotate);
    table.def("matrix_invert", 1, matrix_invert);
    table.def("matrix_multiply", 2, matrix_multiply);
    table.def("matrix_transform_point", 3, matrix_transform_point);
    table.def("matrix_transform_distance", 3, matrix_transform_distance);
}

fn translate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let tx = args.float()?;
    let ty = args.float()?;
    unsafe { ffi::cairo_translate(cr, tx, ty) };
    context_ok(args.op(), cr)
}

fn scale(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let sx = args.float()?;
    let sy = args.float()?;
    unsafe { ffi::cairo_scale(cr, sx, sy) };
    context_ok(args.op(), cr)
}

fn rotate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let angle = args.float()?;
    unsafe { ffi::cairo_rotate(cr, angle) };
    context_ok(args.op(), cr)
}

fn transform(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let matrix = args.matrix()?;
    unsafe { ffi::cairo_transform(cr, &matrix) };
    context_ok(args.op(), cr)
}

fn set_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let matrix = args.matrix()?;
    unsafe { ffi::cairo_set_matrix(cr, &matrix) };
    context_ok(args.op(), cr)
}

fn get_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_get_matrix(cr, &mut matrix) };
    Ok(Value::from_matrix(&matrix))
}

fn identity_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_identity_matrix(cr) };
    context_ok(args.op(), cr)
}

fn user_to_device(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut x = args.float()?;
    let mut y = args.float()?;
    unsafe { ffi::cairo_user_to_device(cr, &mut x, &mut y) };
    Ok(Value::pair(x, y))
}

fn user_to_device_distance(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut dx = args.float()?;
    let mut dy = args.float()?;
    unsafe { ffi::cairo_user_to_device_distance(cr, &mut dx, &mut dy) };
    Ok(Value::pair(dx, dy))
}

fn device_to_user(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut x = args.float()?;
    let mut y = args.float()?;
    unsafe { ffi::cairo_device_to_user(cr, &mut x, &mut y) };
    Ok(Value::pair(x, y))
}

fn device_to_user_distance(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut dx = args.float()?;
    let mut dy = args.float()?;
    unsafe { ffi::cairo_device_to_user_distance(cr, &mut dx, &mut dy) };
    Ok(Value::pair(dx, dy))
}

fn matrix_init_identity(_rt: &Runtime, _args: &mut Args) -> Result<Value, CallError> {
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_matrix_init_identity(&mut matrix) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_init_translate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let tx = args.float()?;
    let ty = args.float()?;
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_matrix_init_translate(&mut matrix, tx, ty) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_init_scale(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let sx = args.float()?;
    let sy = args.float()?;
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_matrix_init_scale(&mut matrix, sx, sy) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_init_rotate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let radians = args.float()?;
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_matrix_init_rotate(&mut matrix, radians) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_translate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let mut matrix = args.matrix()?;
    let tx = args.float()?;
    let ty = args.float()?;
    unsafe { ffi::cairo_matrix_translate(&mut matrix, tx, ty) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_scale(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let mut matrix = args.matrix()?;
    let sx = args.float()?;
    let sy = args.float()?;
    unsafe { ffi::cairo_matrix_scale(&mut matrix, sx, sy) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_rotate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let mut matrix = args.matrix()?;
    let radians = args.float()?;
    unsafe { ffi::cairo_matrix_rotate(&mut matrix, radians) };
    Ok(Value::from_matrix(&matrix))
}

fn matrix_invert(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let mut matrix = args.matrix()?;
    let status = unsafe { ffi::cairo_matrix_invert(&mut matrix) };
    status_result(args.op(), status)?;
    Ok(Value::from_matrix(&matrix))
}

fn matrix_multiply(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let a = args.matrix()?;
    let b = args.matrix()?;
    let mut result = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_matrix_multiply(&mut result, &a, &b) };
    Ok(Value::from_matrix(&result))
}

fn matrix_transform_point(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let matrix = args.matrix()?;
    let mut x = args.float()?;
    let mut y = args.float()?;
    unsafe { ffi::cairo_matrix_transform_point(&matrix, &mut x, &mut y) };
    Ok(Value::pair(x, y))
}

fn matrix_transform_distance(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let matrix = args.matrix()?;
    let mut dx = args.float()?;
    let mut dy = args.float()?;
    unsafe { ffi::cairo_matrix_transform_distance(&matrix, &mut dx, &mut dy) };
    Ok(Value::pair(dx, dy))
}
