//! Paint sources: solid colors, gradients, surface-backed patterns.

use crate::adapter::{Args, OpTable};
use crate::enums::{status_result, Extend, Filter, PatternType, Status};
use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;
use libc::c_int;
use std::ptr;

pub(super) fn register(table: &mut OpTable) {
    table.def("pattern_create_rgb", 3, pattern_create_rgb);
    table.def("pattern_create_rgba", 4, pattern_create_rgba);
    table.def("pattern_create_linear", 4, pattern_create_linear);
    table.def("pattern_create_radial", 6, pattern_create_radial);
    table.def("pattern_create_for_surface", 1, pattern_create_for_surface);
    table.def("pattern_add_color_stop_rgb", 5, pattern_add_color_stop_rgb);
    table.def("pattern_add_color_stop_rgba", 6, pattern_add_color_stop_rgba);
    table.def("pattern_get_color_stop_count", 1, pattern_get_color_stop_count);
    table.def("pattern_get_color_stop_rgba", 2, pattern_get_color_stop_rgba);
    table.def("pattern_get_type", 1, pattern_get_type);
    table.def("pattern_status", 1, pattern_status);
    table.def("pattern_set_extend", 2, pattern_set_extend);
    table.def("pattern_get_extend", 1, pattern_get_extend);
    table.def("pattern_set_filter", 2, pattern_set_filter);
    table.def("pattern_get_filter", 1, pattern_get_filter);
    table.def("pattern_set_matrix", 2, pattern_set_matrix);
    table.def("pattern_get_matrix", 1, pattern_get_matrix);
    table.def("pattern_get_rgba", 1, pattern_get_rgba);
    table.def("pattern_get_surface", 1, pattern_get_surface);
    table.def("pattern_get_linear_points", 1, pattern_get_linear_points);
    table.def("pattern_get_radial_circles", 1, pattern_get_radial_circles);
}

fn wrap_pattern(
    rt: &Runtime,
    op: &'static str,
    pattern: *mut ffi::cairo_pattern_t,
) -> Result<Value, CallError> {
    let handle = rt
        .registry()
        .register_owned(HandleKind::Pattern, pattern.cast())?;
    status_result(op, unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Handle(handle))
}

fn pattern_create_rgb(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let red = args.float()?;
    let green = args.float()?;
    let blue = args.float()?;
    let pattern = unsafe { ffi::cairo_pattern_create_rgb(red, green, blue) };
    wrap_pattern(rt, args.op(), pattern)
}

fn pattern_create_rgba(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let red = args.float()?;
    let green = args.float()?;
    let blue = args.float()?;
    let alpha = args.float()?;
    let pattern = unsafe { ffi::cairo_pattern_create_rgba(red, green, blue, alpha) };
    wrap_pattern(rt, args.op(), pattern)
}

fn pattern_create_linear(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let x0 = args.float()?;
    let y0 = args.float()?;
    let x1 = args.float()?;
    let y1 = args.float()?;
    let pattern = unsafe { ffi::cairo_pattern_create_linear(x0, y0, x1, y1) };
    wrap_pattern(rt, args.op(), pattern)
}

fn pattern_create_radial(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cx0 = args.float()?;
    let cy0 = args.float()?;
    let radius0 = args.float()?;
    let cx1 = args.float()?;
    let cy1 = args.float()?;
    let radius1 = args.float()?;
    let pattern =
        unsafe { ffi::cairo_pattern_create_radial(cx0, cy0, radius0, cx1, cy1, radius1) };
    wrap_pattern(rt, args.op(), pattern)
}

fn pattern_create_for_surface(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let pattern = unsafe { ffi::cairo_pattern_create_for_surface(surface) };
    wrap_pattern(rt, args.op(), pattern)
}

fn pattern_add_color_stop_rgb(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let offset = args.float()?;
    let red = args.float()?;
    let green = args.float()?;
    let blue = args.float()?;
    unsafe { ffi::cairo_pattern_add_color_stop_rgb(pattern, offset, red, green, blue) };
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Unit)
}

fn pattern_add_color_stop_rgba(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let offset = args.float()?;
    let red = args.float()?;
    let green = args.float()?;
    let blue = args.float()?;
    let alpha = args.float()?;
    unsafe { ffi::cairo_pattern_add_color_stop_rgba(pattern, offset, red, green, blue, alpha) };
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Unit)
}

fn pattern_get_color_stop_count(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let mut count: c_int = 0;
    let status = unsafe { ffi::cairo_pattern_get_color_stop_count(pattern, &mut count) };
    status_result(args.op(), status)?;
    // zero stops on a fresh gradient is a valid answer
    Ok(Value::Int(count as i64))
}

fn pattern_get_color_stop_rgba(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let index = args.int()?;
    let (mut offset, mut red, mut green, mut blue, mut alpha) = (0f64, 0f64, 0f64, 0f64, 0f64);
    let status = unsafe {
        ffi::cairo_pattern_get_color_stop_rgba(
            pattern, index, &mut offset, &mut red, &mut green, &mut blue, &mut alpha,
        )
    };
    status_result(args.op(), status)?;
    Ok(Value::Tuple(vec![
        Value::Float(offset),
        Value::Float(red),
        Value::Float(green),
        Value::Float(blue),
        Value::Float(alpha),
    ]))
}

fn pattern_get_type(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let raw = unsafe { ffi::cairo_pattern_get_type(pattern) };
    Ok(Value::tag(PatternType::from_native(raw)?.tag()))
}

fn pattern_status(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let raw = unsafe { ffi::cairo_pattern_status(pattern) };
    Ok(Value::tag(Status::from_native(raw)?.tag()))
}

fn pattern_set_extend(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let extend = Extend::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_pattern_set_extend(pattern, extend.to_native()) };
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Unit)
}

fn pattern_get_extend(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let raw = unsafe { ffi::cairo_pattern_get_extend(pattern) };
    Ok(Value::tag(Extend::from_native(raw)?.tag()))
}

fn pattern_set_filter(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let filter = Filter::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_pattern_set_filter(pattern, filter.to_native()) };
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Unit)
}

fn pattern_get_filter(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let raw = unsafe { ffi::cairo_pattern_get_filter(pattern) };
    Ok(Value::tag(Filter::from_native(raw)?.tag()))
}

fn pattern_set_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let matrix = args.matrix()?;
    unsafe { ffi::cairo_pattern_set_matrix(pattern, &matrix) };
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Unit)
}

fn pattern_get_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_pattern_get_matrix(pattern, &mut matrix) };
    Ok(Value::from_matrix(&matrix))
}

fn pattern_get_rgba(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let (mut red, mut green, mut blue, mut alpha) = (0f64, 0f64, 0f64, 0f64);
    let status = unsafe {
        ffi::cairo_pattern_get_rgba(pattern, &mut red, &mut green, &mut blue, &mut alpha)
    };
    status_result(args.op(), status)?;
    Ok(Value::quad(red, green, blue, alpha))
}

fn pattern_get_surface(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let mut surface: *mut ffi::cairo_surface_t = ptr::null_mut();
    let status = unsafe { ffi::cairo_pattern_get_surface(pattern, &mut surface) };
    status_result(args.op(), status)?;
    // owned by the pattern
    let handle = rt
        .registry()
        .register_borrowed(HandleKind::Surface, surface.cast())?;
    Ok(Value::Handle(handle))
}

fn pattern_get_linear_points(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let (mut x0, mut y0, mut x1, mut y1) = (0f64, 0f64, 0f64, 0f64);
    let status = unsafe {
        ffi::cairo_pattern_get_linear_points(pattern, &mut x0, &mut y0, &mut x1, &mut y1)
    };
    status_result(args.op(), status)?;
    Ok(Value::quad(x0, y0, x1, y1))
}

fn pattern_get_radial_circles(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let pattern = args.pattern()?;
    let (mut x0, mut y0, mut r0, mut x1, mut y1, mut r1) = (0f64, 0f64, 0f64, 0f64, 0f64, 0f64);
    let status = unsafe {
        ffi::cairo_pattern_get_radial_circles(
            pattern, &mut x0, &mut y0, &mut r0, &mut x1, &mut y1, &mut r1,
        )
    };
    status_result(args.op(), status)?;
    Ok(Value::Tuple(vec![
        Value::Float(x0),
        Value::Float(y0),
        Value::Float(r0),
        Value::Float(x1),
        Value::Float(y1),
        Value::Float(r1),
    ]))
}
