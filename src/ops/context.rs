//! Operations on a drawing context: state save/restore, sources, stroke
//! and fill parameters, clipping, painting, group rendering.

use super::context_ok;
use crate::adapter::{Args, OpTable};
use crate::enums::{
    status_result, Antialias, Content, FillRule, LineCap, LineJoin, Operator, Status,
};
use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;
use libc::c_int;
use std::slice;

pub(super) fn register(table: &mut OpTable) {
    table.def("create", 1, create);
    table.def("status", 1, status);
    table.def("save", 1, save);
    table.def("restore", 1, restore);
    table.def("copy_page", 1, copy_page);
    table.def("show_page", 1, show_page);
    table.def("push_group", 1, push_group);
    table.def("push_group_with_content", 2, push_group_with_content);
    table.def("pop_group", 1, pop_group);
    table.def("pop_group_to_source", 1, pop_group_to_source);
    table.def("get_group_target", 1, get_group_target);
    table.def("set_source_rgb", 4, set_source_rgb);
    table.def("set_source_rgba", 5, set_source_rgba);
    table.def("set_source", 2, set_source);
    table.def("set_source_surface", 4, set_source_surface);
    table.def("get_source", 1, get_source);
    table.def("set_antialias", 2, set_antialias);
    table.def("get_antialias", 1, get_antialias);
    table.def("set_dash", 3, set_dash);
    table.def("get_dash_count", 1, get_dash_count);
    table.def("get_dash", 1, get_dash);
    table.def("set_fill_rule", 2, set_fill_rule);
    table.def("get_fill_rule", 1, get_fill_rule);
    table.def("set_line_cap", 2, set_line_cap);
    table.def("get_line_cap", 1, get_line_cap);
    table.def("set_line_join", 2, set_line_join);
    table.def("get_line_join", 1, get_line_join);
    table.def("set_line_width", 2, set_line_width);
    table.def("get_line_width", 1, get_line_width);
    table.def("set_miter_limit", 2, set_miter_limit);
    table.def("get_miter_limit", 1, get_miter_limit);
    table.def("set_operator", 2, set_operator);
    table.def("get_operator", 1, get_operator);
    table.def("set_tolerance", 2, set_tolerance);
    table.def("get_tolerance", 1, get_tolerance);
    table.def("clip", 1, clip);
    table.def("clip_preserve", 1, clip_preserve);
    table.def("reset_clip", 1, reset_clip);
    table.def("clip_extents", 1, clip_extents);
    table.def("in_clip", 3, in_clip);
    table.def("copy_clip_rectangle_list", 1, copy_clip_rectangle_list);
    table.def("fill", 1, fill);
    table.def("fill_preserve", 1, fill_preserve);
    table.def("fill_extents", 1, fill_extents);
    table.def("in_fill", 3, in_fill);
    table.def("mask", 2, mask);
    table.def("mask_surface", 4, mask_surface);
    table.def("paint", 1, paint);
    table.def("paint_with_alpha", 2, paint_with_alpha);
    table.def("stroke", 1, stroke);
    table.def("stroke_preserve", 1, stroke_preserve);
    table.def("stroke_extents", 1, stroke_extents);
    table.def("in_stroke", 3, in_stroke);
    table.def("get_target", 1, get_target);
}

fn create(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let cr = unsafe { ffi::cairo_create(surface) };
    let handle = rt
        .registry()
        .register_owned(HandleKind::Context, cr.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_status(cr) })?;
    Ok(Value::Handle(handle))
}

fn status(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_status(cr) };
    Ok(Value::tag(Status::from_native(raw)?.tag()))
}

fn save(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_save(cr) };
    context_ok(args.op(), cr)
}

fn restore(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_restore(cr) };
    context_ok(args.op(), cr)
}

fn copy_page(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_copy_page(cr) };
    context_ok(args.op(), cr)
}

fn show_page(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_show_page(cr) };
    context_ok(args.op(), cr)
}

fn push_group(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_push_group(cr) };
    context_ok(args.op(), cr)
}

fn push_group_with_content(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let content = Content::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_push_group_with_content(cr, content.to_native()) };
    context_ok(args.op(), cr)
}

fn pop_group(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let pattern = unsafe { ffi::cairo_pop_group(cr) };
    let handle = rt
        .registry()
        .register_owned(HandleKind::Pattern, pattern.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Handle(handle))
}

fn pop_group_to_source(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_pop_group_to_source(cr) };
    context_ok(args.op(), cr)
}

fn get_group_target(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let surface = unsafe { ffi::cairo_get_group_target(cr) };
    // owned by the context
    let handle = rt
        .registry()
        .register_borrowed(HandleKind::Surface, surface.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::Handle(handle))
}

fn set_source_rgb(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let red = args.float()?;
    let green = args.float()?;
    let blue = args.float()?;
    unsafe { ffi::cairo_set_source_rgb(cr, red, green, blue) };
    context_ok(args.op(), cr)
}

fn set_source_rgba(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let red = args.float()?;
    let green = args.float()?;
    let blue = args.float()?;
    let alpha = args.float()?;
    unsafe { ffi::cairo_set_source_rgba(cr, red, green, blue, alpha) };
    context_ok(args.op(), cr)
}

fn set_source(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let pattern = args.pattern()?;
    unsafe { ffi::cairo_set_source(cr, pattern) };
    context_ok(args.op(), cr)
}

fn set_source_surface(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let surface = args.surface()?;
    let x = args.float()?;
    let y = args.float()?;
    unsafe { ffi::cairo_set_source_surface(cr, surface, x, y) };
    context_ok(args.op(), cr)
}

fn get_source(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let pattern = unsafe { ffi::cairo_get_source(cr) };
    // owned by the context
    let handle = rt
        .registry()
        .register_borrowed(HandleKind::Pattern, pattern.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_pattern_status(pattern) })?;
    Ok(Value::Handle(handle))
}

fn set_antialias(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let antialias = Antialias::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_set_antialias(cr, antialias.to_native()) };
    context_ok(args.op(), cr)
}

fn get_antialias(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_get_antialias(cr) };
    Ok(Value::tag(Antialias::from_native(raw)?.tag()))
}

fn set_dash(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let dashes = args.float_list()?;
    let offset = args.float()?;
    unsafe { ffi::cairo_set_dash(cr, dashes.as_ptr(), dashes.len() as c_int, offset) };
    context_ok(args.op(), cr)
}

fn get_dash_count(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    Ok(Value::Int(unsafe { ffi::cairo_get_dash_count(cr) } as i64))
}

fn get_dash(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    status_result(args.op(), unsafe { ffi::cairo_status(cr) })?;
    let count = unsafe { ffi::cairo_get_dash_count(cr) };
    let mut dashes = vec![0f64; count as usize];
    let mut offset = 0f64;
    unsafe { ffi::cairo_get_dash(cr, dashes.as_mut_ptr(), &mut offset) };
    Ok(Value::Tuple(vec![
        Value::List(dashes.into_iter().map(Value::Float).collect()),
        Value::Float(offset),
    ]))
}

fn set_fill_rule(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let rule = FillRule::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_set_fill_rule(cr, rule.to_native()) };
    context_ok(args.op(), cr)
}

fn get_fill_rule(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_get_fill_rule(cr) };
    Ok(Value::tag(FillRule::from_native(raw)?.tag()))
}

fn set_line_cap(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let cap = LineCap::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_set_line_cap(cr, cap.to_native()) };
    context_ok(args.op(), cr)
}

fn get_line_cap(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_get_line_cap(cr) };
    Ok(Value::tag(LineCap::from_native(raw)?.tag()))
}

fn set_line_join(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let join = LineJoin::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_set_line_join(cr, join.to_native()) };
    context_ok(args.op(), cr)
}

fn get_line_join(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_get_line_join(cr) };
    Ok(Value::tag(LineJoin::from_native(raw)?.tag()))
}

fn set_line_width(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let width = args.float()?;
    unsafe { ffi::cairo_set_line_width(cr, width) };
    context_ok(args.op(), cr)
}

fn get_line_width(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    Ok(Value::Float(unsafe { ffi::cairo_get_line_width(cr) }))
}

fn set_miter_limit(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let limit = args.float()?;
    unsafe { ffi::cairo_set_miter_limit(cr, limit) };
    context_ok(args.op(), cr)
}

fn get_miter_limit(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    Ok(Value::Float(unsafe { ffi::cairo_get_miter_limit(cr) }))
}

fn set_operator(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let op = Operator::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_set_operator(cr, op.to_native()) };
    context_ok(args.op(), cr)
}

fn get_operator(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_get_operator(cr) };
    Ok(Value::tag(Operator::from_native(raw)?.tag()))
}

fn set_tolerance(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let tolerance = args.float()?;
    unsafe { ffi::cairo_set_tolerance(cr, tolerance) };
    context_ok(args.op(), cr)
}

fn get_tolerance(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    Ok(Value::Float(unsafe { ffi::cairo_get_tolerance(cr) }))
}

fn clip(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_clip(cr) };
    context_ok(args.op(), cr)
}

fn clip_preserve(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_clip_preserve(cr) };
    context_ok(args.op(), cr)
}

fn reset_clip(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_reset_clip(cr) };
    context_ok(args.op(), cr)
}

fn clip_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let (mut x1, mut y1, mut x2, mut y2) = (0f64, 0f64, 0f64, 0f64);
    unsafe { ffi::cairo_clip_extents(cr, &mut x1, &mut y1, &mut x2, &mut y2) };
    Ok(Value::quad(x1, y1, x2, y2))
}

fn in_clip(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x = args.float()?;
    let y = args.float()?;
    Ok(Value::Bool(unsafe { ffi::cairo_in_clip(cr, x, y) } != 0))
}

struct RectangleList(*mut ffi::cairo_rectangle_list_t);

impl Drop for RectangleList {
    fn drop(&mut self) {
        unsafe { ffi::cairo_rectangle_list_destroy(self.0) }
    }
}

fn copy_clip_rectangle_list(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let raw = unsafe { ffi::cairo_copy_clip_rectangle_list(cr) };
    if raw.is_null() {
        return Err(CallError::NativeStatus {
            op: args.op(),
            status: Status::NoMemory,
        });
    }
    let list = RectangleList(raw);
    let (status, rects) = unsafe {
        let l = &*list.0;
        let rects = if l.num_rectangles > 0 {
            slice::from_raw_parts(l.rectangles, l.num_rectangles as usize).to_vec()
        } else {
            Vec::new()
        };
        (l.status, rects)
    };
    // An unrepresentable clip is an error; zero rectangles is a valid
    // empty result.
    status_result(args.op(), status)?;
    Ok(Value::List(
        rects
            .iter()
            .map(|r| Value::rect(r.x, r.y, r.width, r.height))
            .collect(),
    ))
}

fn fill(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_fill(cr) };
    context_ok(args.op(), cr)
}

fn fill_preserve(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_fill_preserve(cr) };
    context_ok(args.op(), cr)
}

fn fill_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let (mut x1, mut y1, mut x2, mut y2) = (0f64, 0f64, 0f64, 0f64);
    unsafe { ffi::cairo_fill_extents(cr, &mut x1, &mut y1, &mut x2, &mut y2) };
    Ok(Value::quad(x1, y1, x2, y2))
}

fn in_fill(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x = args.float()?;
    let y = args.float()?;
    Ok(Value::Bool(unsafe { ffi::cairo_in_fill(cr, x, y) } != 0))
}

fn mask(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let pattern = args.pattern()?;
    unsafe { ffi::cairo_mask(cr, pattern) };
    context_ok(args.op(), cr)
}

fn mask_surface(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let surface = args.surface()?;
    let x = args.float()?;
    let y = args.float()?;
    unsafe { ffi::cairo_mask_surface(cr, surface, x, y) };
    context_ok(args.op(), cr)
}

fn paint(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_paint(cr) };
    context_ok(args.op(), cr)
}

fn paint_with_alpha(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let alpha = args.float()?;
    unsafe { ffi::cairo_paint_with_alpha(cr, alpha) };
    context_ok(args.op(), cr)
}

fn stroke(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_stroke(cr) };
    context_ok(args.op(), cr)
}

fn stroke_preserve(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    unsafe { ffi::cairo_stroke_preserve(cr) };
    context_ok(args.op(), cr)
}

fn stroke_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let (mut x1, mut y1, mut x2, mut y2) = (0f64, 0f64, 0f64, 0f64);
    unsafe { ffi::cairo_stroke_extents(cr, &mut x1, &mut y1, &mut x2, &mut y2) };
    Ok(Value::quad(x1, y1, x2, y2))
}

fn in_stroke(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let x = args.float()?;
    let y = args.float()?;
    Ok(Value::Bool(unsafe { ffi::cairo_in_stroke(cr, x, y) } != 0))
}

fn get_target(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let surface = unsafe { ffi::cairo_get_target(cr) };
    // owned by the context
    let handle = rt
        .registry()
        .register_borrowed(HandleKind::Surface, surface.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::Handle(handle))
}
