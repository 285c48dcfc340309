//! Toy text API: font selection, text rendering and metrics, font faces
//! and rendering options.

use super::context_ok;
use crate::adapter::{Args, OpTable};
use crate::enums::{status_result, Antialias, FontSlant, FontWeight, Status};
use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;
use std::ffi::CStr;

pub(super) fn register(table: &mut OpTable) {
    table.def("select_font_face", 4, select_font_face);
    table.def("set_font_size", 2, set_font_size);
    table.def("set_font_matrix", 2, set_font_matrix);
    table.def("get_font_matrix", 1, get_font_matrix);
    table.def("show_text", 2, show_text);
    table.def("text_extents", 2, text_extents);
    table.def("font_extents", 1, font_extents);
    table.def("set_font_face", 2, set_font_face);
    table.def("get_font_face", 1, get_font_face);
    table.def("toy_font_face_create", 3, toy_font_face_create);
    table.def("toy_font_face_get_family", 1, toy_font_face_get_family);
    table.def("toy_font_face_get_slant", 1, toy_font_face_get_slant);
    table.def("toy_font_face_get_weight", 1, toy_font_face_get_weight);
    table.def("font_face_status", 1, font_face_status);
    table.def("font_options_create", 0, font_options_create);
    table.def("font_options_copy", 1, font_options_copy);
    table.def("font_options_status", 1, font_options_status);
    table.def("font_options_set_antialias", 2, font_options_set_antialias);
    table.def("font_options_get_antialias", 1, font_options_get_antialias);
    table.def("font_options_merge", 2, font_options_merge);
    table.def("font_options_equal", 2, font_options_equal);
    table.def("set_font_options", 2, set_font_options);
    table.def("get_font_options", 1, get_font_options);
}

fn select_font_face(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let family = args.cstring()?;
    let slant = FontSlant::from_tag(args.tag()?)?;
    let weight = FontWeight::from_tag(args.tag()?)?;
    unsafe {
        ffi::cairo_select_font_face(cr, family.as_ptr(), slant.to_native(), weight.to_native())
    };
    context_ok(args.op(), cr)
}

fn set_font_size(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let size = args.float()?;
    unsafe { ffi::cairo_set_font_size(cr, size) };
    context_ok(args.op(), cr)
}

fn set_font_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let matrix = args.matrix()?;
    unsafe { ffi::cairo_set_font_matrix(cr, &matrix) };
    context_ok(args.op(), cr)
}

fn get_font_matrix(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut matrix = ffi::cairo_matrix_t::default();
    unsafe { ffi::cairo_get_font_matrix(cr, &mut matrix) };
    Ok(Value::from_matrix(&matrix))
}

fn show_text(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let text = args.cstring()?;
    unsafe { ffi::cairo_show_text(cr, text.as_ptr()) };
    context_ok(args.op(), cr)
}

fn text_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let text = args.cstring()?;
    let mut extents = ffi::cairo_text_extents_t::default();
    unsafe { ffi::cairo_text_extents(cr, text.as_ptr(), &mut extents) };
    status_result(args.op(), unsafe { ffi::cairo_status(cr) })?;
    Ok(Value::Tuple(vec![
        Value::Float(extents.x_bearing),
        Value::Float(extents.y_bearing),
        Value::Float(extents.width),
        Value::Float(extents.height),
        Value::Float(extents.x_advance),
        Value::Float(extents.y_advance),
    ]))
}

fn font_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let mut extents = ffi::cairo_font_extents_t::default();
    unsafe { ffi::cairo_font_extents(cr, &mut extents) };
    status_result(args.op(), unsafe { ffi::cairo_status(cr) })?;
    Ok(Value::Tuple(vec![
        Value::Float(extents.ascent),
        Value::Float(extents.descent),
        Value::Float(extents.height),
        Value::Float(extents.max_x_advance),
        Value::Float(extents.max_y_advance),
    ]))
}

fn set_font_face(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let face = args.font_face()?;
    unsafe { ffi::cairo_set_font_face(cr, face) };
    context_ok(args.op(), cr)
}

fn get_font_face(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let face = unsafe { ffi::cairo_get_font_face(cr) };
    // owned by the context
    let handle = rt
        .registry()
        .register_borrowed(HandleKind::FontFace, face.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_font_face_status(face) })?;
    Ok(Value::Handle(handle))
}

fn toy_font_face_create(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let family = args.cstring()?;
    let slant = FontSlant::from_tag(args.tag()?)?;
    let weight = FontWeight::from_tag(args.tag()?)?;
    let face = unsafe {
        ffi::cairo_toy_font_face_create(family.as_ptr(), slant.to_native(), weight.to_native())
    };
    let handle = rt
        .registry()
        .register_owned(HandleKind::FontFace, face.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_font_face_status(face) })?;
    Ok(Value::Handle(handle))
}

fn toy_font_face_get_family(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let face = args.font_face()?;
    let family = unsafe { ffi::cairo_toy_font_face_get_family(face) };
    if family.is_null() {
        return Err(CallError::NativeStatus {
            op: args.op(),
            status: Status::NullPointer,
        });
    }
    let family = unsafe { CStr::from_ptr(family) };
    Ok(Value::Text(family.to_string_lossy().into_owned()))
}

fn toy_font_face_get_slant(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let face = args.font_face()?;
    let raw = unsafe { ffi::cairo_toy_font_face_get_slant(face) };
    Ok(Value::tag(FontSlant::from_native(raw)?.tag()))
}

fn toy_font_face_get_weight(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let face = args.font_face()?;
    let raw = unsafe { ffi::cairo_toy_font_face_get_weight(face) };
    Ok(Value::tag(FontWeight::from_native(raw)?.tag()))
}

fn font_face_status(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let face = args.font_face()?;
    let raw = unsafe { ffi::cairo_font_face_status(face) };
    Ok(Value::tag(Status::from_native(raw)?.tag()))
}

fn font_options_create(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let options = unsafe { ffi::cairo_font_options_create() };
    let handle = rt
        .registry()
        .register_owned(HandleKind::FontOptions, options.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_font_options_status(options) })?;
    Ok(Value::Handle(handle))
}

fn font_options_copy(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let original = args.font_options()?;
    let copy = unsafe { ffi::cairo_font_options_copy(original) };
    let handle = rt
        .registry()
        .register_owned(HandleKind::FontOptions, copy.cast())?;
    status_result(args.op(), unsafe { ffi::cairo_font_options_status(copy) })?;
    Ok(Value::Handle(handle))
}

fn font_options_status(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let options = args.font_options()?;
    let raw = unsafe { ffi::cairo_font_options_status(options) };
    Ok(Value::tag(Status::from_native(raw)?.tag()))
}

fn font_options_set_antialias(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let options = args.font_options()?;
    let antialias = Antialias::from_tag(args.tag()?)?;
    unsafe { ffi::cairo_font_options_set_antialias(options, antialias.to_native()) };
    status_result(args.op(), unsafe { ffi::cairo_font_options_status(options) })?;
    Ok(Value::Unit)
}

fn font_options_get_antialias(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let options = args.font_options()?;
    let raw = unsafe { ffi::cairo_font_options_get_antialias(options) };
    Ok(Value::tag(Antialias::from_native(raw)?.tag()))
}

fn font_options_merge(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let options = args.font_options()?;
    let other = args.font_options()?;
    unsafe { ffi::cairo_font_options_merge(options, other) };
    status_result(args.op(), unsafe { ffi::cairo_font_options_status(options) })?;
    Ok(Value::Unit)
}

fn font_options_equal(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let options = args.font_options()?;
    let other = args.font_options()?;
    Ok(Value::Bool(
        unsafe { ffi::cairo_font_options_equal(options, other) } != 0,
    ))
}

fn set_font_options(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let options = args.font_options()?;
    unsafe { ffi::cairo_set_font_options(cr, options) };
    context_ok(args.op(), cr)
}

/// The native call fills a caller-provided options object, so the result is
/// a fresh owned copy rather than a borrow.
fn get_font_options(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let cr = args.context()?;
    let options = unsafe { ffi::cairo_font_options_create() };
    let handle = rt
        .registry()
        .register_owned(HandleKind::FontOptions, options.cast())?;
    unsafe { ffi::cairo_get_font_options(cr, options) };
    status_result(args.op(), unsafe { ffi::cairo_font_options_status(options) })?;
    Ok(Value::Handle(handle))
}
