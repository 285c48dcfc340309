//! Surface construction and inspection, plus PNG encode/decode.
//!
//! PNG transport goes through the native stream entry points with a scoped
//! Rust file on the other side of the callback, so the file handle is
//! closed on every exit path regardless of which side reported failure.

use crate::adapter::{Args, OpTable};
use crate::enums::{status_result, Content, Format, Status};
use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;
use libc::{c_uchar, c_uint, c_void};
use std::fs::File;
use std::io::{Read, Write};
use std::ptr;
use std::slice;

pub(super) fn register(table: &mut OpTable) {
    table.def("image_surface_create", 3, image_surface_create);
    table.def("image_surface_get_width", 1, image_surface_get_width);
    table.def("image_surface_get_height", 1, image_surface_get_height);
    table.def("image_surface_get_stride", 1, image_surface_get_stride);
    table.def("image_surface_get_format", 1, image_surface_get_format);
    table.def("format_stride_for_width", 2, format_stride_for_width);
    table.def("surface_status", 1, surface_status);
    table.def("surface_flush", 1, surface_flush);
    table.def("surface_finish", 1, surface_finish);
    table.def("surface_mark_dirty", 1, surface_mark_dirty);
    table.def("surface_get_content", 1, surface_get_content);
    table.def("surface_create_similar", 4, surface_create_similar);
    table.def("recording_surface_create", 1, recording_surface_create);
    table.def("recording_surface_ink_extents", 1, recording_surface_ink_extents);
    table.def("surface_write_to_png", 2, surface_write_to_png);
    table.def("image_surface_create_from_png", 1, image_surface_create_from_png);
}

/// Wrap a freshly constructed surface: register first so the reference is
/// released even when the status check fails, then check.
fn wrap_surface(
    rt: &Runtime,
    op: &'static str,
    surface: *mut ffi::cairo_surface_t,
) -> Result<Value, CallError> {
    let handle = rt
        .registry()
        .register_owned(HandleKind::Surface, surface.cast())?;
    status_result(op, unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::Handle(handle))
}

fn image_surface_create(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let format = Format::from_tag(args.tag()?)?;
    let width = args.int()?;
    let height = args.int()?;
    let surface = unsafe { ffi::cairo_image_surface_create(format.to_native(), width, height) };
    wrap_surface(rt, args.op(), surface)
}

fn image_surface_get_width(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    Ok(Value::Int(
        unsafe { ffi::cairo_image_surface_get_width(surface) } as i64,
    ))
}

fn image_surface_get_height(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    Ok(Value::Int(
        unsafe { ffi::cairo_image_surface_get_height(surface) } as i64,
    ))
}

fn image_surface_get_stride(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    Ok(Value::Int(
        unsafe { ffi::cairo_image_surface_get_stride(surface) } as i64,
    ))
}

fn image_surface_get_format(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let raw = unsafe { ffi::cairo_image_surface_get_format(surface) };
    Ok(Value::tag(Format::from_native(raw)?.tag()))
}

fn format_stride_for_width(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let format = Format::from_tag(args.tag()?)?;
    let width = args.int()?;
    Ok(Value::Int(
        unsafe { ffi::cairo_format_stride_for_width(format.to_native(), width) } as i64,
    ))
}

fn surface_status(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let raw = unsafe { ffi::cairo_surface_status(surface) };
    Ok(Value::tag(Status::from_native(raw)?.tag()))
}

fn surface_flush(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    unsafe { ffi::cairo_surface_flush(surface) };
    status_result(args.op(), unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::Unit)
}

fn surface_finish(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    unsafe { ffi::cairo_surface_finish(surface) };
    status_result(args.op(), unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::Unit)
}

fn surface_mark_dirty(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    unsafe { ffi::cairo_surface_mark_dirty(surface) };
    status_result(args.op(), unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::Unit)
}

fn surface_get_content(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let raw = unsafe { ffi::cairo_surface_get_content(surface) };
    Ok(Value::tag(Content::from_native(raw)?.tag()))
}

fn surface_create_similar(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let other = args.surface()?;
    let content = Content::from_tag(args.tag()?)?;
    let width = args.int()?;
    let height = args.int()?;
    let surface =
        unsafe { ffi::cairo_surface_create_similar(other, content.to_native(), width, height) };
    wrap_surface(rt, args.op(), surface)
}

fn recording_surface_create(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let content = Content::from_tag(args.tag()?)?;
    // null extents: the recording surface grows without bound
    let surface =
        unsafe { ffi::cairo_recording_surface_create(content.to_native(), ptr::null()) };
    wrap_surface(rt, args.op(), surface)
}

fn recording_surface_ink_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let (mut x0, mut y0, mut width, mut height) = (0f64, 0f64, 0f64, 0f64);
    unsafe {
        ffi::cairo_recording_surface_ink_extents(surface, &mut x0, &mut y0, &mut width, &mut height)
    };
    status_result(args.op(), unsafe { ffi::cairo_surface_status(surface) })?;
    Ok(Value::rect(x0, y0, width, height))
}

struct PngWriter {
    file: File,
    error: Option<std::io::Error>,
}

unsafe extern "C" fn png_write(
    closure: *mut c_void,
    data: *const c_uchar,
    length: c_uint,
) -> ffi::cairo_status_t {
    let writer = &mut *(closure as *mut PngWriter);
    let bytes = slice::from_raw_parts(data, length as usize);
    match writer.file.write_all(bytes) {
        Ok(()) => ffi::STATUS_SUCCESS,
        Err(err) => {
            writer.error = Some(err);
            ffi::STATUS_WRITE_ERROR
        }
    }
}

fn surface_write_to_png(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let surface = args.surface()?;
    let path = args.text()?;
    let file = File::create(path).map_err(|err| {
        log::warn!("{}: creating {path:?}: {err}", args.op());
        CallError::NativeStatus {
            op: args.op(),
            status: Status::WriteError,
        }
    })?;
    let mut writer = PngWriter { file, error: None };
    let status = unsafe {
        ffi::cairo_surface_write_to_png_stream(
            surface,
            Some(png_write),
            &mut writer as *mut PngWriter as *mut c_void,
        )
    };
    if let Some(err) = writer.error.take() {
        log::warn!("{}: writing {path:?}: {err}", args.op());
    }
    status_result(args.op(), status)?;
    Ok(Value::Unit)
}

struct PngReader {
    file: File,
    error: Option<std::io::Error>,
}

unsafe extern "C" fn png_read(
    closure: *mut c_void,
    data: *mut c_uchar,
    length: c_uint,
) -> ffi::cairo_status_t {
    let reader = &mut *(closure as *mut PngReader);
    let buf = slice::from_raw_parts_mut(data, length as usize);
    match reader.file.read_exact(buf) {
        Ok(()) => ffi::STATUS_SUCCESS,
        Err(err) => {
            reader.error = Some(err);
            ffi::STATUS_READ_ERROR
        }
    }
}

fn image_surface_create_from_png(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let path = args.text()?;
    let file = File::open(path).map_err(|err| {
        let status = if err.kind() == std::io::ErrorKind::NotFound {
            Status::FileNotFound
        } else {
            Status::ReadError
        };
        log::warn!("{}: opening {path:?}: {err}", args.op());
        CallError::NativeStatus {
            op: args.op(),
            status,
        }
    })?;
    let mut reader = PngReader { file, error: None };
    let surface = unsafe {
        ffi::cairo_image_surface_create_from_png_stream(
            Some(png_read),
            &mut reader as *mut PngReader as *mut c_void,
        )
    };
    if let Some(err) = reader.error.take() {
        log::warn!("{}: reading {path:?}: {err}", args.op());
    }
    wrap_surface(rt, args.op(), surface)
}
