//! Integer-rectangle regions and their set algebra.

use crate::adapter::{Args, OpTable};
use crate::enums::{status_result, RegionOverlap, Status};
use crate::error::CallError;
use crate::handle::HandleKind;
use crate::value::Value;
use crate::Runtime;
use cairo_ffi as ffi;

pub(super) fn register(table: &mut OpTable) {
    table.def("region_create", 0, region_create);
    table.def("region_create_rectangle", 1, region_create_rectangle);
    table.def("region_copy", 1, region_copy);
    table.def("region_status", 1, region_status);
    table.def("region_get_extents", 1, region_get_extents);
    table.def("region_num_rectangles", 1, region_num_rectangles);
    table.def("region_get_rectangle", 2, region_get_rectangle);
    table.def("region_is_empty", 1, region_is_empty);
    table.def("region_contains_point", 3, region_contains_point);
    table.def("region_contains_rectangle", 2, region_contains_rectangle);
    table.def("region_equal", 2, region_equal);
    table.def("region_translate", 3, region_translate);
    table.def("region_intersect", 2, region_intersect);
    table.def("region_subtract", 2, region_subtract);
    table.def("region_union", 2, region_union);
    table.def("region_xor", 2, region_xor);
}

fn wrap_region(
    rt: &Runtime,
    op: &'static str,
    region: *mut ffi::cairo_region_t,
) -> Result<Value, CallError> {
    let handle = rt
        .registry()
        .register_owned(HandleKind::Region, region.cast())?;
    status_result(op, unsafe { ffi::cairo_region_status(region) })?;
    Ok(Value::Handle(handle))
}

fn region_create(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = unsafe { ffi::cairo_region_create() };
    wrap_region(rt, args.op(), region)
}

fn region_create_rectangle(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let rect = args.int_rect()?;
    let region = unsafe { ffi::cairo_region_create_rectangle(&rect) };
    wrap_region(rt, args.op(), region)
}

fn region_copy(rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let original = args.region()?;
    let region = unsafe { ffi::cairo_region_copy(original) };
    wrap_region(rt, args.op(), region)
}

fn region_status(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    let raw = unsafe { ffi::cairo_region_status(region) };
    Ok(Value::tag(Status::from_native(raw)?.tag()))
}

fn region_get_extents(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    let mut extents = ffi::cairo_rectangle_int_t {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };
    unsafe { ffi::cairo_region_get_extents(region, &mut extents) };
    Ok(Value::int_rect(&extents))
}

fn region_num_rectangles(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    Ok(Value::Int(
        unsafe { ffi::cairo_region_num_rectangles(region) } as i64,
    ))
}

fn region_get_rectangle(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    let nth = args.int()?;
    // the native accessor has no bounds reporting of its own
    let count = unsafe { ffi::cairo_region_num_rectangles(region) };
    if nth < 0 || nth >= count {
        return Err(CallError::NativeStatus {
            op: args.op(),
            status: Status::InvalidIndex,
        });
    }
    let mut rect = ffi::cairo_rectangle_int_t {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };
    unsafe { ffi::cairo_region_get_rectangle(region, nth, &mut rect) };
    Ok(Value::int_rect(&rect))
}

fn region_is_empty(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    Ok(Value::Bool(unsafe { ffi::cairo_region_is_empty(region) } != 0))
}

fn region_contains_point(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    let x = args.int()?;
    let y = args.int()?;
    Ok(Value::Bool(
        unsafe { ffi::cairo_region_contains_point(region, x, y) } != 0,
    ))
}

fn region_contains_rectangle(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    let rect = args.int_rect()?;
    let raw = unsafe { ffi::cairo_region_contains_rectangle(region, &rect) };
    Ok(Value::tag(RegionOverlap::from_native(raw)?.tag()))
}

fn region_equal(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let a = args.region()?;
    let b = args.region()?;
    Ok(Value::Bool(unsafe { ffi::cairo_region_equal(a, b) } != 0))
}

fn region_translate(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let region = args.region()?;
    let dx = args.int()?;
    let dy = args.int()?;
    unsafe { ffi::cairo_region_translate(region, dx, dy) };
    Ok(Value::Unit)
}

fn region_intersect(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let dst = args.region()?;
    let other = args.region()?;
    let status = unsafe { ffi::cairo_region_intersect(dst, other) };
    status_result(args.op(), status)?;
    Ok(Value::Unit)
}

fn region_subtract(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let dst = args.region()?;
    let other = args.region()?;
    let status = unsafe { ffi::cairo_region_subtract(dst, other) };
    status_result(args.op(), status)?;
    Ok(Value::Unit)
}

fn region_union(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let dst = args.region()?;
    let other = args.region()?;
    let status = unsafe { ffi::cairo_region_union(dst, other) };
    status_result(args.op(), status)?;
    Ok(Value::Unit)
}

fn region_xor(_rt: &Runtime, args: &mut Args) -> Result<Value, CallError> {
    let dst = args.region()?;
    let other = args.region()?;
    let status = unsafe { ffi::cairo_region_xor(dst, other) };
    status_result(args.op(), status)?;
    Ok(Value::Unit)
}
