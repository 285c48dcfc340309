//! Scenario tests against the real native library.

use cairo_host::enums::Status;
use cairo_host::{runtime, CallError, Handle, Value};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn f(x: f64) -> Value {
    Value::Float(x)
}

fn i(x: i64) -> Value {
    Value::Int(x)
}

fn tag(t: &str) -> Value {
    Value::tag(t)
}

fn handle(v: &Value) -> Handle {
    match v {
        Value::Handle(h) => h.clone(),
        other => panic!("expected a handle, got {other:?}"),
    }
}

fn new_canvas(width: i64, height: i64) -> (Value, Value) {
    let rt = runtime();
    let surface = rt
        .invoke(
            "image_surface_create",
            &[tag("argb32"), i(width), i(height)],
        )
        .unwrap();
    let cr = rt.invoke("create", &[surface.clone()]).unwrap();
    (surface, cr)
}

#[test]
fn red_paint_round_trips_through_png() -> anyhow::Result<()> {
    init();
    let rt = runtime();
    let (surface, cr) = new_canvas(100, 100);

    rt.invoke("set_source_rgb", &[cr.clone(), f(1.0), f(0.0), f(0.0)])?;
    rt.invoke("paint", &[cr.clone()])?;
    rt.invoke("surface_flush", &[surface.clone()])?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("red.png").to_string_lossy().into_owned();
    rt.invoke(
        "surface_write_to_png",
        &[surface.clone(), Value::Text(path.clone())],
    )?;

    let written = std::fs::metadata(&path)?.len();
    assert!(written > 0, "png file is empty");

    let reread = rt.invoke("image_surface_create_from_png", &[Value::Text(path)])?;
    k9::assert_equal!(
        rt.invoke("image_surface_get_width", &[reread.clone()])?,
        Value::Int(100)
    );
    k9::assert_equal!(
        rt.invoke("image_surface_get_height", &[reread])?,
        Value::Int(100)
    );
    Ok(())
}

#[test]
fn missing_png_reports_file_not_found() {
    init();
    let err = runtime()
        .invoke(
            "image_surface_create_from_png",
            &[Value::Text("/nonexistent/nosuch.png".into())],
        )
        .unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "image_surface_create_from_png",
            status: Status::FileNotFound,
        }
    );
}

#[test]
fn singular_matrix_inversion_is_an_invalid_matrix_error() {
    init();
    let singular = Value::Tuple(vec![
        Value::pair(0.0, 0.0),
        Value::pair(0.0, 0.0),
        Value::pair(0.0, 0.0),
    ]);
    let err = runtime().invoke("matrix_invert", &[singular]).unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "matrix_invert",
            status: Status::InvalidMatrix,
        }
    );
}

#[test]
fn matrix_values_survive_the_context_round_trip() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);

    let translated = rt
        .invoke("matrix_init_translate", &[f(5.0), f(7.0)])
        .unwrap();
    rt.invoke("set_matrix", &[cr.clone(), translated.clone()])
        .unwrap();
    k9::assert_equal!(rt.invoke("get_matrix", &[cr]).unwrap(), translated);
}

#[test]
fn matrix_multiply_composes_translations() {
    init();
    let rt = runtime();
    let a = rt.invoke("matrix_init_translate", &[f(1.0), f(2.0)]).unwrap();
    let b = rt.invoke("matrix_init_translate", &[f(10.0), f(20.0)]).unwrap();
    let product = rt.invoke("matrix_multiply", &[a, b]).unwrap();
    let moved = rt
        .invoke(
            "matrix_transform_point",
            &[product, f(0.0), f(0.0)],
        )
        .unwrap();
    assert_eq!(moved, Value::pair(11.0, 22.0));
}

#[test]
fn dash_pattern_round_trips() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);

    let dashes = Value::List(vec![f(2.0), f(1.0)]);
    rt.invoke("set_dash", &[cr.clone(), dashes.clone(), f(0.5)])
        .unwrap();
    assert_eq!(
        rt.invoke("get_dash_count", &[cr.clone()]).unwrap(),
        Value::Int(2)
    );
    assert_eq!(
        rt.invoke("get_dash", &[cr]).unwrap(),
        Value::Tuple(vec![dashes, f(0.5)])
    );
}

#[test]
fn negative_dashes_surface_the_native_status() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);
    let err = rt
        .invoke(
            "set_dash",
            &[cr, Value::List(vec![f(-1.0)]), f(0.0)],
        )
        .unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "set_dash",
            status: Status::InvalidDash,
        }
    );
}

#[test]
fn clipping_reports_extents_and_rectangles() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(100, 100);

    rt.invoke(
        "rectangle",
        &[cr.clone(), f(10.0), f(20.0), f(30.0), f(40.0)],
    )
    .unwrap();
    rt.invoke("clip", &[cr.clone()]).unwrap();

    assert_eq!(
        rt.invoke("clip_extents", &[cr.clone()]).unwrap(),
        Value::quad(10.0, 20.0, 40.0, 60.0)
    );
    assert_eq!(
        rt.invoke("copy_clip_rectangle_list", &[cr.clone()]).unwrap(),
        Value::List(vec![Value::rect(10.0, 20.0, 30.0, 40.0)])
    );

    rt.invoke("reset_clip", &[cr.clone()]).unwrap();
    assert_eq!(
        rt.invoke("clip_extents", &[cr]).unwrap(),
        Value::quad(0.0, 0.0, 100.0, 100.0)
    );
}

#[test]
fn fill_queries_see_the_current_path() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(50, 50);

    rt.invoke(
        "rectangle",
        &[cr.clone(), f(0.0), f(0.0), f(10.0), f(10.0)],
    )
    .unwrap();
    assert_eq!(
        rt.invoke("in_fill", &[cr.clone(), f(5.0), f(5.0)]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        rt.invoke("in_fill", &[cr.clone(), f(25.0), f(25.0)]).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        rt.invoke("fill_extents", &[cr]).unwrap(),
        Value::quad(0.0, 0.0, 10.0, 10.0)
    );
}

#[test]
fn paths_copy_out_and_append_back() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(50, 50);

    rt.invoke("move_to", &[cr.clone(), f(1.0), f(2.0)]).unwrap();
    rt.invoke("line_to", &[cr.clone(), f(11.0), f(12.0)]).unwrap();
    assert_eq!(
        rt.invoke("has_current_point", &[cr.clone()]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        rt.invoke("get_current_point", &[cr.clone()]).unwrap(),
        Value::pair(11.0, 12.0)
    );

    let path = rt.invoke("copy_path", &[cr.clone()]).unwrap();
    assert!(handle(&path).is_owned());

    rt.invoke("new_path", &[cr.clone()]).unwrap();
    assert_eq!(
        rt.invoke("has_current_point", &[cr.clone()]).unwrap(),
        Value::Bool(false)
    );

    rt.invoke("append_path", &[cr.clone(), path]).unwrap();
    assert_eq!(
        rt.invoke("get_current_point", &[cr]).unwrap(),
        Value::pair(11.0, 12.0)
    );
}

#[test]
fn borrowed_target_finalization_leaves_the_surface_alive() {
    init();
    let rt = runtime();
    let (surface, cr) = new_canvas(20, 20);

    let target = rt.invoke("get_target", &[cr.clone()]).unwrap();
    let target = handle(&target);
    assert!(!target.is_owned());

    // collecting the borrowed wrapper must not disturb the native surface
    rt.registry().finalize(&target);
    assert!(target.is_null());

    rt.invoke("set_source_rgb", &[cr.clone(), f(0.0), f(1.0), f(0.0)])
        .unwrap();
    rt.invoke("paint", &[cr]).unwrap();
    assert_eq!(
        rt.invoke("surface_status", &[surface]).unwrap(),
        tag("success")
    );
}

#[test]
fn group_rendering_round_trips() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(20, 20);

    rt.invoke("push_group", &[cr.clone()]).unwrap();
    let group_target = rt.invoke("get_group_target", &[cr.clone()]).unwrap();
    assert!(!handle(&group_target).is_owned());

    rt.invoke("set_source_rgb", &[cr.clone(), f(0.0), f(0.0), f(1.0)])
        .unwrap();
    rt.invoke("paint", &[cr.clone()]).unwrap();

    let pattern = rt.invoke("pop_group", &[cr.clone()]).unwrap();
    assert!(handle(&pattern).is_owned());
    rt.invoke("set_source", &[cr.clone(), pattern]).unwrap();
    rt.invoke("paint", &[cr]).unwrap();
}

#[test]
fn restoring_without_saving_is_a_native_error() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);
    let err = rt.invoke("restore", &[cr]).unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "restore",
            status: Status::InvalidRestore,
        }
    );
}

#[test]
fn finished_surfaces_refuse_further_drawing() {
    init();
    let rt = runtime();
    let (surface, cr) = new_canvas(10, 10);

    rt.invoke("surface_finish", &[surface]).unwrap();
    let err = rt.invoke("paint", &[cr]).unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "paint",
            status: Status::SurfaceFinished,
        }
    );
}

#[test]
fn fresh_gradients_report_zero_color_stops() {
    init();
    let rt = runtime();
    let gradient = rt
        .invoke(
            "pattern_create_linear",
            &[f(0.0), f(0.0), f(1.0), f(1.0)],
        )
        .unwrap();

    assert_eq!(
        rt.invoke("pattern_get_color_stop_count", &[gradient.clone()])
            .unwrap(),
        Value::Int(0)
    );

    rt.invoke(
        "pattern_add_color_stop_rgba",
        &[gradient.clone(), f(0.0), f(1.0), f(0.0), f(0.0), f(1.0)],
    )
    .unwrap();
    assert_eq!(
        rt.invoke("pattern_get_color_stop_count", &[gradient.clone()])
            .unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        rt.invoke(
            "pattern_get_color_stop_rgba",
            &[gradient.clone(), i(0)]
        )
        .unwrap(),
        Value::Tuple(vec![f(0.0), f(1.0), f(0.0), f(0.0), f(1.0)])
    );
    assert_eq!(
        rt.invoke("pattern_get_linear_points", &[gradient.clone()])
            .unwrap(),
        Value::quad(0.0, 0.0, 1.0, 1.0)
    );
    assert_eq!(
        rt.invoke("pattern_get_type", &[gradient]).unwrap(),
        tag("linear")
    );
}

#[test]
fn solid_patterns_echo_their_color() {
    init();
    let rt = runtime();
    let solid = rt
        .invoke(
            "pattern_create_rgba",
            &[f(0.25), f(0.5), f(0.75), f(1.0)],
        )
        .unwrap();
    assert_eq!(
        rt.invoke("pattern_get_rgba", &[solid.clone()]).unwrap(),
        Value::quad(0.25, 0.5, 0.75, 1.0)
    );
    assert_eq!(rt.invoke("pattern_get_type", &[solid]).unwrap(), tag("solid"));
}

#[test]
fn surface_patterns_lend_their_surface_back() {
    init();
    let rt = runtime();
    let (surface, _cr) = new_canvas(10, 10);
    let pattern = rt
        .invoke("pattern_create_for_surface", &[surface])
        .unwrap();

    let lent = rt.invoke("pattern_get_surface", &[pattern.clone()]).unwrap();
    assert!(!handle(&lent).is_owned());
    assert_eq!(
        rt.invoke("surface_status", &[lent]).unwrap(),
        tag("success")
    );

    // color queries only apply to solid patterns
    let err = rt.invoke("pattern_get_rgba", &[pattern]).unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "pattern_get_rgba",
            status: Status::PatternTypeMismatch,
        }
    );
}

#[test]
fn current_source_is_borrowed_and_queryable() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);

    rt.invoke("set_source_rgb", &[cr.clone(), f(1.0), f(0.0), f(0.0)])
        .unwrap();
    let source = rt.invoke("get_source", &[cr]).unwrap();
    assert!(!handle(&source).is_owned());
    assert_eq!(
        rt.invoke("pattern_get_rgba", &[source]).unwrap(),
        Value::quad(1.0, 0.0, 0.0, 1.0)
    );
}

#[test]
fn pattern_filter_and_extend_round_trip() {
    init();
    let rt = runtime();
    let pattern = rt
        .invoke("pattern_create_rgb", &[f(0.0), f(0.0), f(0.0)])
        .unwrap();

    rt.invoke("pattern_set_extend", &[pattern.clone(), tag("reflect")])
        .unwrap();
    assert_eq!(
        rt.invoke("pattern_get_extend", &[pattern.clone()]).unwrap(),
        tag("reflect")
    );

    rt.invoke("pattern_set_filter", &[pattern.clone(), tag("nearest")])
        .unwrap();
    assert_eq!(
        rt.invoke("pattern_get_filter", &[pattern]).unwrap(),
        tag("nearest")
    );
}

#[test]
fn toy_font_faces_echo_their_description() {
    init();
    let rt = runtime();
    let face = rt
        .invoke(
            "toy_font_face_create",
            &[Value::Text("monospace".into()), tag("italic"), tag("bold")],
        )
        .unwrap();
    assert!(handle(&face).is_owned());
    assert_eq!(
        rt.invoke("toy_font_face_get_family", &[face.clone()]).unwrap(),
        Value::Text("monospace".into())
    );
    assert_eq!(
        rt.invoke("toy_font_face_get_slant", &[face.clone()]).unwrap(),
        tag("italic")
    );
    assert_eq!(
        rt.invoke("toy_font_face_get_weight", &[face.clone()]).unwrap(),
        tag("bold")
    );
    assert_eq!(
        rt.invoke("font_face_status", &[face]).unwrap(),
        tag("success")
    );
}

#[test]
fn font_options_merge_and_compare() {
    init();
    let rt = runtime();
    let a = rt.invoke("font_options_create", &[]).unwrap();
    let b = rt.invoke("font_options_create", &[]).unwrap();

    rt.invoke("font_options_set_antialias", &[a.clone(), tag("best")])
        .unwrap();
    assert_eq!(
        rt.invoke("font_options_get_antialias", &[a.clone()]).unwrap(),
        tag("best")
    );
    assert_eq!(
        rt.invoke("font_options_equal", &[a.clone(), b.clone()]).unwrap(),
        Value::Bool(false)
    );

    rt.invoke("font_options_merge", &[b.clone(), a.clone()]).unwrap();
    assert_eq!(
        rt.invoke("font_options_equal", &[a.clone(), b]).unwrap(),
        Value::Bool(true)
    );

    let copy = rt.invoke("font_options_copy", &[a.clone()]).unwrap();
    assert_eq!(
        rt.invoke("font_options_equal", &[a, copy]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn selecting_a_font_keeps_the_context_healthy() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);
    rt.invoke(
        "select_font_face",
        &[
            cr.clone(),
            Value::Text("sans".into()),
            tag("normal"),
            tag("normal"),
        ],
    )
    .unwrap();
    rt.invoke("set_font_size", &[cr.clone(), f(12.0)]).unwrap();
    assert_eq!(rt.invoke("status", &[cr]).unwrap(), tag("success"));
}

#[test]
fn regions_answer_containment_queries() {
    init();
    let rt = runtime();
    let region = rt
        .invoke(
            "region_create_rectangle",
            &[Value::Tuple(vec![i(0), i(0), i(10), i(10)])],
        )
        .unwrap();

    assert_eq!(
        rt.invoke("region_contains_point", &[region.clone(), i(5), i(5)])
            .unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        rt.invoke("region_contains_point", &[region.clone(), i(15), i(5)])
            .unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        rt.invoke(
            "region_contains_rectangle",
            &[region.clone(), Value::Tuple(vec![i(2), i(2), i(4), i(4)])],
        )
        .unwrap(),
        tag("in")
    );
    assert_eq!(
        rt.invoke(
            "region_contains_rectangle",
            &[region.clone(), Value::Tuple(vec![i(5), i(5), i(10), i(10)])],
        )
        .unwrap(),
        tag("part")
    );
    assert_eq!(
        rt.invoke(
            "region_contains_rectangle",
            &[region, Value::Tuple(vec![i(20), i(20), i(5), i(5)])],
        )
        .unwrap(),
        tag("out")
    );
}

#[test]
fn region_algebra_merges_and_translates() {
    init();
    let rt = runtime();
    let a = rt
        .invoke(
            "region_create_rectangle",
            &[Value::Tuple(vec![i(0), i(0), i(10), i(10)])],
        )
        .unwrap();
    let b = rt
        .invoke(
            "region_create_rectangle",
            &[Value::Tuple(vec![i(5), i(0), i(10), i(10)])],
        )
        .unwrap();

    rt.invoke("region_union", &[a.clone(), b]).unwrap();
    assert_eq!(
        rt.invoke("region_get_extents", &[a.clone()]).unwrap(),
        Value::Tuple(vec![i(0), i(0), i(15), i(10)])
    );
    assert_eq!(
        rt.invoke("region_num_rectangles", &[a.clone()]).unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        rt.invoke("region_get_rectangle", &[a.clone(), i(0)]).unwrap(),
        Value::Tuple(vec![i(0), i(0), i(15), i(10)])
    );

    let err = rt
        .invoke("region_get_rectangle", &[a.clone(), i(7)])
        .unwrap_err();
    assert_eq!(
        err,
        CallError::NativeStatus {
            op: "region_get_rectangle",
            status: Status::InvalidIndex,
        }
    );

    rt.invoke("region_translate", &[a.clone(), i(100), i(200)])
        .unwrap();
    assert_eq!(
        rt.invoke("region_get_extents", &[a.clone()]).unwrap(),
        Value::Tuple(vec![i(100), i(200), i(15), i(10)])
    );

    let empty = rt.invoke("region_create", &[]).unwrap();
    assert_eq!(
        rt.invoke("region_is_empty", &[empty.clone()]).unwrap(),
        Value::Bool(true)
    );
    rt.invoke("region_intersect", &[a.clone(), empty]).unwrap();
    assert_eq!(
        rt.invoke("region_is_empty", &[a]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn recording_surfaces_track_ink_extents() {
    init();
    let rt = runtime();
    let surface = rt
        .invoke("recording_surface_create", &[tag("color_alpha")])
        .unwrap();
    let cr = rt.invoke("create", &[surface.clone()]).unwrap();

    rt.invoke(
        "rectangle",
        &[cr.clone(), f(10.0), f(20.0), f(30.0), f(40.0)],
    )
    .unwrap();
    rt.invoke("set_source_rgb", &[cr.clone(), f(0.0), f(0.0), f(0.0)])
        .unwrap();
    rt.invoke("fill", &[cr]).unwrap();

    assert_eq!(
        rt.invoke("recording_surface_ink_extents", &[surface]).unwrap(),
        Value::rect(10.0, 20.0, 30.0, 40.0)
    );
}

#[test]
fn stroke_parameters_round_trip() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);

    rt.invoke("set_line_width", &[cr.clone(), f(4.0)]).unwrap();
    assert_eq!(
        rt.invoke("get_line_width", &[cr.clone()]).unwrap(),
        Value::Float(4.0)
    );

    rt.invoke("set_line_cap", &[cr.clone(), tag("round")]).unwrap();
    assert_eq!(
        rt.invoke("get_line_cap", &[cr.clone()]).unwrap(),
        tag("round")
    );

    rt.invoke("set_line_join", &[cr.clone(), tag("bevel")]).unwrap();
    assert_eq!(
        rt.invoke("get_line_join", &[cr.clone()]).unwrap(),
        tag("bevel")
    );

    rt.invoke("set_operator", &[cr.clone(), tag("dest_over")]).unwrap();
    assert_eq!(
        rt.invoke("get_operator", &[cr.clone()]).unwrap(),
        tag("dest_over")
    );

    rt.invoke("set_fill_rule", &[cr.clone(), tag("even_odd")]).unwrap();
    assert_eq!(
        rt.invoke("get_fill_rule", &[cr.clone()]).unwrap(),
        tag("even_odd")
    );

    rt.invoke("set_antialias", &[cr.clone(), tag("none")]).unwrap();
    assert_eq!(rt.invoke("get_antialias", &[cr]).unwrap(), tag("none"));
}

#[test]
fn transforms_map_points_both_ways() {
    init();
    let rt = runtime();
    let (_surface, cr) = new_canvas(10, 10);

    rt.invoke("translate", &[cr.clone(), f(10.0), f(0.0)]).unwrap();
    rt.invoke("scale", &[cr.clone(), f(2.0), f(2.0)]).unwrap();

    assert_eq!(
        rt.invoke("user_to_device", &[cr.clone(), f(1.0), f(1.0)]).unwrap(),
        Value::pair(12.0, 2.0)
    );
    assert_eq!(
        rt.invoke("device_to_user", &[cr.clone(), f(12.0), f(2.0)]).unwrap(),
        Value::pair(1.0, 1.0)
    );
    assert_eq!(
        rt.invoke(
            "user_to_device_distance",
            &[cr.clone(), f(1.0), f(1.0)]
        )
        .unwrap(),
        Value::pair(2.0, 2.0)
    );

    rt.invoke("identity_matrix", &[cr.clone()]).unwrap();
    assert_eq!(
        rt.invoke("user_to_device", &[cr, f(1.0), f(1.0)]).unwrap(),
        Value::pair(1.0, 1.0)
    );
}

#[test]
fn library_reports_a_version() {
    init();
    let rt = runtime();
    match rt.invoke("version", &[]).unwrap() {
        Value::Int(v) => assert!(v >= 11400, "unexpectedly old cairo: {v}"),
        other => panic!("expected an int, got {other:?}"),
    }
    match rt.invoke("version_string", &[]).unwrap() {
        Value::Text(s) => assert!(!s.is_empty()),
        other => panic!("expected text, got {other:?}"),
    }
}
