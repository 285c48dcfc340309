//! Raw FFI declarations for the subset of libcairo wrapped by `cairo-host`.
//!
//! Declarations are hand-maintained rather than generated; only the entry
//! points the binding layer actually calls are present.  Constants mirror
//! the native headers for cairo 1.16.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

use libc::{c_char, c_int, c_uchar, c_uint, c_void};

pub type cairo_bool_t = c_int;
pub type cairo_status_t = c_int;
pub type cairo_antialias_t = c_int;
pub type cairo_content_t = c_int;
pub type cairo_extend_t = c_int;
pub type cairo_fill_rule_t = c_int;
pub type cairo_filter_t = c_int;
pub type cairo_font_slant_t = c_int;
pub type cairo_font_weight_t = c_int;
pub type cairo_format_t = c_int;
pub type cairo_line_cap_t = c_int;
pub type cairo_line_join_t = c_int;
pub type cairo_operator_t = c_int;
pub type cairo_pattern_type_t = c_int;
pub type cairo_region_overlap_t = c_int;

macro_rules! opaque {
    ($name:ident) => {
        // https://doc.rust-lang.org/nomicon/ffi.html#representing-opaque-structs
        #[repr(C)]
        pub struct $name {
            _data: [u8; 0],
            _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
        }
    };
}

opaque!(cairo_t);
opaque!(cairo_surface_t);
opaque!(cairo_pattern_t);
opaque!(cairo_region_t);
opaque!(cairo_font_face_t);
opaque!(cairo_font_options_t);

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct cairo_rectangle_t {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct cairo_rectangle_int_t {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct cairo_rectangle_list_t {
    pub status: cairo_status_t,
    pub rectangles: *mut cairo_rectangle_t,
    pub num_rectangles: c_int,
}

/// The path data itself is never walked by the binding, so the data
/// pointer is left untyped.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct cairo_path_t {
    pub status: cairo_status_t,
    pub data: *mut c_void,
    pub num_data: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct cairo_matrix_t {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct cairo_text_extents_t {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct cairo_font_extents_t {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

pub type cairo_write_func_t = Option<
    unsafe extern "C" fn(
        closure: *mut c_void,
        data: *const c_uchar,
        length: c_uint,
    ) -> cairo_status_t,
>;
pub type cairo_read_func_t = Option<
    unsafe extern "C" fn(
        closure: *mut c_void,
        data: *mut c_uchar,
        length: c_uint,
    ) -> cairo_status_t,
>;

pub const STATUS_SUCCESS: cairo_status_t = 0;
pub const STATUS_NO_MEMORY: cairo_status_t = 1;
pub const STATUS_INVALID_RESTORE: cairo_status_t = 2;
pub const STATUS_INVALID_POP_GROUP: cairo_status_t = 3;
pub const STATUS_NO_CURRENT_POINT: cairo_status_t = 4;
pub const STATUS_INVALID_MATRIX: cairo_status_t = 5;
pub const STATUS_INVALID_STATUS: cairo_status_t = 6;
pub const STATUS_NULL_POINTER: cairo_status_t = 7;
pub const STATUS_INVALID_STRING: cairo_status_t = 8;
pub const STATUS_INVALID_PATH_DATA: cairo_status_t = 9;
pub const STATUS_READ_ERROR: cairo_status_t = 10;
pub const STATUS_WRITE_ERROR: cairo_status_t = 11;
pub const STATUS_SURFACE_FINISHED: cairo_status_t = 12;
pub const STATUS_SURFACE_TYPE_MISMATCH: cairo_status_t = 13;
pub const STATUS_PATTERN_TYPE_MISMATCH: cairo_status_t = 14;
pub const STATUS_INVALID_CONTENT: cairo_status_t = 15;
pub const STATUS_INVALID_FORMAT: cairo_status_t = 16;
pub const STATUS_INVALID_VISUAL: cairo_status_t = 17;
pub const STATUS_FILE_NOT_FOUND: cairo_status_t = 18;
pub const STATUS_INVALID_DASH: cairo_status_t = 19;
pub const STATUS_INVALID_DSC_COMMENT: cairo_status_t = 20;
pub const STATUS_INVALID_INDEX: cairo_status_t = 21;
pub const STATUS_CLIP_NOT_REPRESENTABLE: cairo_status_t = 22;
pub const STATUS_TEMP_FILE_ERROR: cairo_status_t = 23;
pub const STATUS_INVALID_STRIDE: cairo_status_t = 24;
pub const STATUS_FONT_TYPE_MISMATCH: cairo_status_t = 25;
pub const STATUS_USER_FONT_IMMUTABLE: cairo_status_t = 26;
pub const STATUS_USER_FONT_ERROR: cairo_status_t = 27;
pub const STATUS_NEGATIVE_COUNT: cairo_status_t = 28;
pub const STATUS_INVALID_CLUSTERS: cairo_status_t = 29;
pub const STATUS_INVALID_SLANT: cairo_status_t = 30;
pub const STATUS_INVALID_WEIGHT: cairo_status_t = 31;
pub const STATUS_INVALID_SIZE: cairo_status_t = 32;
pub const STATUS_USER_FONT_NOT_IMPLEMENTED: cairo_status_t = 33;
pub const STATUS_DEVICE_TYPE_MISMATCH: cairo_status_t = 34;
pub const STATUS_DEVICE_ERROR: cairo_status_t = 35;
pub const STATUS_INVALID_MESH_CONSTRUCTION: cairo_status_t = 36;
pub const STATUS_DEVICE_FINISHED: cairo_status_t = 37;
pub const STATUS_JBIG2_GLOBAL_MISSING: cairo_status_t = 38;
pub const STATUS_PNG_ERROR: cairo_status_t = 39;
pub const STATUS_FREETYPE_ERROR: cairo_status_t = 40;
pub const STATUS_WIN32_GDI_ERROR: cairo_status_t = 41;
pub const STATUS_TAG_ERROR: cairo_status_t = 42;

pub const ANTIALIAS_DEFAULT: cairo_antialias_t = 0;
pub const ANTIALIAS_NONE: cairo_antialias_t = 1;
pub const ANTIALIAS_GRAY: cairo_antialias_t = 2;
pub const ANTIALIAS_SUBPIXEL: cairo_antialias_t = 3;
pub const ANTIALIAS_FAST: cairo_antialias_t = 4;
pub const ANTIALIAS_GOOD: cairo_antialias_t = 5;
pub const ANTIALIAS_BEST: cairo_antialias_t = 6;

pub const CONTENT_COLOR: cairo_content_t = 0x1000;
pub const CONTENT_ALPHA: cairo_content_t = 0x2000;
pub const CONTENT_COLOR_ALPHA: cairo_content_t = 0x3000;

pub const EXTEND_NONE: cairo_extend_t = 0;
pub const EXTEND_REPEAT: cairo_extend_t = 1;
pub const EXTEND_REFLECT: cairo_extend_t = 2;
pub const EXTEND_PAD: cairo_extend_t = 3;

pub const FILL_RULE_WINDING: cairo_fill_rule_t = 0;
pub const FILL_RULE_EVEN_ODD: cairo_fill_rule_t = 1;

pub const FILTER_FAST: cairo_filter_t = 0;
pub const FILTER_GOOD: cairo_filter_t = 1;
pub const FILTER_BEST: cairo_filter_t = 2;
pub const FILTER_NEAREST: cairo_filter_t = 3;
pub const FILTER_BILINEAR: cairo_filter_t = 4;
pub const FILTER_GAUSSIAN: cairo_filter_t = 5;

pub const FONT_SLANT_NORMAL: cairo_font_slant_t = 0;
pub const FONT_SLANT_ITALIC: cairo_font_slant_t = 1;
pub const FONT_SLANT_OBLIQUE: cairo_font_slant_t = 2;

pub const FONT_WEIGHT_NORMAL: cairo_font_weight_t = 0;
pub const FONT_WEIGHT_BOLD: cairo_font_weight_t = 1;

pub const FORMAT_INVALID: cairo_format_t = -1;
pub const FORMAT_ARGB32: cairo_format_t = 0;
pub const FORMAT_RGB24: cairo_format_t = 1;
pub const FORMAT_A8: cairo_format_t = 2;
pub const FORMAT_A1: cairo_format_t = 3;
pub const FORMAT_RGB16_565: cairo_format_t = 4;
pub const FORMAT_RGB30: cairo_format_t = 5;

pub const LINE_CAP_BUTT: cairo_line_cap_t = 0;
pub const LINE_CAP_ROUND: cairo_line_cap_t = 1;
pub const LINE_CAP_SQUARE: cairo_line_cap_t = 2;

pub const LINE_JOIN_MITER: cairo_line_join_t = 0;
pub const LINE_JOIN_ROUND: cairo_line_join_t = 1;
pub const LINE_JOIN_BEVEL: cairo_line_join_t = 2;

pub const OPERATOR_CLEAR: cairo_operator_t = 0;
pub const OPERATOR_SOURCE: cairo_operator_t = 1;
pub const OPERATOR_OVER: cairo_operator_t = 2;
pub const OPERATOR_IN: cairo_operator_t = 3;
pub const OPERATOR_OUT: cairo_operator_t = 4;
pub const OPERATOR_ATOP: cairo_operator_t = 5;
pub const OPERATOR_DEST: cairo_operator_t = 6;
pub const OPERATOR_DEST_OVER: cairo_operator_t = 7;
pub const OPERATOR_DEST_IN: cairo_operator_t = 8;
pub const OPERATOR_DEST_OUT: cairo_operator_t = 9;
pub const OPERATOR_DEST_ATOP: cairo_operator_t = 10;
pub const OPERATOR_XOR: cairo_operator_t = 11;
pub const OPERATOR_ADD: cairo_operator_t = 12;
pub const OPERATOR_SATURATE: cairo_operator_t = 13;
pub const OPERATOR_MULTIPLY: cairo_operator_t = 14;
pub const OPERATOR_SCREEN: cairo_operator_t = 15;
pub const OPERATOR_OVERLAY: cairo_operator_t = 16;
pub const OPERATOR_DARKEN: cairo_operator_t = 17;
pub const OPERATOR_LIGHTEN: cairo_operator_t = 18;
pub const OPERATOR_COLOR_DODGE: cairo_operator_t = 19;
pub const OPERATOR_COLOR_BURN: cairo_operator_t = 20;
pub const OPERATOR_HARD_LIGHT: cairo_operator_t = 21;
pub const OPERATOR_SOFT_LIGHT: cairo_operator_t = 22;
pub const OPERATOR_DIFFERENCE: cairo_operator_t = 23;
pub const OPERATOR_EXCLUSION: cairo_operator_t = 24;
pub const OPERATOR_HSL_HUE: cairo_operator_t = 25;
pub const OPERATOR_HSL_SATURATION: cairo_operator_t = 26;
pub const OPERATOR_HSL_COLOR: cairo_operator_t = 27;
pub const OPERATOR_HSL_LUMINOSITY: cairo_operator_t = 28;

pub const PATTERN_TYPE_SOLID: cairo_pattern_type_t = 0;
pub const PATTERN_TYPE_SURFACE: cairo_pattern_type_t = 1;
pub const PATTERN_TYPE_LINEAR: cairo_pattern_type_t = 2;
pub const PATTERN_TYPE_RADIAL: cairo_pattern_type_t = 3;
pub const PATTERN_TYPE_MESH: cairo_pattern_type_t = 4;
pub const PATTERN_TYPE_RASTER_SOURCE: cairo_pattern_type_t = 5;

pub const REGION_OVERLAP_IN: cairo_region_overlap_t = 0;
pub const REGION_OVERLAP_OUT: cairo_region_overlap_t = 1;
pub const REGION_OVERLAP_PART: cairo_region_overlap_t = 2;

extern "C" {
    pub fn cairo_version() -> c_int;
    pub fn cairo_version_string() -> *const c_char;
    pub fn cairo_status_to_string(status: cairo_status_t) -> *const c_char;

    // drawing contexts
    pub fn cairo_create(target: *mut cairo_surface_t) -> *mut cairo_t;
    pub fn cairo_destroy(cr: *mut cairo_t);
    pub fn cairo_status(cr: *mut cairo_t) -> cairo_status_t;
    pub fn cairo_save(cr: *mut cairo_t);
    pub fn cairo_restore(cr: *mut cairo_t);
    pub fn cairo_copy_page(cr: *mut cairo_t);
    pub fn cairo_show_page(cr: *mut cairo_t);
    pub fn cairo_push_group(cr: *mut cairo_t);
    pub fn cairo_push_group_with_content(cr: *mut cairo_t, content: cairo_content_t);
    pub fn cairo_pop_group(cr: *mut cairo_t) -> *mut cairo_pattern_t;
    pub fn cairo_pop_group_to_source(cr: *mut cairo_t);
    pub fn cairo_get_group_target(cr: *mut cairo_t) -> *mut cairo_surface_t;
    pub fn cairo_get_target(cr: *mut cairo_t) -> *mut cairo_surface_t;
    pub fn cairo_set_source_rgb(cr: *mut cairo_t, red: f64, green: f64, blue: f64);
    pub fn cairo_set_source_rgba(cr: *mut cairo_t, red: f64, green: f64, blue: f64, alpha: f64);
    pub fn cairo_set_source(cr: *mut cairo_t, source: *mut cairo_pattern_t);
    pub fn cairo_set_source_surface(
        cr: *mut cairo_t,
        surface: *mut cairo_surface_t,
        x: f64,
        y: f64,
    );
    pub fn cairo_get_source(cr: *mut cairo_t) -> *mut cairo_pattern_t;
    pub fn cairo_set_antialias(cr: *mut cairo_t, antialias: cairo_antialias_t);
    pub fn cairo_get_antialias(cr: *mut cairo_t) -> cairo_antialias_t;
    pub fn cairo_set_dash(cr: *mut cairo_t, dashes: *const f64, num_dashes: c_int, offset: f64);
    pub fn cairo_get_dash_count(cr: *mut cairo_t) -> c_int;
    pub fn cairo_get_dash(cr: *mut cairo_t, dashes: *mut f64, offset: *mut f64);
    pub fn cairo_set_fill_rule(cr: *mut cairo_t, fill_rule: cairo_fill_rule_t);
    pub fn cairo_get_fill_rule(cr: *mut cairo_t) -> cairo_fill_rule_t;
    pub fn cairo_set_line_cap(cr: *mut cairo_t, line_cap: cairo_line_cap_t);
    pub fn cairo_get_line_cap(cr: *mut cairo_t) -> cairo_line_cap_t;
    pub fn cairo_set_line_join(cr: *mut cairo_t, line_join: cairo_line_join_t);
    pub fn cairo_get_line_join(cr: *mut cairo_t) -> cairo_line_join_t;
    pub fn cairo_set_line_width(cr: *mut cairo_t, width: f64);
    pub fn cairo_get_line_width(cr: *mut cairo_t) -> f64;
    pub fn cairo_set_miter_limit(cr: *mut cairo_t, limit: f64);
    pub fn cairo_get_miter_limit(cr: *mut cairo_t) -> f64;
    pub fn cairo_set_operator(cr: *mut cairo_t, op: cairo_operator_t);
    pub fn cairo_get_operator(cr: *mut cairo_t) -> cairo_operator_t;
    pub fn cairo_set_tolerance(cr: *mut cairo_t, tolerance: f64);
    pub fn cairo_get_tolerance(cr: *mut cairo_t) -> f64;
    pub fn cairo_clip(cr: *mut cairo_t);
    pub fn cairo_clip_preserve(cr: *mut cairo_t);
    pub fn cairo_reset_clip(cr: *mut cairo_t);
    pub fn cairo_clip_extents(
        cr: *mut cairo_t,
        x1: *mut f64,
        y1: *mut f64,
        x2: *mut f64,
        y2: *mut f64,
    );
    pub fn cairo_in_clip(cr: *mut cairo_t, x: f64, y: f64) -> cairo_bool_t;
    pub fn cairo_copy_clip_rectangle_list(cr: *mut cairo_t) -> *mut cairo_rectangle_list_t;
    pub fn cairo_rectangle_list_destroy(rectangle_list: *mut cairo_rectangle_list_t);
    pub fn cairo_fill(cr: *mut cairo_t);
    pub fn cairo_fill_preserve(cr: *mut cairo_t);
    pub fn cairo_fill_extents(
        cr: *mut cairo_t,
        x1: *mut f64,
        y1: *mut f64,
        x2: *mut f64,
        y2: *mut f64,
    );
    pub fn cairo_in_fill(cr: *mut cairo_t, x: f64, y: f64) -> cairo_bool_t;
    pub fn cairo_mask(cr: *mut cairo_t, pattern: *mut cairo_pattern_t);
    pub fn cairo_mask_surface(
        cr: *mut cairo_t,
        surface: *mut cairo_surface_t,
        surface_x: f64,
        surface_y: f64,
    );
    pub fn cairo_paint(cr: *mut cairo_t);
    pub fn cairo_paint_with_alpha(cr: *mut cairo_t, alpha: f64);
    pub fn cairo_stroke(cr: *mut cairo_t);
    pub fn cairo_stroke_preserve(cr: *mut cairo_t);
    pub fn cairo_stroke_extents(
        cr: *mut cairo_t,
        x1: *mut f64,
        y1: *mut f64,
        x2: *mut f64,
        y2: *mut f64,
    );
    pub fn cairo_in_stroke(cr: *mut cairo_t, x: f64, y: f64) -> cairo_bool_t;

    // paths
    pub fn cairo_copy_path(cr: *mut cairo_t) -> *mut cairo_path_t;
    pub fn cairo_copy_path_flat(cr: *mut cairo_t) -> *mut cairo_path_t;
    pub fn cairo_append_path(cr: *mut cairo_t, path: *const cairo_path_t);
    pub fn cairo_path_destroy(path: *mut cairo_path_t);
    pub fn cairo_has_current_point(cr: *mut cairo_t) -> cairo_bool_t;
    pub fn cairo_get_current_point(cr: *mut cairo_t, x: *mut f64, y: *mut f64);
    pub fn cairo_new_path(cr: *mut cairo_t);
    pub fn cairo_new_sub_path(cr: *mut cairo_t);
    pub fn cairo_close_path(cr: *mut cairo_t);
    pub fn cairo_arc(cr: *mut cairo_t, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);
    pub fn cairo_arc_negative(
        cr: *mut cairo_t,
        xc: f64,
        yc: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    );
    pub fn cairo_curve_to(
        cr: *mut cairo_t,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    );
    pub fn cairo_line_to(cr: *mut cairo_t, x: f64, y: f64);
    pub fn cairo_move_to(cr: *mut cairo_t, x: f64, y: f64);
    pub fn cairo_rectangle(cr: *mut cairo_t, x: f64, y: f64, width: f64, height: f64);
    pub fn cairo_rel_curve_to(
        cr: *mut cairo_t,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    );
    pub fn cairo_rel_line_to(cr: *mut cairo_t, dx: f64, dy: f64);
    pub fn cairo_rel_move_to(cr: *mut cairo_t, dx: f64, dy: f64);
    pub fn cairo_path_extents(
        cr: *mut cairo_t,
        x1: *mut f64,
        y1: *mut f64,
        x2: *mut f64,
        y2: *mut f64,
    );

    // transformations
    pub fn cairo_translate(cr: *mut cairo_t, tx: f64, ty: f64);
    pub fn cairo_scale(cr: *mut cairo_t, sx: f64, sy: f64);
    pub fn cairo_rotate(cr: *mut cairo_t, angle: f64);
    pub fn cairo_transform(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_set_matrix(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_get_matrix(cr: *mut cairo_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_identity_matrix(cr: *mut cairo_t);
    pub fn cairo_user_to_device(cr: *mut cairo_t, x: *mut f64, y: *mut f64);
    pub fn cairo_user_to_device_distance(cr: *mut cairo_t, dx: *mut f64, dy: *mut f64);
    pub fn cairo_device_to_user(cr: *mut cairo_t, x: *mut f64, y: *mut f64);
    pub fn cairo_device_to_user_distance(cr: *mut cairo_t, dx: *mut f64, dy: *mut f64);

    // text
    pub fn cairo_select_font_face(
        cr: *mut cairo_t,
        family: *const c_char,
        slant: cairo_font_slant_t,
        weight: cairo_font_weight_t,
    );
    pub fn cairo_set_font_size(cr: *mut cairo_t, size: f64);
    pub fn cairo_set_font_matrix(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_get_font_matrix(cr: *mut cairo_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_show_text(cr: *mut cairo_t, utf8: *const c_char);
    pub fn cairo_text_extents(
        cr: *mut cairo_t,
        utf8: *const c_char,
        extents: *mut cairo_text_extents_t,
    );
    pub fn cairo_font_extents(cr: *mut cairo_t, extents: *mut cairo_font_extents_t);
    pub fn cairo_set_font_face(cr: *mut cairo_t, font_face: *mut cairo_font_face_t);
    pub fn cairo_get_font_face(cr: *mut cairo_t) -> *mut cairo_font_face_t;
    pub fn cairo_toy_font_face_create(
        family: *const c_char,
        slant: cairo_font_slant_t,
        weight: cairo_font_weight_t,
    ) -> *mut cairo_font_face_t;
    pub fn cairo_toy_font_face_get_family(font_face: *mut cairo_font_face_t) -> *const c_char;
    pub fn cairo_toy_font_face_get_slant(font_face: *mut cairo_font_face_t) -> cairo_font_slant_t;
    pub fn cairo_toy_font_face_get_weight(font_face: *mut cairo_font_face_t)
        -> cairo_font_weight_t;
    pub fn cairo_font_face_status(font_face: *mut cairo_font_face_t) -> cairo_status_t;
    pub fn cairo_font_face_destroy(font_face: *mut cairo_font_face_t);
    pub fn cairo_font_options_create() -> *mut cairo_font_options_t;
    pub fn cairo_font_options_copy(original: *const cairo_font_options_t)
        -> *mut cairo_font_options_t;
    pub fn cairo_font_options_destroy(options: *mut cairo_font_options_t);
    pub fn cairo_font_options_status(options: *mut cairo_font_options_t) -> cairo_status_t;
    pub fn cairo_font_options_set_antialias(
        options: *mut cairo_font_options_t,
        antialias: cairo_antialias_t,
    );
    pub fn cairo_font_options_get_antialias(options: *const cairo_font_options_t)
        -> cairo_antialias_t;
    pub fn cairo_font_options_merge(
        options: *mut cairo_font_options_t,
        other: *const cairo_font_options_t,
    );
    pub fn cairo_font_options_equal(
        options: *const cairo_font_options_t,
        other: *const cairo_font_options_t,
    ) -> cairo_bool_t;
    pub fn cairo_set_font_options(cr: *mut cairo_t, options: *const cairo_font_options_t);
    pub fn cairo_get_font_options(cr: *mut cairo_t, options: *mut cairo_font_options_t);

    // surfaces
    pub fn cairo_surface_destroy(surface: *mut cairo_surface_t);
    pub fn cairo_surface_status(surface: *mut cairo_surface_t) -> cairo_status_t;
    pub fn cairo_surface_flush(surface: *mut cairo_surface_t);
    pub fn cairo_surface_finish(surface: *mut cairo_surface_t);
    pub fn cairo_surface_mark_dirty(surface: *mut cairo_surface_t);
    pub fn cairo_surface_get_content(surface: *mut cairo_surface_t) -> cairo_content_t;
    pub fn cairo_surface_create_similar(
        other: *mut cairo_surface_t,
        content: cairo_content_t,
        width: c_int,
        height: c_int,
    ) -> *mut cairo_surface_t;
    pub fn cairo_image_surface_create(
        format: cairo_format_t,
        width: c_int,
        height: c_int,
    ) -> *mut cairo_surface_t;
    pub fn cairo_image_surface_get_width(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_height(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_stride(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_format(surface: *mut cairo_surface_t) -> cairo_format_t;
    pub fn cairo_format_stride_for_width(format: cairo_format_t, width: c_int) -> c_int;
    pub fn cairo_recording_surface_create(
        content: cairo_content_t,
        extents: *const cairo_rectangle_t,
    ) -> *mut cairo_surface_t;
    pub fn cairo_recording_surface_ink_extents(
        surface: *mut cairo_surface_t,
        x0: *mut f64,
        y0: *mut f64,
        width: *mut f64,
        height: *mut f64,
    );
    pub fn cairo_surface_write_to_png_stream(
        surface: *mut cairo_surface_t,
        write_func: cairo_write_func_t,
        closure: *mut c_void,
    ) -> cairo_status_t;
    pub fn cairo_image_surface_create_from_png_stream(
        read_func: cairo_read_func_t,
        closure: *mut c_void,
    ) -> *mut cairo_surface_t;

    // patterns
    pub fn cairo_pattern_destroy(pattern: *mut cairo_pattern_t);
    pub fn cairo_pattern_status(pattern: *mut cairo_pattern_t) -> cairo_status_t;
    pub fn cairo_pattern_create_rgb(red: f64, green: f64, blue: f64) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_rgba(
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_linear(x0: f64, y0: f64, x1: f64, y1: f64)
        -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_radial(
        cx0: f64,
        cy0: f64,
        radius0: f64,
        cx1: f64,
        cy1: f64,
        radius1: f64,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_for_surface(surface: *mut cairo_surface_t)
        -> *mut cairo_pattern_t;
    pub fn cairo_pattern_add_color_stop_rgb(
        pattern: *mut cairo_pattern_t,
        offset: f64,
        red: f64,
        green: f64,
        blue: f64,
    );
    pub fn cairo_pattern_add_color_stop_rgba(
        pattern: *mut cairo_pattern_t,
        offset: f64,
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    );
    pub fn cairo_pattern_get_color_stop_count(
        pattern: *mut cairo_pattern_t,
        count: *mut c_int,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_color_stop_rgba(
        pattern: *mut cairo_pattern_t,
        index: c_int,
        offset: *mut f64,
        red: *mut f64,
        green: *mut f64,
        blue: *mut f64,
        alpha: *mut f64,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_type(pattern: *mut cairo_pattern_t) -> cairo_pattern_type_t;
    pub fn cairo_pattern_set_extend(pattern: *mut cairo_pattern_t, extend: cairo_extend_t);
    pub fn cairo_pattern_get_extend(pattern: *mut cairo_pattern_t) -> cairo_extend_t;
    pub fn cairo_pattern_set_filter(pattern: *mut cairo_pattern_t, filter: cairo_filter_t);
    pub fn cairo_pattern_get_filter(pattern: *mut cairo_pattern_t) -> cairo_filter_t;
    pub fn cairo_pattern_set_matrix(
        pattern: *mut cairo_pattern_t,
        matrix: *const cairo_matrix_t,
    );
    pub fn cairo_pattern_get_matrix(pattern: *mut cairo_pattern_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_pattern_get_rgba(
        pattern: *mut cairo_pattern_t,
        red: *mut f64,
        green: *mut f64,
        blue: *mut f64,
        alpha: *mut f64,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_surface(
        pattern: *mut cairo_pattern_t,
        surface: *mut *mut cairo_surface_t,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_linear_points(
        pattern: *mut cairo_pattern_t,
        x0: *mut f64,
        y0: *mut f64,
        x1: *mut f64,
        y1: *mut f64,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_radial_circles(
        pattern: *mut cairo_pattern_t,
        x0: *mut f64,
        y0: *mut f64,
        r0: *mut f64,
        x1: *mut f64,
        y1: *mut f64,
        r1: *mut f64,
    ) -> cairo_status_t;

    // matrices
    pub fn cairo_matrix_init(
        matrix: *mut cairo_matrix_t,
        xx: f64,
        yx: f64,
        xy: f64,
        yy: f64,
        x0: f64,
        y0: f64,
    );
    pub fn cairo_matrix_init_identity(matrix: *mut cairo_matrix_t);
    pub fn cairo_matrix_init_translate(matrix: *mut cairo_matrix_t, tx: f64, ty: f64);
    pub fn cairo_matrix_init_scale(matrix: *mut cairo_matrix_t, sx: f64, sy: f64);
    pub fn cairo_matrix_init_rotate(matrix: *mut cairo_matrix_t, radians: f64);
    pub fn cairo_matrix_translate(matrix: *mut cairo_matrix_t, tx: f64, ty: f64);
    pub fn cairo_matrix_scale(matrix: *mut cairo_matrix_t, sx: f64, sy: f64);
    pub fn cairo_matrix_rotate(matrix: *mut cairo_matrix_t, radians: f64);
    pub fn cairo_matrix_invert(matrix: *mut cairo_matrix_t) -> cairo_status_t;
    pub fn cairo_matrix_multiply(
        result: *mut cairo_matrix_t,
        a: *const cairo_matrix_t,
        b: *const cairo_matrix_t,
    );
    pub fn cairo_matrix_transform_point(
        matrix: *const cairo_matrix_t,
        x: *mut f64,
        y: *mut f64,
    );
    pub fn cairo_matrix_transform_distance(
        matrix: *const cairo_matrix_t,
        dx: *mut f64,
        dy: *mut f64,
    );

    // regions
    pub fn cairo_region_create() -> *mut cairo_region_t;
    pub fn cairo_region_create_rectangle(
        rectangle: *const cairo_rectangle_int_t,
    ) -> *mut cairo_region_t;
    pub fn cairo_region_copy(original: *const cairo_region_t) -> *mut cairo_region_t;
    pub fn cairo_region_destroy(region: *mut cairo_region_t);
    pub fn cairo_region_status(region: *const cairo_region_t) -> cairo_status_t;
    pub fn cairo_region_get_extents(
        region: *const cairo_region_t,
        extents: *mut cairo_rectangle_int_t,
    );
    pub fn cairo_region_num_rectangles(region: *const cairo_region_t) -> c_int;
    pub fn cairo_region_get_rectangle(
        region: *const cairo_region_t,
        nth: c_int,
        rectangle: *mut cairo_rectangle_int_t,
    );
    pub fn cairo_region_is_empty(region: *const cairo_region_t) -> cairo_bool_t;
    pub fn cairo_region_contains_point(
        region: *const cairo_region_t,
        x: c_int,
        y: c_int,
    ) -> cairo_bool_t;
    pub fn cairo_region_contains_rectangle(
        region: *const cairo_region_t,
        rectangle: *const cairo_rectangle_int_t,
    ) -> cairo_region_overlap_t;
    pub fn cairo_region_equal(a: *const cairo_region_t, b: *const cairo_region_t)
        -> cairo_bool_t;
    pub fn cairo_region_translate(region: *mut cairo_region_t, dx: c_int, dy: c_int);
    pub fn cairo_region_intersect(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_subtract(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_union(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_xor(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
}
