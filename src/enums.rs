//! Bidirectional mapping between host-visible symbolic tags and the native
//! enum integers.
//!
//! Every category is a closed Rust enum generated by [`enumerant!`], so the
//! encode and decode directions and the exhaustive variant listing are all
//! derived from one table: adding a value that exists in a newer native
//! release means adding one line here, and forgetting a direction is a
//! compile error rather than a silent fallback.  Decoding an integer the
//! table has not learned fails loudly with `UnmappedNativeValue`.

use crate::error::CallError;
use cairo_ffi as ffi;
use std::fmt;

macro_rules! enumerant {
    (
        $(#[$meta:meta])*
        $name:ident ($category:literal) {
            $($variant:ident = $native:expr => $tag:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const CATEGORY: &'static str = $category;
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn to_native(self) -> i32 {
                match self {
                    $($name::$variant => $native,)+
                }
            }

            pub fn from_native(value: i32) -> Result<Self, CallError> {
                match value {
                    $(v if v == $native => Ok($name::$variant),)+
                    _ => Err(CallError::UnmappedNativeValue {
                        category: $category,
                        value,
                    }),
                }
            }

            pub fn tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            pub fn from_tag(tag: &str) -> Result<Self, CallError> {
                match tag {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(CallError::UnknownEnumerant {
                        category: $category,
                        tag: tag.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

enumerant! {
    /// Pixel layout of an image surface.
    Format("format") {
        Invalid = ffi::FORMAT_INVALID => "invalid",
        Argb32 = ffi::FORMAT_ARGB32 => "argb32",
        Rgb24 = ffi::FORMAT_RGB24 => "rgb24",
        A8 = ffi::FORMAT_A8 => "a8",
        A1 = ffi::FORMAT_A1 => "a1",
        Rgb16_565 = ffi::FORMAT_RGB16_565 => "rgb16_565",
        Rgb30 = ffi::FORMAT_RGB30 => "rgb30",
    }
}

enumerant! {
    FontSlant("font_slant") {
        Normal = ffi::FONT_SLANT_NORMAL => "normal",
        Italic = ffi::FONT_SLANT_ITALIC => "italic",
        Oblique = ffi::FONT_SLANT_OBLIQUE => "oblique",
    }
}

enumerant! {
    FontWeight("font_weight") {
        Normal = ffi::FONT_WEIGHT_NORMAL => "normal",
        Bold = ffi::FONT_WEIGHT_BOLD => "bold",
    }
}

enumerant! {
    LineCap("line_cap") {
        Butt = ffi::LINE_CAP_BUTT => "butt",
        Round = ffi::LINE_CAP_ROUND => "round",
        Square = ffi::LINE_CAP_SQUARE => "square",
    }
}

enumerant! {
    LineJoin("line_join") {
        Miter = ffi::LINE_JOIN_MITER => "miter",
        Round = ffi::LINE_JOIN_ROUND => "round",
        Bevel = ffi::LINE_JOIN_BEVEL => "bevel",
    }
}

enumerant! {
    /// Compositing operator applied by drawing operations.
    Operator("operator") {
        Clear = ffi::OPERATOR_CLEAR => "clear",
        Source = ffi::OPERATOR_SOURCE => "source",
        Over = ffi::OPERATOR_OVER => "over",
        In = ffi::OPERATOR_IN => "in",
        Out = ffi::OPERATOR_OUT => "out",
        Atop = ffi::OPERATOR_ATOP => "atop",
        Dest = ffi::OPERATOR_DEST => "dest",
        DestOver = ffi::OPERATOR_DEST_OVER => "dest_over",
        DestIn = ffi::OPERATOR_DEST_IN => "dest_in",
        DestOut = ffi::OPERATOR_DEST_OUT => "dest_out",
        DestAtop = ffi::OPERATOR_DEST_ATOP => "dest_atop",
        Xor = ffi::OPERATOR_XOR => "xor",
        Add = ffi::OPERATOR_ADD => "add",
        Saturate = ffi::OPERATOR_SATURATE => "saturate",
        Multiply = ffi::OPERATOR_MULTIPLY => "multiply",
        Screen = ffi::OPERATOR_SCREEN => "screen",
        Overlay = ffi::OPERATOR_OVERLAY => "overlay",
        Darken = ffi::OPERATOR_DARKEN => "darken",
        Lighten = ffi::OPERATOR_LIGHTEN => "lighten",
        ColorDodge = ffi::OPERATOR_COLOR_DODGE => "color_dodge",
        ColorBurn = ffi::OPERATOR_COLOR_BURN => "color_burn",
        HardLight = ffi::OPERATOR_HARD_LIGHT => "hard_light",
        SoftLight = ffi::OPERATOR_SOFT_LIGHT => "soft_light",
        Difference = ffi::OPERATOR_DIFFERENCE => "difference",
        Exclusion = ffi::OPERATOR_EXCLUSION => "exclusion",
        HslHue = ffi::OPERATOR_HSL_HUE => "hsl_hue",
        HslSaturation = ffi::OPERATOR_HSL_SATURATION => "hsl_saturation",
        HslColor = ffi::OPERATOR_HSL_COLOR => "hsl_color",
        HslLuminosity = ffi::OPERATOR_HSL_LUMINOSITY => "hsl_luminosity",
    }
}

enumerant! {
    Extend("extend") {
        None = ffi::EXTEND_NONE => "none",
        Repeat = ffi::EXTEND_REPEAT => "repeat",
        Reflect = ffi::EXTEND_REFLECT => "reflect",
        Pad = ffi::EXTEND_PAD => "pad",
    }
}

enumerant! {
    Filter("filter") {
        Fast = ffi::FILTER_FAST => "fast",
        Good = ffi::FILTER_GOOD => "good",
        Best = ffi::FILTER_BEST => "best",
        Nearest = ffi::FILTER_NEAREST => "nearest",
        Bilinear = ffi::FILTER_BILINEAR => "bilinear",
        Gaussian = ffi::FILTER_GAUSSIAN => "gaussian",
    }
}

enumerant! {
    Content("content") {
        Color = ffi::CONTENT_COLOR => "color",
        Alpha = ffi::CONTENT_ALPHA => "alpha",
        ColorAlpha = ffi::CONTENT_COLOR_ALPHA => "color_alpha",
    }
}

enumerant! {
    PatternType("pattern_type") {
        Solid = ffi::PATTERN_TYPE_SOLID => "solid",
        Surface = ffi::PATTERN_TYPE_SURFACE => "surface",
        Linear = ffi::PATTERN_TYPE_LINEAR => "linear",
        Radial = ffi::PATTERN_TYPE_RADIAL => "radial",
        Mesh = ffi::PATTERN_TYPE_MESH => "mesh",
        RasterSource = ffi::PATTERN_TYPE_RASTER_SOURCE => "raster_source",
    }
}

enumerant! {
    FillRule("fill_rule") {
        Winding = ffi::FILL_RULE_WINDING => "winding",
        EvenOdd = ffi::FILL_RULE_EVEN_ODD => "even_odd",
    }
}

enumerant! {
    Antialias("antialias") {
        Default = ffi::ANTIALIAS_DEFAULT => "default",
        None = ffi::ANTIALIAS_NONE => "none",
        Gray = ffi::ANTIALIAS_GRAY => "gray",
        Subpixel = ffi::ANTIALIAS_SUBPIXEL => "subpixel",
        Fast = ffi::ANTIALIAS_FAST => "fast",
        Good = ffi::ANTIALIAS_GOOD => "good",
        Best = ffi::ANTIALIAS_BEST => "best",
    }
}

enumerant! {
    RegionOverlap("region_overlap") {
        In = ffi::REGION_OVERLAP_IN => "in",
        Out = ffi::REGION_OVERLAP_OUT => "out",
        Part = ffi::REGION_OVERLAP_PART => "part",
    }
}

enumerant! {
    /// The full documented status range of the wrapped library (1.16), not
    /// just the statuses the wrapped subset is known to produce.
    Status("status") {
        Success = ffi::STATUS_SUCCESS => "success",
        NoMemory = ffi::STATUS_NO_MEMORY => "no_memory",
        InvalidRestore = ffi::STATUS_INVALID_RESTORE => "invalid_restore",
        InvalidPopGroup = ffi::STATUS_INVALID_POP_GROUP => "invalid_pop_group",
        NoCurrentPoint = ffi::STATUS_NO_CURRENT_POINT => "no_current_point",
        InvalidMatrix = ffi::STATUS_INVALID_MATRIX => "invalid_matrix",
        InvalidStatus = ffi::STATUS_INVALID_STATUS => "invalid_status",
        NullPointer = ffi::STATUS_NULL_POINTER => "null_pointer",
        InvalidString = ffi::STATUS_INVALID_STRING => "invalid_string",
        InvalidPathData = ffi::STATUS_INVALID_PATH_DATA => "invalid_path_data",
        ReadError = ffi::STATUS_READ_ERROR => "read_error",
        WriteError = ffi::STATUS_WRITE_ERROR => "write_error",
        SurfaceFinished = ffi::STATUS_SURFACE_FINISHED => "surface_finished",
        SurfaceTypeMismatch = ffi::STATUS_SURFACE_TYPE_MISMATCH => "surface_type_mismatch",
        PatternTypeMismatch = ffi::STATUS_PATTERN_TYPE_MISMATCH => "pattern_type_mismatch",
        InvalidContent = ffi::STATUS_INVALID_CONTENT => "invalid_content",
        InvalidFormat = ffi::STATUS_INVALID_FORMAT => "invalid_format",
        InvalidVisual = ffi::STATUS_INVALID_VISUAL => "invalid_visual",
        FileNotFound = ffi::STATUS_FILE_NOT_FOUND => "file_not_found",
        InvalidDash = ffi::STATUS_INVALID_DASH => "invalid_dash",
        InvalidDscComment = ffi::STATUS_INVALID_DSC_COMMENT => "invalid_dsc_comment",
        InvalidIndex = ffi::STATUS_INVALID_INDEX => "invalid_index",
        ClipNotRepresentable = ffi::STATUS_CLIP_NOT_REPRESENTABLE => "clip_not_representable",
        TempFileError = ffi::STATUS_TEMP_FILE_ERROR => "temp_file_error",
        InvalidStride = ffi::STATUS_INVALID_STRIDE => "invalid_stride",
        FontTypeMismatch = ffi::STATUS_FONT_TYPE_MISMATCH => "font_type_mismatch",
        UserFontImmutable = ffi::STATUS_USER_FONT_IMMUTABLE => "user_font_immutable",
        UserFontError = ffi::STATUS_USER_FONT_ERROR => "user_font_error",
        NegativeCount = ffi::STATUS_NEGATIVE_COUNT => "negative_count",
        InvalidClusters = ffi::STATUS_INVALID_CLUSTERS => "invalid_clusters",
        InvalidSlant = ffi::STATUS_INVALID_SLANT => "invalid_slant",
        InvalidWeight = ffi::STATUS_INVALID_WEIGHT => "invalid_weight",
        InvalidSize = ffi::STATUS_INVALID_SIZE => "invalid_size",
        UserFontNotImplemented = ffi::STATUS_USER_FONT_NOT_IMPLEMENTED => "user_font_not_implemented",
        DeviceTypeMismatch = ffi::STATUS_DEVICE_TYPE_MISMATCH => "device_type_mismatch",
        DeviceError = ffi::STATUS_DEVICE_ERROR => "device_error",
        InvalidMeshConstruction = ffi::STATUS_INVALID_MESH_CONSTRUCTION => "invalid_mesh_construction",
        DeviceFinished = ffi::STATUS_DEVICE_FINISHED => "device_finished",
        Jbig2GlobalMissing = ffi::STATUS_JBIG2_GLOBAL_MISSING => "jbig2_global_missing",
        PngError = ffi::STATUS_PNG_ERROR => "png_error",
        FreetypeError = ffi::STATUS_FREETYPE_ERROR => "freetype_error",
        Win32GdiError = ffi::STATUS_WIN32_GDI_ERROR => "win32_gdi_error",
        TagError = ffi::STATUS_TAG_ERROR => "tag_error",
    }
}

/// Translate a raw native status into a result, in the manner of a status
/// word check after every wrapped call.
pub fn status_result(op: &'static str, raw: ffi::cairo_status_t) -> Result<(), CallError> {
    match Status::from_native(raw)? {
        Status::Success => Ok(()),
        status => Err(CallError::NativeStatus { op, status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trips<T>(all: &[T])
    where
        T: Copy + PartialEq + std::fmt::Debug,
        T: RoundTrip,
    {
        for &item in all {
            assert_eq!(T::from_tag(item.tag()).unwrap(), item);
            assert_eq!(T::from_native(item.to_native()).unwrap(), item);
        }
    }

    trait RoundTrip: Sized {
        fn tag(self) -> &'static str;
        fn to_native(self) -> i32;
        fn from_tag(tag: &str) -> Result<Self, CallError>;
        fn from_native(value: i32) -> Result<Self, CallError>;
    }

    macro_rules! impl_round_trip {
        ($($name:ident),+) => {
            $(impl RoundTrip for $name {
                fn tag(self) -> &'static str { $name::tag(self) }
                fn to_native(self) -> i32 { $name::to_native(self) }
                fn from_tag(tag: &str) -> Result<Self, CallError> { $name::from_tag(tag) }
                fn from_native(value: i32) -> Result<Self, CallError> { $name::from_native(value) }
            })+

            #[test]
            fn every_category_round_trips() {
                $(round_trips($name::ALL);)+
            }
        };
    }

    impl_round_trip!(
        Format,
        FontSlant,
        FontWeight,
        LineCap,
        LineJoin,
        Operator,
        Extend,
        Filter,
        Content,
        PatternType,
        FillRule,
        Antialias,
        RegionOverlap,
        Status
    );

    #[test]
    fn unknown_tag_is_rejected() {
        let err = Format::from_tag("argb64").unwrap_err();
        assert_eq!(
            err,
            CallError::UnknownEnumerant {
                category: "format",
                tag: "argb64".to_string(),
            }
        );
    }

    #[test]
    fn unmapped_native_value_is_rejected() {
        let err = RegionOverlap::from_native(17).unwrap_err();
        assert_eq!(
            err,
            CallError::UnmappedNativeValue {
                category: "region_overlap",
                value: 17,
            }
        );
    }

    #[test]
    fn weight_and_slant_are_strict_bijections() {
        // No two tags share a native value and no two native values share a
        // tag, in either table.
        for (i, a) in FontWeight::ALL.iter().enumerate() {
            for b in &FontWeight::ALL[i + 1..] {
                assert_ne!(a.to_native(), b.to_native());
                assert_ne!(a.tag(), b.tag());
            }
        }
        for (i, a) in FontSlant::ALL.iter().enumerate() {
            for b in &FontSlant::ALL[i + 1..] {
                assert_ne!(a.to_native(), b.to_native());
                assert_ne!(a.tag(), b.tag());
            }
        }
    }

    #[test]
    fn content_values_match_native_bit_patterns() {
        assert_eq!(Content::Color.to_native(), 0x1000);
        assert_eq!(Content::Alpha.to_native(), 0x2000);
        assert_eq!(Content::ColorAlpha.to_native(), 0x3000);
    }

    #[test]
    fn status_covers_the_documented_range() {
        for raw in 0..=42 {
            assert!(Status::from_native(raw).is_ok(), "status {raw} unmapped");
        }
        assert!(Status::from_native(43).is_err());
    }
}
