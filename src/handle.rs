//! Typed wrappers for native object pointers, and the registry that hands
//! them out.
//!
//! A [`Handle`] stands in for one native object on the host side of the
//! boundary.  The handle records at construction time whether it *owns* its
//! native reference (finalization releases it, exactly once) or merely
//! *borrows* a reference the native library continues to manage
//! (finalization never touches it).  That single bit is the invariant this
//! whole layer exists to protect: releasing a borrowed pointer corrupts the
//! native library's own reference counting, and releasing an owned pointer
//! twice is a double free.
//!
//! Destruction is routed through a [`KindTable`]: one destructor per handle
//! kind, built once at initialization and passed in explicitly.  Handles
//! may be cloned and dropped from any thread; the release is guarded by an
//! atomic pointer swap so a duplicated collector callback cannot fire the
//! destructor twice.

use crate::error::CallError;
use libc::c_void;
use cairo_ffi as ffi;
use std::fmt;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Surface,
    Context,
    Path,
    Pattern,
    FontFace,
    FontOptions,
    Region,
}

impl HandleKind {
    pub const COUNT: usize = 7;
    pub const ALL: &'static [HandleKind] = &[
        HandleKind::Surface,
        HandleKind::Context,
        HandleKind::Path,
        HandleKind::Pattern,
        HandleKind::FontFace,
        HandleKind::FontOptions,
        HandleKind::Region,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandleKind::Surface => "surface",
            HandleKind::Context => "context",
            HandleKind::Path => "path",
            HandleKind::Pattern => "pattern",
            HandleKind::FontFace => "font_face",
            HandleKind::FontOptions => "font_options",
            HandleKind::Region => "region",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destructor dispatch, one entry per [`HandleKind`] in declaration order.
pub struct KindTable {
    destructors: [unsafe fn(*mut c_void); HandleKind::COUNT],
}

impl KindTable {
    pub const fn new(destructors: [unsafe fn(*mut c_void); HandleKind::COUNT]) -> Self {
        KindTable { destructors }
    }

    /// The table routing each kind to its real native destructor.
    pub fn native() -> &'static KindTable {
        static NATIVE: KindTable = KindTable::new([
            destroy_surface,
            destroy_context,
            destroy_path,
            destroy_pattern,
            destroy_font_face,
            destroy_font_options,
            destroy_region,
        ]);
        &NATIVE
    }

    /// Invoke the destructor for `kind` on `ptr`.
    ///
    /// # Safety
    /// `ptr` must be a live native object of the matching kind whose
    /// reference is owned by the caller.
    pub unsafe fn destroy(&self, kind: HandleKind, ptr: *mut c_void) {
        (self.destructors[kind.index()])(ptr)
    }
}

unsafe fn destroy_surface(ptr: *mut c_void) {
    ffi::cairo_surface_destroy(ptr.cast());
}

unsafe fn destroy_context(ptr: *mut c_void) {
    ffi::cairo_destroy(ptr.cast());
}

unsafe fn destroy_path(ptr: *mut c_void) {
    ffi::cairo_path_destroy(ptr.cast());
}

unsafe fn destroy_pattern(ptr: *mut c_void) {
    ffi::cairo_pattern_destroy(ptr.cast());
}

unsafe fn destroy_font_face(ptr: *mut c_void) {
    ffi::cairo_font_face_destroy(ptr.cast());
}

unsafe fn destroy_font_options(ptr: *mut c_void) {
    ffi::cairo_font_options_destroy(ptr.cast());
}

unsafe fn destroy_region(ptr: *mut c_void) {
    ffi::cairo_region_destroy(ptr.cast());
}

struct Cell {
    kind: HandleKind,
    owned: bool,
    ptr: AtomicPtr<c_void>,
    kinds: &'static KindTable,
}

impl Cell {
    /// Clear the pointer and, for owned handles, release the native
    /// reference.  Safe to call any number of times; only the first call
    /// that observes a non-null pointer has any effect.
    fn release(&self) {
        let ptr = self.ptr.swap(ptr::null_mut(), Ordering::AcqRel);
        if ptr.is_null() {
            return;
        }
        if self.owned {
            log::trace!("releasing {} {:p}", self.kind, ptr);
            unsafe { self.kinds.destroy(self.kind, ptr) }
        }
    }
}

impl Drop for Cell {
    fn drop(&mut self) {
        self.release();
    }
}

/// A host-visible, typed stand-in for a native pointer.
///
/// Cloning a handle clones the wrapper, not the native reference: all
/// clones share one cell, and the native reference is released when the
/// last clone is dropped or when the registry finalizes the handle
/// explicitly, whichever comes first.
#[derive(Clone)]
pub struct Handle {
    cell: Arc<Cell>,
}

impl Handle {
    pub fn kind(&self) -> HandleKind {
        self.cell.kind
    }

    pub fn is_owned(&self) -> bool {
        self.cell.owned
    }

    /// True once the handle no longer refers to a native object, either
    /// because it was finalized or because it never referred to one.
    pub fn is_null(&self) -> bool {
        self.cell.ptr.load(Ordering::Acquire).is_null()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &self.cell.kind.name())
            .field("owned", &self.cell.owned)
            .field("ptr", &self.cell.ptr.load(Ordering::Relaxed))
            .finish()
    }
}

/// Allocates, type-tags, resolves and finalizes handles.
pub struct Registry {
    kinds: &'static KindTable,
}

impl Registry {
    pub fn new(kinds: &'static KindTable) -> Registry {
        Registry { kinds }
    }

    /// Wrap a native pointer whose reference we own; finalization will
    /// release it.
    pub fn register_owned(&self, kind: HandleKind, ptr: *mut c_void) -> Result<Handle, CallError> {
        self.register(kind, ptr, true)
    }

    /// Wrap a native pointer the library continues to own; finalization is
    /// a no-op.
    pub fn register_borrowed(
        &self,
        kind: HandleKind,
        ptr: *mut c_void,
    ) -> Result<Handle, CallError> {
        self.register(kind, ptr, false)
    }

    fn register(&self, kind: HandleKind, ptr: *mut c_void, owned: bool) -> Result<Handle, CallError> {
        if ptr.is_null() {
            return Err(CallError::Allocation { kind });
        }
        Ok(Handle {
            cell: Arc::new(Cell {
                kind,
                owned,
                ptr: AtomicPtr::new(ptr),
                kinds: self.kinds,
            }),
        })
    }

    /// Check the handle's type tag and produce its native pointer.  Handles
    /// whose pointer has been cleared are rejected, so no operation can
    /// dereference a finalized or failed handle.
    pub fn resolve(
        &self,
        handle: &Handle,
        expected: HandleKind,
    ) -> Result<NonNull<c_void>, CallError> {
        if handle.kind() != expected {
            return Err(CallError::KindMismatch {
                expected,
                got: handle.kind(),
            });
        }
        NonNull::new(handle.cell.ptr.load(Ordering::Acquire))
            .ok_or(CallError::NullHandle { kind: expected })
    }

    /// Collector hook: release an owned handle's native reference.
    /// Idempotent, and a no-op for borrowed handles beyond clearing the
    /// pointer so later resolution fails cleanly instead of dangling.
    pub fn finalize(&self, handle: &Handle) {
        handle.cell.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn noop(_ptr: *mut c_void) {}

    static NOOP_KINDS: KindTable = KindTable::new([noop; HandleKind::COUNT]);

    fn registry() -> Registry {
        Registry::new(&NOOP_KINDS)
    }

    fn dangling() -> *mut c_void {
        0x1000 as *mut c_void
    }

    #[test]
    fn null_pointers_are_not_registered() {
        let err = registry()
            .register_owned(HandleKind::Surface, ptr::null_mut())
            .unwrap_err();
        assert_eq!(
            err,
            CallError::Allocation {
                kind: HandleKind::Surface
            }
        );
    }

    #[test]
    fn resolve_checks_the_kind_tag() {
        let reg = registry();
        let h = reg.register_owned(HandleKind::Pattern, dangling()).unwrap();
        let err = reg.resolve(&h, HandleKind::Surface).unwrap_err();
        assert_eq!(
            err,
            CallError::KindMismatch {
                expected: HandleKind::Surface,
                got: HandleKind::Pattern,
            }
        );
    }

    #[test]
    fn finalized_handles_no_longer_resolve() {
        let reg = registry();
        let h = reg.register_owned(HandleKind::Region, dangling()).unwrap();
        assert!(reg.resolve(&h, HandleKind::Region).is_ok());
        reg.finalize(&h);
        assert!(h.is_null());
        let err = reg.resolve(&h, HandleKind::Region).unwrap_err();
        assert_eq!(
            err,
            CallError::NullHandle {
                kind: HandleKind::Region
            }
        );
    }

    #[test]
    fn clones_share_one_cell() {
        let reg = registry();
        let a = reg.register_owned(HandleKind::Path, dangling()).unwrap();
        let b = a.clone();
        assert_eq!(a, b);
        reg.finalize(&a);
        assert!(b.is_null());
    }
}
