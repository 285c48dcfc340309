//! Finalization semantics, exercised against a recording destructor table
//! so no native object is ever touched.

use cairo_host::{CallError, HandleKind, KindTable, Registry, Runtime, Value};
use libc::c_void;
use std::sync::Mutex;

static DESTROYED: Mutex<Vec<usize>> = Mutex::new(Vec::new());

unsafe fn record(ptr: *mut c_void) {
    DESTROYED.lock().unwrap().push(ptr as usize);
}

static RECORDING: KindTable = KindTable::new([record; HandleKind::COUNT]);

fn times_destroyed(ptr: usize) -> usize {
    DESTROYED.lock().unwrap().iter().filter(|&&p| p == ptr).count()
}

fn registry() -> Registry {
    Registry::new(&RECORDING)
}

#[test]
fn owned_handles_release_exactly_once() {
    let reg = registry();
    let h = reg
        .register_owned(HandleKind::Surface, 0x1010 as *mut c_void)
        .unwrap();
    assert_eq!(times_destroyed(0x1010), 0);

    reg.finalize(&h);
    assert_eq!(times_destroyed(0x1010), 1);

    // a duplicated collector callback must be a no-op
    reg.finalize(&h);
    drop(h);
    assert_eq!(times_destroyed(0x1010), 1);
}

#[test]
fn borrowed_handles_never_destroy() {
    let reg = registry();
    let h = reg
        .register_borrowed(HandleKind::Pattern, 0x2020 as *mut c_void)
        .unwrap();
    assert!(!h.is_owned());

    reg.finalize(&h);
    drop(h);
    assert_eq!(times_destroyed(0x2020), 0);
}

#[test]
fn dropping_the_last_clone_releases() {
    let reg = registry();
    let a = reg
        .register_owned(HandleKind::Region, 0x3030 as *mut c_void)
        .unwrap();
    let b = a.clone();

    drop(a);
    assert_eq!(times_destroyed(0x3030), 0);

    drop(b);
    assert_eq!(times_destroyed(0x3030), 1);
}

#[test]
fn kind_mismatch_fires_before_any_destructor_runs() {
    let reg = registry();
    let h = reg
        .register_owned(HandleKind::FontFace, 0x4040 as *mut c_void)
        .unwrap();
    let err = reg.resolve(&h, HandleKind::Surface).unwrap_err();
    assert_eq!(
        err,
        CallError::KindMismatch {
            expected: HandleKind::Surface,
            got: HandleKind::FontFace,
        }
    );
    assert_eq!(times_destroyed(0x4040), 0);
}

#[test]
fn finalized_handles_resolve_to_null_handle_errors() {
    let reg = registry();
    let h = reg
        .register_owned(HandleKind::Path, 0x5050 as *mut c_void)
        .unwrap();
    reg.finalize(&h);
    let err = reg.resolve(&h, HandleKind::Path).unwrap_err();
    assert_eq!(
        err,
        CallError::NullHandle {
            kind: HandleKind::Path
        }
    );
}

// Dispatching with a wrong-kind handle must fail in the adapter; the
// dangling pointers used here would crash the process if any native call
// were attempted.
#[test]
fn dispatch_rejects_wrong_kind_handles_without_native_calls() {
    let rt = Runtime::with_kind_table(&RECORDING);
    let region = rt
        .registry()
        .register_owned(HandleKind::Region, 0x6060 as *mut c_void)
        .unwrap();

    let err = rt.invoke("fill", &[Value::Handle(region.clone())]).unwrap_err();
    assert_eq!(
        err,
        CallError::KindMismatch {
            expected: HandleKind::Context,
            got: HandleKind::Region,
        }
    );

    let err = rt
        .invoke("image_surface_get_width", &[Value::Handle(region)])
        .unwrap_err();
    assert_eq!(
        err,
        CallError::KindMismatch {
            expected: HandleKind::Surface,
            got: HandleKind::Region,
        }
    );
}

#[test]
fn dispatch_rejects_non_handle_values_for_handle_slots() {
    let rt = Runtime::with_kind_table(&RECORDING);
    let err = rt.invoke("paint", &[Value::Float(1.0)]).unwrap_err();
    assert_eq!(
        err,
        CallError::ArgumentType {
            op: "paint",
            index: 0,
            expected: "context handle",
            got: "float".to_string(),
        }
    );
}
