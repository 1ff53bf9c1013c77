use leptos::leptos_dom::helpers::IntervalHandle;

fn cleanup_compatible<F: FnOnce() + Send + Sync + 'static>(f: F) -> F {
    f
}

fn assert_copy<T: Copy>() {}

// Reactive-owner cleanup demands `FnOnce + Send + Sync`. The interval
// handle must keep satisfying those bounds from inside the clearing
// closure, or periodic components stop compiling under the `web` feature.
#[test]
fn interval_clear_closure_meets_cleanup_bounds() {
    fn check(handle: IntervalHandle) {
        let _ = cleanup_compatible(move || handle.clear());
    }
    let _ = check;
}

#[test]
fn interval_handle_is_copy() {
    assert_copy::<IntervalHandle>();
}
