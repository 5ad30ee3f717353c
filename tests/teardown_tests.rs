// Host-side tests for one-shot resource release (listeners, observers,
// timers, frame requests). The main crate is wasm-only, so we include the
// pure-Rust modules directly and count releases with a stand-in resource.

#![allow(dead_code, unused_imports)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use std::cell::Cell;
use std::rc::Rc;

struct Counted {
    releases: Rc<Cell<u32>>,
}

impl Release for Counted {
    fn release(self) {
        self.releases.set(self.releases.get() + 1);
    }
}

fn counted() -> (Teardown<Counted>, Rc<Cell<u32>>) {
    let releases = Rc::new(Cell::new(0));
    let handle = Teardown::new(Counted {
        releases: releases.clone(),
    });
    (handle, releases)
}

#[test]
fn stop_twice_releases_once() {
    let (mut handle, releases) = counted();
    assert!(handle.is_live());
    assert!(handle.release());
    assert!(!handle.release());
    assert_eq!(releases.get(), 1);
    assert!(!handle.is_live());
}

#[test]
fn stop_before_start_is_a_noop() {
    let mut handle: Teardown<Counted> = Teardown::empty();
    assert!(!handle.is_live());
    assert!(!handle.release());
    assert!(!handle.release());
    assert!(handle.get().is_none());
    drop(handle);

    let default_handle: Teardown<Counted> = Teardown::default();
    assert!(!default_handle.is_live());
}

#[test]
fn drop_after_stop_does_not_release_again() {
    let (mut handle, releases) = counted();
    handle.release();
    drop(handle);
    assert_eq!(releases.get(), 1);
}

#[test]
fn drop_without_stop_releases_once() {
    let (handle, releases) = counted();
    drop(handle);
    assert_eq!(releases.get(), 1);
}

#[test]
fn fired_timer_is_forgotten_not_cleared() {
    let (mut handle, releases) = counted();
    assert!(handle.disarm().is_some());
    assert!(!handle.release());
    drop(handle);
    assert_eq!(releases.get(), 0);
}

#[test]
fn restarting_a_timer_clears_only_the_pending_one() {
    let releases = Rc::new(Cell::new(0));
    let mut pending: Teardown<Counted> = Teardown::empty();
    for _ in 0..3 {
        // trigger: cancel what is pending, then arm a new one
        pending.release();
        pending = Teardown::new(Counted {
            releases: releases.clone(),
        });
    }
    assert_eq!(releases.get(), 2);
    pending.release();
    pending.release();
    assert_eq!(releases.get(), 3);
}

// Several handles torn down together, the way the page handle unmounts.
#[test]
fn unmounting_everything_twice_releases_each_once() {
    let releases = Rc::new(Cell::new(0));
    let mut handles: Vec<Teardown<Counted>> = (0..4)
        .map(|_| {
            Teardown::new(Counted {
                releases: releases.clone(),
            })
        })
        .collect();
    handles.push(Teardown::empty());

    for _ in 0..2 {
        for h in &mut handles {
            h.release();
        }
    }
    drop(handles);
    assert_eq!(releases.get(), 4);
}
