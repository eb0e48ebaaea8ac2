//! A single-owner-then-shared reference count pointer, used to chain historical
//! [`BoardState`](../../board/board_state/struct.BoardState.html)s without copying their
//! contents on every move.
//!
//! `UniqueArc<T>` is built, mutated freely while nothing else points at it, and then frozen
//! into a plain [`Arc`] once the move that produced it is committed. This mirrors how the
//! undo chain is built: a new state is assembled field-by-field from the previous one, then
//! shared so the previous state can still be reached through `prev`.

use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
#[allow(unused_imports)]
use std::sync::atomic;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

struct ArcInner<T: ?Sized> {
    count: atomic::AtomicUsize,
    data: T,
}

/// An `Arc` guaranteed to have a single owner. Allows mutation of the contained value,
/// and can be converted into a shareable [`Arc`] once construction is done.
pub struct UniqueArc<T: ?Sized>(Arc<T>);

unsafe impl<T: ?Sized + Sync + Send> Send for ArcInner<T> {}
unsafe impl<T: ?Sized + Sync + Send> Sync for ArcInner<T> {}

impl<T> UniqueArc<T> {
    /// Constructs a new `UniqueArc`.
    #[inline]
    pub fn new(data: T) -> Self {
        UniqueArc(Arc::new(data))
    }

    /// Converts this into a shareable `Arc<T>` once mutation is done.
    #[inline]
    pub fn shareable(self) -> Arc<T> {
        self.0
    }
}

impl<T> Deref for UniqueArc<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for UniqueArc<T> {
    fn deref_mut(&mut self) -> &mut T {
        // Uniquely owned by construction: nothing has cloned `self.0` yet.
        unsafe { &mut (*self.0.ptr()).data }
    }
}

/// Reference-counted pointer, shareable between threads. A small re-implementation of
/// `std::sync::Arc` kept local so the undo chain isn't paying for weak-count bookkeeping
/// it never uses.
pub struct Arc<T: ?Sized> {
    p: NonNull<ArcInner<T>>,
}

unsafe impl<T: ?Sized + Sync + Send> Send for Arc<T> {}
unsafe impl<T: ?Sized + Sync + Send> Sync for Arc<T> {}

impl<T> Arc<T> {
    /// Creates a new `Arc`.
    #[inline]
    pub fn new(data: T) -> Self {
        let x = Box::new(ArcInner {
            count: atomic::AtomicUsize::new(1),
            data,
        });
        unsafe {
            Arc {
                p: NonNull::new_unchecked(Box::into_raw(x)),
            }
        }
    }

    /// Clones the pointer, bumping the reference count. Named distinctly from
    /// `Arc::clone` so call sites are explicit about the shared-ownership bump.
    #[inline]
    pub fn clone(this: &Self) -> Self {
        this.inner().count.fetch_add(1, Relaxed);
        unsafe {
            Arc {
                p: NonNull::new_unchecked(this.ptr()),
            }
        }
    }
}

impl<T: ?Sized> Arc<T> {
    #[inline]
    fn ptr(&self) -> *mut ArcInner<T> {
        self.p.as_ptr()
    }

    #[inline]
    fn inner(&self) -> &ArcInner<T> {
        unsafe { &*self.ptr() }
    }

    /// Returns true if this is the only handle to the underlying allocation.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.inner().count.load(Relaxed) == 1
    }

    #[inline(never)]
    unsafe fn drop_slow(&mut self) {
        let _ = Box::from_raw(self.ptr());
    }
}

impl<T: ?Sized> Deref for Arc<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner().data
    }
}

impl<T: ?Sized> Clone for Arc<T> {
    #[inline]
    fn clone(&self) -> Self {
        Arc::clone(self)
    }
}

impl<T: ?Sized> Drop for Arc<T> {
    #[inline]
    fn drop(&mut self) {
        if self.inner().count.fetch_sub(1, Release) != 1 {
            return;
        }
        // Synchronizes with the `Release` above: every prior use of `data` happens-before
        // this load, which happens-before the deallocation.
        self.inner().count.load(Acquire);
        unsafe {
            self.drop_slow();
        }
    }
}
