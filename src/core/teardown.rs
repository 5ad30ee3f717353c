/// Something held by the page (a listener, observer, timer or frame request)
/// that must be given back exactly once.
pub trait Release {
    fn release(self);
}

/// Owner of at most one live resource. `release` is idempotent, and drop
/// releases whatever is still held.
pub struct Teardown<T: Release> {
    live: Option<T>,
}

impl<T: Release> Teardown<T> {
    pub fn new(resource: T) -> Self {
        Self {
            live: Some(resource),
        }
    }

    /// Nothing started yet; releasing is a no-op.
    pub fn empty() -> Self {
        Self { live: None }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.live.as_ref()
    }

    /// Returns `true` only on the call that actually released.
    pub fn release(&mut self) -> bool {
        match self.live.take() {
            Some(resource) => {
                resource.release();
                true
            }
            None => false,
        }
    }

    /// Forget the resource without releasing it, e.g. a timer that already fired.
    pub fn disarm(&mut self) -> Option<T> {
        self.live.take()
    }
}

impl<T: Release> Default for Teardown<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Release> Drop for Teardown<T> {
    fn drop(&mut self) {
        self.release();
    }
}
