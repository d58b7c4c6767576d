use std::collections::VecDeque;

/// Double-ended work queue for 0/1-weighted shortest path search
///
/// Items reached through a zero-cost edge are queued at the front, all others at the back. As
/// long as items are only ever popped from the front, the queue holds at most two cost bands, and
/// the front item always has the minimal cost. Duplicates are allowed; it's up to the caller to
/// skip stale entries.
#[derive(Debug, Clone)]
pub struct ZeroOneQueue<T> {
    items: VecDeque<T>,
}

impl<T> ZeroOneQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn queue_urgent(&mut self, item: T) {
        self.items.push_front(item)
    }

    #[inline]
    pub fn queue_deferred(&mut self, item: T) {
        self.items.push_back(item)
    }

    #[inline]
    pub fn queue(&mut self, item: T, urgent: bool) {
        if urgent {
            self.queue_urgent(item)
        } else {
            self.queue_deferred(item)
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ZeroOneQueue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::with_capacity(64),
        }
    }
}
