//! Concurrent multiple-producer multiple-consumer queues based on mutex and
//! condition variable.

/// Unbounded blocking MPMC queue with a one-way close transition.
///
/// The queue trades the lock-free fast path of a fixed-size ring for two
/// things a ring cannot give: storage that grows without a pre-declared
/// bound, and consumers that sleep on a condition variable instead of
/// spinning. Producers never wait. Consumers wait until an element arrives
/// or the queue closes, and a closed queue still hands out everything that
/// was pushed before the close.
///
/// # Examples
///
/// ```
/// use waitq::mpmc::unbounded::Queue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let q = Arc::new(Queue::new());
/// let r = q.clone();
///
/// let producer = thread::spawn(move || {
///     r.push('a');
///     r.push('b');
///     r.close();
/// });
///
/// assert_eq!(q.pop(), Some('a'));
/// assert_eq!(q.pop(), Some('b'));
/// assert_eq!(q.pop(), None);
/// producer.join().unwrap();
/// ```
pub mod unbounded {
    use std::collections::VecDeque;
    use std::sync::{Condvar, Mutex};

    /// An unbounded blocking MPMC queue.
    #[derive(Debug)]
    pub struct Queue<T> {
        /// The pending elements together with the closed flag.
        ///
        /// Both live behind the same mutex: a consumer decides to wait only
        /// while holding the lock, so it either observes `closed` or is
        /// still registered on the condvar when the close broadcast fires.
        /// Splitting the flag out of the lock would reintroduce the lost
        /// wake-up race.
        inner: Mutex<Inner<T>>,

        /// Signalled once per push, broadcast on close.
        not_empty: Condvar,
    }

    #[derive(Debug)]
    struct Inner<T> {
        /// Pending elements in FIFO order.
        buf: VecDeque<T>,

        /// One-way flag: set by `close`, never cleared.
        closed: bool,
    }

    impl<T> Queue<T> {
        /// Creates a new open, empty queue.
        pub fn new() -> Self {
            Self::with_capacity(0)
        }

        /// Creates a new queue whose storage has room for at least `cap`
        /// elements before reallocating.
        ///
        /// The capacity is an allocation hint, not a bound; the queue grows
        /// past it on demand.
        pub fn with_capacity(cap: usize) -> Self {
            Queue {
                inner: Mutex::new(Inner {
                    buf: VecDeque::with_capacity(cap),
                    closed: false,
                }),
                not_empty: Condvar::new(),
            }
        }

        /// Appends a value to the tail of the queue and wakes one waiting
        /// consumer.
        ///
        /// Never blocks and never fails. After [`close`] the value is
        /// silently discarded; producers are not expected to coordinate
        /// with closing.
        ///
        /// [`close`]: #method.close
        pub fn push(&self, value: T) {
            let mut inner = self.inner.lock().unwrap();
            if inner.closed {
                return;
            }
            inner.buf.push_back(value);
            drop(inner);
            // One element can satisfy one waiter; close is the only
            // transition that broadcasts.
            self.not_empty.notify_one();
        }

        /// Removes and returns the head of the queue, waiting until an
        /// element is available or the queue is closed.
        ///
        /// Returns `None` only once the queue is both closed and drained.
        /// Transient emptiness while the queue is open never produces
        /// `None`; the calling thread is suspended instead.
        pub fn pop(&self) -> Option<T> {
            let mut inner = self.inner.lock().unwrap();
            loop {
                if let Some(value) = inner.buf.pop_front() {
                    return Some(value);
                }
                if inner.closed {
                    return None;
                }
                // A wake-up does not imply a non-empty queue; the predicate
                // is re-checked on every iteration.
                inner = self.not_empty.wait(inner).unwrap();
            }
        }

        /// Removes and returns the head of the queue if one is present.
        ///
        /// Returns `None` when the queue is currently empty, whether or not
        /// it is closed. Never suspends the calling thread.
        pub fn try_pop(&self) -> Option<T> {
            self.inner.lock().unwrap().buf.pop_front()
        }

        /// Closes the queue and wakes every waiting consumer.
        ///
        /// Later pushes are discarded, while elements queued before the
        /// close remain poppable until the queue is drained. Closing an
        /// already closed queue leaves it unchanged.
        pub fn close(&self) {
            let mut inner = self.inner.lock().unwrap();
            inner.closed = true;
            let pending = inner.buf.len();
            drop(inner);
            // Every blocked consumer has to observe the terminal state.
            self.not_empty.notify_all();
            debug!("queue closed"; "pending" => pending);
        }

        /// Returns `true` if the queue has been closed.
        ///
        /// Inaccurate in the presence of concurrent method invocations: the
        /// queue may close right after the flag is read.
        pub fn is_closed(&self) -> bool {
            self.inner.lock().unwrap().closed
        }

        /// Returns the current number of elements inside the queue.
        ///
        /// Inaccurate in the presence of concurrent method invocations.
        pub fn len(&self) -> usize {
            self.inner.lock().unwrap().buf.len()
        }

        /// Returns `true` if the queue is empty.
        ///
        /// Inaccurate in the presence of concurrent method invocations.
        pub fn is_empty(&self) -> bool {
            self.inner.lock().unwrap().buf.is_empty()
        }

        /// Calls `f` on every queued element, head to tail, without
        /// removing any. Traversal stops early if `f` returns `true`.
        ///
        /// The lock is held for the whole traversal, so concurrent pushes,
        /// pops and closes block until it finishes. Keep `f` short, and do
        /// not call back into the same queue from inside `f`: the lock is
        /// not reentrant and doing so deadlocks.
        pub fn for_each<F>(&self, mut f: F)
        where
            F: FnMut(&T) -> bool,
        {
            let inner = self.inner.lock().unwrap();
            for value in inner.buf.iter() {
                if f(value) {
                    break;
                }
            }
        }
    }

    impl<T> Default for Queue<T> {
        fn default() -> Self {
            Queue::new()
        }
    }
}
