//! Growable blocking queues for in-process producer/consumer hand-off.
//!
//! The central type is [`Queue`], an unbounded FIFO queue guarded by a mutex
//! and a condition variable. Producers [`push`] without ever waiting; the
//! queue grows on demand instead of exerting backpressure. Consumers either
//! [`pop`], suspending until an element arrives, or [`try_pop`], returning
//! immediately. A one-way [`close`] transition stops intake while letting
//! consumers drain whatever is already queued.
//!
//! Here's a visualization of a queue holding 2 values `a` and `b`.
//!
//! ```text
//!    ___
//!   | a | <- head (Queue::pop, Queue::try_pop)
//!   | b |
//!   |   | <- tail (Queue::push)
//!    ¯¯¯
//! ```
//!
//! # Usage: draining work distribution
//!
//! A typical setup shares one queue between any number of producer and
//! consumer threads. Producers push work items as they are discovered.
//! Consumers loop on [`pop`] and treat `None` as the shutdown signal: it is
//! only ever returned once the queue is closed *and* empty, so no queued
//! work is abandoned. Whichever thread decides the run is over calls
//! [`close`], which wakes every blocked consumer.
//!
//! There is no built-in timed wait. A caller that needs one can race
//! [`try_pop`] against its own timer, or close the queue to force blocked
//! consumers out.
//!
//! [`Queue`]: mpmc/unbounded/struct.Queue.html
//! [`push`]: mpmc/unbounded/struct.Queue.html#method.push
//! [`pop`]: mpmc/unbounded/struct.Queue.html#method.pop
//! [`try_pop`]: mpmc/unbounded/struct.Queue.html#method.try_pop
//! [`close`]: mpmc/unbounded/struct.Queue.html#method.close

#[macro_use]
extern crate slog_global;

pub mod mpmc;
