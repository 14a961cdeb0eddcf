//! Tests that need a Redis server on `127.0.0.1:6379`.
//!
//! Run with `--features redis-test`.

mod job_queue;
