//! Background video analysis on the apalis Redis queue.
//!
//! Jobs are pushed through [`JobQueue`], which keeps a short-lived tracking key per job in Redis so
//! a job already waiting in the queue is not pushed again by the next scheduler run. The handler
//! removes the key once the job finishes.

pub mod handler;
pub mod queue;

pub use handler::handle_job;
pub use queue::JobQueue;
