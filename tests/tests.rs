#[cfg(feature = "server")]
mod controller;

#[cfg(feature = "redis-test")]
mod redis;

#[cfg(feature = "server")]
mod util;
