#[macro_use]
extern crate approx;

mod common;
mod cube_split;
mod identity_pass;
#[cfg(feature = "parallel")]
mod parallel_dispatch;
mod partition;
mod proximity_merge;
