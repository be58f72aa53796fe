//! Default solution list, compiled into the binary by `build.rs`

include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
