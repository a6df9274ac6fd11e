//! Pose catalog and timer settings generated from poses.toml

use limber_core::Pose;

include!(concat!(env!("OUT_DIR"), "/poses.rs"));
