#![cfg_attr(not(test), no_std)]

pub mod convert;
pub mod design_parameters;
pub mod display;
pub mod notifier;
pub mod pacer;
pub mod pipeline;
pub mod sampler;
pub mod settings;
pub mod signal;
pub mod telemetry;
