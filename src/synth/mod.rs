// Purpose: Voice management, polyphony, trigger intake
// This layer sits above the dsp primitives and owns every piece of voice state

pub mod config;
pub mod message;
pub mod poly;
pub mod pool;
pub mod tuning;
pub mod voice;
