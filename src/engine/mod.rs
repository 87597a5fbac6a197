pub mod allocator;
pub mod driver;

pub use self::{allocator::VoiceAllocator, driver::Driver};
