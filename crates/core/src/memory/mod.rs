//! Customer / work-item memory: persistence port and service

pub mod ports;
pub mod service;

pub use ports::StateStore;
pub use service::MemoryService;
