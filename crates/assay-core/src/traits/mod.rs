pub mod enhancement_log;
pub mod pattern_storage;

pub use enhancement_log::IEnhancementLog;
pub use pattern_storage::IPatternStorage;
