pub mod traits;
pub mod signal;
pub mod fetch;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use signal::{SignalConfig, WarmupPolicy};
pub use fetch::FetchConfig;
pub use display::DisplayConfig;
pub use traits::{ConfigSection, ConfigManifest};
