/// Bot settings loaded from the environment (`.env` supported)
pub mod settings;

pub use settings::BotConfig;
