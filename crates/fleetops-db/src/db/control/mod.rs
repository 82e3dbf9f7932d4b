pub mod settings;

pub use settings::SettingsRepository;
