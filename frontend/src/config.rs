use shared::clock::TICK_INTERVAL;

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // In development Vite/Trunk proxies /api/ to the backend, in production nginx does.
        // Relative URLs work for both.
        "".to_string()
    }

    /// Countdown refresh period in milliseconds
    pub fn tick_interval_ms() -> u32 {
        u32::try_from(TICK_INTERVAL.as_millis()).unwrap_or(1000)
    }
}
