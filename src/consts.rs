pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying flow outcomes back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // STORE CONFIGURATION
    // =============================================================================

    /// Remote food store settings
    pub mod store {
        use std::time::Duration;

        /// Base URL of the store when running against a local API server.
        pub const LOCAL_API_URL: &str = "http://localhost:3333";

        /// Collection path for food resources.
        pub const FOODS_PATH: &str = "foods";

        /// Connection timeout for store requests (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for store requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard appears.
        pub const SPLASH_DURATION_MS: u64 = 1500;

        /// Poll interval for terminal key events (milliseconds)
        pub const KEY_POLL_INTERVAL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn key_poll_interval() -> Duration {
            Duration::from_millis(KEY_POLL_INTERVAL_MS)
        }
    }

    // =============================================================================
    // CONFIG FILE
    // =============================================================================

    /// Directory under the user's home that holds the config file.
    pub const CONFIG_DIR: &str = ".food-dashboard";

    /// Config file name.
    pub const CONFIG_FILE: &str = "config.json";
}
