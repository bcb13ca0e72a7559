//! Settings types.

use std::net::SocketAddr;

/// Default database file outside of test mode.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3";
/// Default database file in test mode.
pub const TEST_DATABASE_URL: &str = "sqlite://test_db.sqlite3";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Production,
    /// Separate database file, wiped on startup.
    Test,
}

impl Mode {
    pub fn parse(s: &str) -> Mode {
        if s.trim().eq_ignore_ascii_case("test") {
            Mode::Test
        } else {
            Mode::Production
        }
    }

    pub fn is_test(self) -> bool {
        matches!(self, Mode::Test)
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub mode: Mode,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}
