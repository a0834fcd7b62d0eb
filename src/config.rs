//! Command line configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default port for the todo service
pub const DEFAULT_PORT: u16 = 8080;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "todos.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl Config {
    /// Build from process arguments. Unknown flags are ignored and bad values
    /// fall back to the defaults.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let defaults = Self::default();

        Self {
            host: flag_value(&args, &["--host"])
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: flag_value(&args, &["--port", "-p"])
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            db_path: flag_value(&args, &["--db", "-d"])
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Value following the first occurrence of any of `flags`
fn flag_value<'a>(args: &'a [String], flags: &[&str]) -> Option<&'a String> {
    args.iter()
        .position(|a| flags.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_fixed_port_and_file() {
        let config = Config::from_args(args(&["todo-server"]));
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().port(), 8080);
        assert_eq!(config.db_path, PathBuf::from("todos.db"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::from_args(args(&[
            "todo-server", "-p", "9000", "--db", "/tmp/t.db", "--host", "127.0.0.1",
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path, PathBuf::from("/tmp/t.db"));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_args(args(&["todo-server", "--port", "http"]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
