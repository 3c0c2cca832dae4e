use std::{
    env,
    fmt::Display,
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    str::FromStr,
};

// Runtime settings, read from the environment (and .env when present).

const DEFAULT_PORT: u16 = 5000;

pub fn http_port() -> u16 {
    parse_or("PIZZA_PARTY_PORT", DEFAULT_PORT)
}

pub fn bind_host() -> IpAddr {
    parse_or("PIZZA_PARTY_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

pub fn data_dir() -> PathBuf {
    env::var_os("PIZZA_PARTY_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

// Base used for the links printed at startup.
pub fn public_url(port: u16) -> String {
    env::var("PIZZA_PARTY_PUBLIC_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| format!("http://localhost:{port}"))
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|err| {
            tracing::warn!(
                key,
                value = %raw,
                error = %err,
                %default,
                "invalid setting, using default"
            );
            default
        }),
        Err(_) => default,
    }
}

// Everything the server needs beyond its listener.
#[derive(Clone, Debug)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub public_url: String,
}

impl Settings {
    pub fn from_env(port: u16) -> Self {
        Self {
            data_dir: data_dir(),
            public_url: public_url(port),
        }
    }
}
