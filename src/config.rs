use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Parser, Debug)]
#[command(name = "plotter")]
#[command(about = "Click on a coordinate grid to plot points.")]
pub struct Config {
    /// Address the embedded point store listens on
    #[arg(long, env = "PLOTTER_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Use an already running point store instead of starting one
    #[arg(long, env = "PLOTTER_SERVER_URL", conflicts_with = "serve")]
    pub server_url: Option<String>,

    /// Run only the point store, without opening the canvas
    #[arg(long)]
    pub serve: bool
}

impl Config {
    pub fn parse_args() -> Self { Self::parse() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loopback_5000() {
        let config = Config::try_parse_from(["plotter"]).unwrap();

        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.server_url.is_none());
        assert!(!config.serve);
    }

    #[test]
    fn external_server() {
        let config = Config::try_parse_from(["plotter", "--server-url", "http://10.0.0.2:8080"]).unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://10.0.0.2:8080"));
    }

    #[test]
    fn serve_conflicts_with_external_server() {
        let result = Config::try_parse_from(["plotter", "--serve", "--server-url", "http://10.0.0.2:8080"]);
        assert!(result.is_err());
    }
}
