use clap::Parser;
use common::PointsTable;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// HTTP service that scores finished short nardy games
#[derive(Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(version)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "NARDY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind to
    #[arg(short, long, env = "NARDY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory for the daily rolling log files
    #[arg(long, env = "NARDY_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Points for an oin
    #[arg(long, env = "NARDY_OIN_POINTS", default_value_t = 1)]
    pub oin_points: u32,

    /// Points for a mars
    #[arg(long, env = "NARDY_MARS_POINTS", default_value_t = 2)]
    pub mars_points: u32,

    /// Points for a koks
    #[arg(long, env = "NARDY_KOKS_POINTS", default_value_t = 3)]
    pub koks_points: u32,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn points_table(&self) -> PointsTable {
        PointsTable::new(self.oin_points, self.mars_points, self.koks_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["backend"]).unwrap();
        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 8000)));
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
        assert_eq!(config.points_table(), PointsTable::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "backend",
            "--host",
            "0.0.0.0",
            "--port",
            "9100",
            "--koks-points",
            "4",
        ])
        .unwrap();
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 9100)));
        assert_eq!(config.points_table(), PointsTable::new(1, 2, 4));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::try_parse_from(["backend", "--port", "not-a-port"]).is_err());
    }
}
