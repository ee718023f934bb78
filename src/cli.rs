//! CLI argument definitions using clap derive macros.

use clap::Parser;

use curse_maven::{DEFAULT_API_BASE, DEFAULT_CDN_BASE};

/// Synthetic Maven repository backed by the CurseForge CDN.
///
/// Serves `curse.maven:{slug}-{projectId}:{fileId}` coordinates to build
/// tools by resolving them against CurseForge metadata.
#[derive(Parser, Debug)]
#[command(name = "curse-maven")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Address to bind the HTTP listener on
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// CurseForge metadata API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// CDN base URL used for redirect targets and proxied fetches
    #[arg(long, default_value = DEFAULT_CDN_BASE)]
    pub cdn_base: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["curse-maven"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.bind, "0.0.0.0");
        assert_eq!(args.port, 8080);
        assert_eq!(args.api_base, DEFAULT_API_BASE);
        assert_eq!(args.cdn_base, DEFAULT_CDN_BASE);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["curse-maven", "-v"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["curse-maven", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_port_and_bind_override() {
        let args =
            Args::try_parse_from(["curse-maven", "--bind", "127.0.0.1", "--port", "9000"]).unwrap();
        assert_eq!(args.bind, "127.0.0.1");
        assert_eq!(args.port, 9000);
    }

    #[test]
    fn test_cli_api_base_override() {
        let args =
            Args::try_parse_from(["curse-maven", "--api-base", "http://localhost:9999"]).unwrap();
        assert_eq!(args.api_base, "http://localhost:9999");
    }
}
