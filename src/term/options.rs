use ansi_term::Colour;
use clap::Parser;

/// PC P command processor with a line-numbered BASIC mode.
#[derive(Parser, Debug)]
#[command(name = "pcp", version, about, long_about = None)]
pub struct Options {
    /// Program file to LOAD at start-up
    #[arg(value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Start in BASIC mode
    #[arg(long)]
    pub basic: bool,

    /// Prompt color
    #[arg(long, value_name = "R,G,B", value_parser = parse_color)]
    pub color: Option<Colour>,

    /// Skip the splash banner
    #[arg(long)]
    pub no_splash: bool,

    /// Statements run between checks for Ctrl-C
    #[arg(
        long,
        value_name = "N",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub cycles: u64,
}

fn parse_color(s: &str) -> Result<Colour, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [r, g, b] => crate::shell::system::color(r, g, b)
            .ok_or_else(|| format!("'{}' components must be 0 to 255", s)),
        _ => Err(format!("'{}' is not R,G,B", s)),
    }
}
