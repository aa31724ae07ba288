use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::ip::{family::AddressFamily, validate};

/// Operation modes for the program
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OperationMode {
    #[value(name = "c")]
    Subnet,
    #[value(name = "r")]
    ReverseDns,
}

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "cidrscope",
    version = env!("CARGO_PKG_VERSION"),
    about = "An IPv4/IPv6 subnet calculator and reverse-DNS name generator",
)]
pub struct CommandArgs {
    /// The operation mode to run: subnet inspection or reverse-DNS generation
    #[arg(short = 'm', long = "mode", required = true, env = "CIDRSCOPE_MODE")]
    pub operation_mode: OperationMode,

    /// The target address. Subnet mode takes ADDRESS or ADDRESS/PREFIX; reverse-DNS
    /// mode also accepts a comma-separated list or a file with one address per line
    #[arg(short, long, required = true, value_parser = validate_target, env = "CIDRSCOPE_TARGET")]
    pub target: String,

    /// CIDR prefix length for subnet mode: 0-32 for IPv4, 0-128 for IPv6
    #[arg(short, long, required = false, value_parser = validate_prefix_text, env = "CIDRSCOPE_PREFIX")]
    pub prefix: Option<String>,

    /// Reverse-DNS domain template for IPv4 targets; every '$' is replaced with the reversed labels
    #[arg(long, env = "CIDRSCOPE_V4_DOMAIN")]
    pub v4_domain: Option<String>,

    /// Reverse-DNS domain template for IPv6 targets; every '$' is replaced with the reversed labels
    #[arg(long, env = "CIDRSCOPE_V6_DOMAIN")]
    pub v6_domain: Option<String>,

    /// Separator between reversed IPv4 labels
    #[arg(long, env = "CIDRSCOPE_V4_SEPARATOR")]
    pub v4_separator: Option<String>,

    /// Separator between reversed IPv6 labels
    #[arg(long, env = "CIDRSCOPE_V6_SEPARATOR")]
    pub v6_separator: Option<String>,

    /// Path of output file to write JSON results to. Extension is optional.
    #[arg(long, required = false, env = "CIDRSCOPE_JSON_OUTPUT")]
    pub json: Option<String>,

    /// Don't print results to the console, only write to the output file
    #[arg(short = 'Q', long, required = false, env = "CIDRSCOPE_QUIET")]
    pub quiet: bool,

    /// Don't show the welcome ASCII art
    #[arg(long, env = "CIDRSCOPE_NO_WELCOME")]
    pub no_welcome: bool,
}

impl CommandArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.json.is_none() {
            return Err("The argument '--quiet' requires '--json <OUTPUT_FILE>'".to_string());
        }

        match self.operation_mode {
            OperationMode::Subnet => self.validate_subnet_target(),
            OperationMode::ReverseDns => {
                if self.prefix.is_some() {
                    return Err(
                        "The argument '--prefix' only applies to subnet mode ('-m c')".to_string()
                    );
                }
                Ok(())
            }
        }
    }

    fn validate_subnet_target(&self) -> Result<(), String> {
        if self.target.contains(',') {
            return Err("Subnet mode takes a single target address".to_string());
        }

        let (address_text, inline_prefix) = split_target(&self.target);
        let family = if validate::is_valid_address(address_text, AddressFamily::V4) {
            AddressFamily::V4
        } else if validate::is_valid_address(address_text, AddressFamily::V6) {
            AddressFamily::V6
        } else {
            return Err(format!("Invalid target address: '{address_text}'"));
        };

        if inline_prefix.is_some() && self.prefix.is_some() {
            return Err(
                "The CIDR prefix is given both in the target and with '--prefix'".to_string(),
            );
        }

        if let Some(prefix_text) = inline_prefix.or(self.prefix.as_deref()) {
            if !validate::is_valid_prefix(prefix_text, family) {
                return Err(format!("Invalid CIDR prefix for {family}: '{prefix_text}'"));
            }
        }

        Ok(())
    }
}

/// Splits `10.0.0.5/24` into the address text and the optional prefix text.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('/') {
        Some((address, prefix)) => (address.trim_end(), Some(prefix.trim_start())),
        None => (target, None),
    }
}

/// Trims the target and rejects blank input
fn validate_target(target: &str) -> Result<String, String> {
    let target = target.trim();
    if target.is_empty() {
        return Err("Target must not be blank".to_string());
    }
    Ok(target.to_string())
}

/// Trims the prefix argument and rejects blank input; the range check
/// happens against the target's family once that is known
fn validate_prefix_text(prefix: &str) -> Result<String, String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err("CIDR prefix must not be blank".to_string());
    }
    Ok(prefix.to_string())
}

/// Retrieves and validates the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    let args = CommandArgs::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    args
}

/// Prints the ASCII art banner
pub fn print_ascii_art() {
    let title_art = r"
 ██████╗██╗██████╗ ██████╗ ███████╗ ██████╗ ██████╗ ██████╗ ███████╗
██╔════╝██║██╔══██╗██╔══██╗██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
██║     ██║██║  ██║██████╔╝███████╗██║     ██║   ██║██████╔╝█████╗
██║     ██║██║  ██║██╔══██╗╚════██║██║     ██║   ██║██╔═══╝ ██╔══╝
╚██████╗██║██████╔╝██║  ██║███████║╚██████╗╚██████╔╝██║     ███████╗
 ╚═════╝╚═╝╚═════╝ ╚═╝  ╚═╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝     ╚══════╝
";
    println!("{}", title_art.cyan());
    println!("Version: {}\n", env!("CARGO_PKG_VERSION"));
}
