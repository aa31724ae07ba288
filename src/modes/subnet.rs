use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    io::{
        cli::{self, CommandArgs},
        json::{Output, SubnetOutput},
    },
    ip::{
        address::IpAddress,
        block::NetworkBlock,
        classify::{self, Classification},
        family::AddressFamily,
        prefix::PrefixLength,
    },
    log_warn,
};

pub fn run(cmd_args: &CommandArgs) -> Result<()> {
    let (address_text, inline_prefix) = cli::split_target(&cmd_args.target);
    let prefix_text = inline_prefix.or(cmd_args.prefix.as_deref());

    let address: IpAddress = address_text
        .parse()
        .with_context(|| format!("Failed to parse target '{address_text}'"))?;
    let classification = classify::classify(address);

    let block = prefix_text
        .map(|text| -> Result<NetworkBlock> {
            let prefix = PrefixLength::parse(text, address.family())
                .with_context(|| format!("Failed to parse CIDR prefix '{text}'"))?;
            Ok(NetworkBlock::compute(address, prefix)?)
        })
        .transpose()?;

    if !cmd_args.quiet {
        print_report(address, &classification, block);
    }

    if let Some(json_path) = &cmd_args.json {
        let output = SubnetOutput {
            target: cmd_args.target.clone(),
            address: address.to_string(),
            family: address.family().to_string(),
            class: classification.class.to_string(),
            kind: classification.kind.to_string(),
            block,
            is_network_address: block.map(|block| block.is_network_address()),
            is_broadcast_address: block.map(|block| block.is_broadcast_address()),
        };
        output.write_to_file(json_path)?;
    }

    Ok(())
}

fn print_report(address: IpAddress, classification: &Classification, block: Option<NetworkBlock>) {
    println!();
    print_field(
        "IP Address",
        format!("{} ({})", address.to_string().cyan().bold(), address.family()),
    );
    print_field("Address Class", classification.class.to_string().magenta());
    print_field("Address Type", classification.kind.to_string().magenta());

    let Some(block) = block else {
        println!();
        return;
    };

    // IPv6 has no broadcast; the highest address fills the same slot.
    let highest_label = match address.family() {
        AddressFamily::V4 => "Broadcast Address",
        AddressFamily::V6 => "Last Address",
    };

    print_field("CIDR Prefix", format!("/{}", block.prefix).bright_yellow());
    print_field("Network Mask", block.mask.to_string().blue());
    print_field(
        "Total Addresses",
        block.address_count.to_string().bright_yellow(),
    );
    print_field("Network Address", block.network.to_string().blue());
    print_field(highest_label, block.broadcast.to_string().blue());
    print_field("First Usable", block.first_usable.to_string().green());
    print_field("Last Usable", block.last_usable.to_string().green());
    println!();

    if !block.prefix.is_single_address() {
        if block.is_network_address() {
            log_warn!("{address} is the network address of this block");
        }
        if block.is_broadcast_address() {
            match address.family() {
                AddressFamily::V4 => {
                    log_warn!("{address} is the broadcast address of this block");
                }
                AddressFamily::V6 => {
                    log_warn!("{address} is the last address of this block");
                }
            }
        }
    }
}

fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<20}{value}", format!("{label}:"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::cli::OperationMode;

    fn args(target: &str) -> CommandArgs {
        CommandArgs {
            operation_mode: OperationMode::Subnet,
            target: target.to_string(),
            prefix: None,
            v4_domain: None,
            v6_domain: None,
            v4_separator: None,
            v6_separator: None,
            json: None,
            quiet: true,
            no_welcome: true,
        }
    }

    #[test]
    fn test_run_with_inline_prefix() {
        assert!(run(&args("10.0.0.5/24")).is_ok());
        assert!(run(&args("2001:db8::1/64")).is_ok());
    }

    #[test]
    fn test_run_without_prefix() {
        assert!(run(&args("172.16.5.1")).is_ok());
    }

    #[test]
    fn test_run_rejects_invalid_target() {
        assert!(run(&args("10.0.0.999/24")).is_err());
    }

    #[test]
    fn test_run_rejects_prefix_beyond_family_width() {
        assert!(run(&args("10.0.0.5/64")).is_err());
    }

    #[test]
    fn test_flag_prefix_applies_when_target_has_none() {
        let mut cmd_args = args("10.0.0.5");
        cmd_args.prefix = Some("24".to_string());
        assert!(run(&cmd_args).is_ok());
    }
}
