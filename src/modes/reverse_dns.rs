use anyhow::{Result, ensure};
use colored::Colorize;

use crate::{
    io::{
        cli::CommandArgs,
        input,
        json::{Output, ReverseDnsOutput},
    },
    ip::{address::IpAddress, arpa, family::AddressFamily},
    log_error, log_info, log_success,
};

pub fn run(cmd_args: &CommandArgs) -> Result<()> {
    let addresses = input::read_address_list(&cmd_args.target)?;
    ensure!(
        !addresses.is_empty(),
        "No addresses to process in '{}'",
        cmd_args.target
    );

    let mut results_output = cmd_args
        .json
        .as_ref()
        .map(|_| ReverseDnsOutput::new(cmd_args.target.clone()));

    let mut generated: usize = 0;
    let mut failed: usize = 0;

    for address_text in &addresses {
        match address_text.parse::<IpAddress>() {
            Ok(address) => {
                let ptr_name = arpa::reverse_dns_name(
                    address,
                    template_for(address, cmd_args),
                    separator_for(address, cmd_args),
                );

                if !cmd_args.quiet {
                    log_success!("{} {}", address_text.cyan().bold(), ptr_name.blue());
                }
                if let Some(output) = &mut results_output {
                    output.add_result(address_text.clone(), ptr_name);
                }
                generated += 1;
            }
            Err(_) => {
                if !cmd_args.quiet {
                    log_error!("{address_text} - Invalid IP address");
                }
                failed += 1;
            }
        }
    }

    if !cmd_args.quiet {
        println!();
        log_info!("Generated {generated} reverse-DNS names ({failed} invalid)");
    }

    if let (Some(output), Some(file)) = (results_output, &cmd_args.json) {
        output.write_to_file(file)?;
    }

    Ok(())
}

fn template_for(address: IpAddress, cmd_args: &CommandArgs) -> &str {
    let override_template = match address.family() {
        AddressFamily::V4 => cmd_args.v4_domain.as_deref(),
        AddressFamily::V6 => cmd_args.v6_domain.as_deref(),
    };

    override_template
        .filter(|template| !template.trim().is_empty())
        .unwrap_or_else(|| arpa::default_template(address.family()))
}

fn separator_for(address: IpAddress, cmd_args: &CommandArgs) -> &str {
    let override_separator = match address.family() {
        AddressFamily::V4 => cmd_args.v4_separator.as_deref(),
        AddressFamily::V6 => cmd_args.v6_separator.as_deref(),
    };

    override_separator
        .filter(|separator| !separator.is_empty())
        .unwrap_or(arpa::DEFAULT_SEPARATOR)
}
