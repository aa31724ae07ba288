mod io;
mod ip;
mod modes;

use anyhow::Result;

use crate::io::cli::{self, OperationMode};

fn main() -> Result<()> {
    let cmd_args = cli::get_parsed_args();

    if !cmd_args.no_welcome && !cmd_args.quiet {
        cli::print_ascii_art();
    }

    match cmd_args.operation_mode {
        OperationMode::Subnet => modes::subnet::run(&cmd_args),
        OperationMode::ReverseDns => modes::reverse_dns::run(&cmd_args),
    }
}
