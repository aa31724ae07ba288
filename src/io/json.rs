use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::ip::block::NetworkBlock;
use crate::log_info;

pub trait Output {
    fn write_to_file(&self, output_file: &str) -> Result<()>;
}

/// Report written by subnet mode. The block section is absent when no
/// prefix was supplied.
#[derive(Serialize)]
pub struct SubnetOutput {
    pub target: String,
    pub address: String,
    pub family: String,
    pub class: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<NetworkBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_network_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_broadcast_address: Option<bool>,
}

#[derive(Serialize)]
pub struct ReverseDnsEntry {
    pub address: String,
    pub ptr_name: String,
}

/// Report written by reverse-DNS mode; one entry per valid address.
#[derive(Serialize)]
pub struct ReverseDnsOutput {
    pub target: String,
    pub results: Vec<ReverseDnsEntry>,
}

impl Output for SubnetOutput {
    fn write_to_file(&self, output_file: &str) -> Result<()> {
        write_json(self, output_file)
    }
}

impl Output for ReverseDnsOutput {
    fn write_to_file(&self, output_file: &str) -> Result<()> {
        write_json(self, output_file)
    }
}

impl ReverseDnsOutput {
    pub const fn new(target: String) -> Self {
        Self {
            target,
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, address: String, ptr_name: String) {
        self.results.push(ReverseDnsEntry { address, ptr_name });
    }
}

fn write_json<T: Serialize>(data: &T, output_file: &str) -> Result<()> {
    let output_file = if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        output_file.to_string()
    } else {
        format!("{output_file}.json")
    };

    let file = File::create(&output_file)?;
    serde_json::to_writer_pretty(file, data)?;

    log_info!("JSON output written to: {output_file}");

    Ok(())
}
