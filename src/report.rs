//! Report generation for planning results.
//!
//! Renders allocation plans, range divisions and summarization results as
//! human-readable text or JSON. Rendering is pure: every function returns a
//! string and leaves printing to the caller.

use std::net::Ipv4Addr;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::allocation::{AllocationPlan, AllocationRecord, Division};
use crate::ip::{Network, Sizing};

/// Semantic role of a piece of text, mapped to a terminal style by [`paint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Title,
    Heading,
    /// Rotating accent for per-network headings
    Accent(usize),
    Value,
    Success,
    Failure,
    Muted,
}

/// Style `text` for its tag
pub fn paint(tag: Tag, text: &str) -> ColoredString {
    match tag {
        Tag::Title => text.magenta().bold(),
        Tag::Heading => text.yellow().bold(),
        Tag::Accent(i) => match i % 6 {
            0 => text.red(),
            1 => text.green(),
            2 => text.yellow(),
            3 => text.blue(),
            4 => text.magenta(),
            _ => text.cyan(),
        },
        Tag::Value => text.cyan(),
        Tag::Success => text.green(),
        Tag::Failure => text.red(),
        Tag::Muted => text.dimmed(),
    }
}

fn opt(address: Option<Ipv4Addr>) -> String {
    address.map_or_else(|| "-".to_string(), |a| a.to_string())
}

/// One allocated network with everything a presenter shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub name: String,
    pub required_hosts: u64,
    pub with_margin: u64,
    pub block_size: u64,
    pub network: Network,
    pub broadcast: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub gateway: Option<Ipv4Addr>,
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub usable_hosts: u64,
    /// One-based position in largest-first order
    pub sizing_rank: usize,
    /// One-based position in assignment order
    pub assignment_step: usize,
}

impl From<&AllocationRecord> for RecordSummary {
    fn from(record: &AllocationRecord) -> Self {
        let network = record.network();
        let range = record.host_range();
        Self {
            name: record.name().to_string(),
            required_hosts: record.request().required_hosts,
            with_margin: record.sizing().with_margin,
            block_size: record.block_size(),
            network,
            broadcast: network.broadcast(),
            netmask: network.netmask(),
            gateway: record.gateway(),
            first_host: range.map(|(first, _)| first),
            last_host: range.map(|(_, last)| last),
            usable_hosts: network.usable_hosts(),
            sizing_rank: record.sizing_rank() + 1,
            assignment_step: record.assignment_step() + 1,
        }
    }
}

/// Serializable view of a whole plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub base_address: Ipv4Addr,
    /// One-based
    pub rotation_start: usize,
    pub total_addresses: u64,
    /// Input order
    pub networks: Vec<RecordSummary>,
}

impl From<&AllocationPlan> for PlanReport {
    fn from(plan: &AllocationPlan) -> Self {
        Self {
            base_address: plan.base(),
            rotation_start: plan.rotation_start() + 1,
            total_addresses: plan.total_addresses(),
            networks: plan.records().iter().map(RecordSummary::from).collect(),
        }
    }
}

/// One block of an equal division
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    pub network: Network,
    pub first_address: Ipv4Addr,
    pub last_address: Ipv4Addr,
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
}

impl From<Network> for BlockSummary {
    fn from(network: Network) -> Self {
        Self {
            network,
            first_address: network.base(),
            last_address: network.broadcast(),
            first_host: network.first_host(),
            last_host: network.last_host(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DivisionReport {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
    pub requested_blocks: u32,
    pub block_size: u64,
    pub prefix_len: u8,
    pub blocks: Vec<BlockSummary>,
}

impl From<&Division> for DivisionReport {
    fn from(division: &Division) -> Self {
        Self {
            start: division.start,
            end: division.end,
            requested_blocks: division.requested_blocks,
            block_size: division.block_size,
            prefix_len: division.prefix_len,
            blocks: division.networks.iter().copied().map(BlockSummary::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SizingReport {
    pub required_hosts: u64,
    #[serde(flatten)]
    pub sizing: Sizing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub networks: Vec<Network>,
    pub exact: bool,
    pub supernet: Network,
}

/// Pretty-printed JSON for any report
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Sizing table for a list of host counts
pub fn render_sizing_text(sizings: &[SizingReport]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(paint(Tag::Title, "NETWORK SIZING").to_string());
    for report in sizings {
        lines.push(format!(
            "{} hosts: total with margin {}, mask /{} with {} addresses",
            report.required_hosts,
            report.sizing.with_margin,
            paint(Tag::Value, &report.sizing.prefix_len.to_string()),
            report.sizing.total_addresses
        ));
    }
    lines.join("\n")
}

/// Human-readable plan: sizing summary, then assignment details
pub fn render_plan_text(plan: &AllocationPlan) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(paint(Tag::Title, "NETWORK SUMMARY (LARGEST FIRST)").to_string());
    for record in plan.in_sizing_order() {
        lines.push(format!(
            "Network {} ({}): {} hosts, total with margin {}, mask /{}",
            record.sizing_rank() + 1,
            record.name(),
            record.request().required_hosts,
            record.sizing().with_margin,
            record.prefix_len()
        ));
    }
    lines.push(String::new());

    lines.push(paint(Tag::Heading, &format!("Subnet assignment from {}:", plan.base())).to_string());
    for (step, record) in plan.in_assignment_order().into_iter().enumerate() {
        let summary = RecordSummary::from(record);
        lines.push(String::new());
        lines.push(paint(Tag::Accent(step), &format!("Details of network {}:", summary.name)).to_string());
        lines.push(format!("  Network:   {}", paint(Tag::Value, &summary.network.to_string())));
        lines.push(format!("  Broadcast: {}", summary.broadcast));
        lines.push(format!("  Mask:      {}", summary.netmask));
        lines.push(format!("  Gateway:   {}", opt(summary.gateway)));
        match (summary.first_host, summary.last_host) {
            (Some(first), Some(last)) => lines.push(format!("  Hosts:     {} - {}", first, last)),
            _ => lines.push(format!("  Hosts:     {}", paint(Tag::Muted, "no usable hosts"))),
        }
        lines.push(format!("  Usable:    {} of {} addresses", summary.usable_hosts, summary.block_size));
    }

    lines.join("\n")
}

/// Human-readable equal division
pub fn render_division_text(division: &Division) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(paint(Tag::Title, "EQUAL DIVISION").to_string());
    lines.push(paint(
        Tag::Success,
        &format!("Start of range: {} | End of range: {}", division.start, division.end),
    ).to_string());
    lines.push(paint(
        Tag::Success,
        &format!(
            "Blocks requested: {} | Block size: {} addresses | Mask: /{}",
            division.requested_blocks, division.block_size, division.prefix_len
        ),
    ).to_string());

    for (i, network) in division.networks.iter().enumerate() {
        let block = BlockSummary::from(*network);
        let style = Tag::Accent(i);
        lines.push(String::new());
        lines.push(paint(style, &format!("=== Block {} ===", i + 1)).to_string());
        lines.push(paint(style, &format!("  Subnet:        {}", block.network)).to_string());
        lines.push(paint(style, &format!("  First address: {}", block.first_address)).to_string());
        lines.push(paint(style, &format!("  Last address:  {}", block.last_address)).to_string());
        lines.push(paint(style, &format!("  Broadcast:     {}", block.network.broadcast())).to_string());
        lines.push(paint(style, &format!("  Mask:          /{}", block.network.prefix_len())).to_string());
        lines.push(paint(
            style,
            &format!("  Usable hosts:  {} - {}", opt(block.first_host), opt(block.last_host)),
        ).to_string());
    }

    if division.networks.len() < division.requested_blocks as usize {
        lines.push(String::new());
        lines.push(paint(
            Tag::Failure,
            &format!(
                "Only {} of {} blocks fit in the range",
                division.networks.len(),
                division.requested_blocks
            ),
        ).to_string());
    }

    lines.join("\n")
}

pub fn render_supernet_text(report: &SummaryReport) -> String {
    let listed: Vec<String> = report.networks.iter().map(Network::to_string).collect();
    format!(
        "{}\n{}",
        paint(Tag::Muted, &format!("Summarizing {}", listed.join(", "))),
        paint(Tag::Success, &format!("Supernet: {}", report.supernet))
    )
}

pub fn render_contiguous_text(networks: &[Network]) -> String {
    paint(
        Tag::Success,
        &format!("{} networks are contiguous", networks.len()),
    )
    .to_string()
}
