//! Property-based checks for address arithmetic, sizing and allocation

use proptest::prelude::*;
use std::net::Ipv4Addr;

use subnetplan::aggregate::{is_contiguous, summarize, summarize_exact};
use subnetplan::allocation::{allocate_vlsm, divide_range, CapacityRequest};
use subnetplan::ip::{from_u32, parse_address, size_for_hosts, to_u32, Network, MAX_PREFIX_LEN};

fn any_address() -> impl Strategy<Value = Ipv4Addr> {
    any::<u32>().prop_map(from_u32)
}

proptest! {
    #[test]
    fn dotted_quad_roundtrips(a: u8, b: u8, c: u8, d: u8) {
        let text = format!("{}.{}.{}.{}", a, b, c, d);
        let addr = parse_address(&text).unwrap();
        prop_assert_eq!(addr.to_string(), text);
        prop_assert_eq!(from_u32(to_u32(addr)), addr);
    }

    #[test]
    fn canonical_networks_have_no_host_bits(addr in any_address(), prefix in 0u8..=MAX_PREFIX_LEN) {
        let network = Network::new(addr, prefix).unwrap();
        prop_assert_eq!(to_u32(network.base()) & network.host_mask(), 0);
        prop_assert!(network.contains(addr));
        prop_assert_eq!(network.num_addresses(), 1u64 << (32 - prefix as u32));
    }

    #[test]
    fn sizing_is_power_of_two_above_margin(hosts in 3u64..=3_000_000) {
        let sizing = size_for_hosts(hosts).unwrap();
        prop_assert!(sizing.total_addresses.is_power_of_two());
        prop_assert!(sizing.total_addresses >= sizing.with_margin);
        prop_assert!(sizing.with_margin > hosts);
        prop_assert_eq!(sizing.total_addresses, 1u64 << (32 - sizing.prefix_len as u32));
    }

    #[test]
    fn summary_of_single_network_is_itself(addr in any_address(), prefix in 0u8..=MAX_PREFIX_LEN) {
        let network = Network::new(addr, prefix).unwrap();
        prop_assert_eq!(summarize(&[network]), Ok(network));
        prop_assert_eq!(summarize_exact(&[network]), Ok(network));
    }

    #[test]
    fn summary_covers_every_input(addrs in prop::collection::vec((any_address(), 8u8..=32), 1..8)) {
        let networks: Vec<Network> = addrs
            .into_iter()
            .map(|(addr, prefix)| Network::new(addr, prefix).unwrap())
            .collect();
        let supernet = summarize(&networks).unwrap();
        for network in &networks {
            prop_assert!(supernet.contains_network(network));
        }
    }

    #[test]
    fn vlsm_from_first_position_never_overlaps(
        hosts in prop::collection::vec(3u64..5000, 1..12),
        base in 0u32..0x8000_0000,
    ) {
        let requests: Vec<CapacityRequest> = hosts
            .iter()
            .enumerate()
            .map(|(i, &h)| CapacityRequest::new(format!("net{}", i), h))
            .collect();
        let plan = allocate_vlsm(&requests, 0, from_u32(base)).unwrap();

        let networks = plan.networks();
        for (i, a) in networks.iter().enumerate() {
            for b in networks.iter().skip(i + 1) {
                prop_assert!(!a.contains_network(b) && !b.contains_network(a));
            }
        }
        for record in plan.records() {
            prop_assert_eq!(record.network().num_addresses(), record.sizing().total_addresses);
        }
    }

    #[test]
    fn division_blocks_are_equal_and_contiguous(start in 0u32..0x1000_0000, span in 4u32..65_536, blocks in 1u32..16) {
        let end = from_u32(start + span);
        match divide_range(from_u32(start), end, blocks) {
            Ok(division) => {
                prop_assert!(!division.networks.is_empty());
                prop_assert!(division.block_size.is_power_of_two());
                for network in &division.networks {
                    prop_assert_eq!(network.num_addresses(), division.block_size);
                    prop_assert!(to_u32(network.base()) <= to_u32(end));
                }
                prop_assert!(is_contiguous(&division.networks));
            }
            Err(_) => prop_assert!((span as u64 + 1) / (blocks as u64) < 4),
        }
    }
}
