//! Seed node tables for peer discovery.
//!
//! Fixed seeds are pre-resolved addresses shipped with the client. Each one
//! is stamped with a random last-seen time of between one and two weeks ago,
//! so the address manager treats them as stale, low-priority candidates: once
//! a node connects it receives a pile of addresses with newer timestamps and
//! prefers those.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, SystemTime};

use rand::Rng;

const ONE_WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// A DNS seed entry: a diagnostic label and the hostname to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// A pre-resolved seed peer with its stamped last-seen time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedAddress {
    pub address: SocketAddr,
    pub last_seen: SystemTime,
}

const MAINNET_FIXED_SEEDS: [(Ipv4Addr, u16); 4] = [
    (Ipv4Addr::new(80, 211, 188, 74), 9538),
    (Ipv4Addr::new(80, 211, 56, 67), 9538),
    (Ipv4Addr::new(94, 177, 214, 106), 9538),
    (Ipv4Addr::new(217, 61, 105, 223), 9538),
];

/// Fixed seeds for the main network, freshly stamped.
pub fn mainnet_fixed_seeds() -> Vec<SeedAddress> {
    stamp_fixed_seeds(
        MAINNET_FIXED_SEEDS
            .iter()
            .map(|&(ip, port)| SocketAddr::new(IpAddr::V4(ip), port)),
    )
}

/// Fixed seeds for the test network. The shipped table is currently empty.
pub fn testnet_fixed_seeds() -> Vec<SeedAddress> {
    Vec::new()
}

/// DNS seeds for the main network.
pub fn mainnet_dns_seeds() -> Vec<DnsSeed> {
    [
        "seed01.connectbusinessnet.com",
        "seed02.connectbusinessnet.com",
        "seed03.connectbusinessnet.com",
        "seed04.connectbusinessnet.com",
        "explorer.connectbusinessnet.com",
    ]
    .iter()
    .map(|&host| DnsSeed { name: host, host })
    .collect()
}

/// Stamps each address with a random last-seen time between one and two
/// weeks in the past.
pub fn stamp_fixed_seeds(addresses: impl IntoIterator<Item = SocketAddr>) -> Vec<SeedAddress> {
    let mut rng = rand::thread_rng();
    let now = SystemTime::now();
    addresses
        .into_iter()
        .map(|address| {
            let age = ONE_WEEK + Duration::from_secs(rng.gen_range(0..ONE_WEEK.as_secs()));
            SeedAddress {
                address,
                last_seen: now - age,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_seen_between_one_and_two_weeks_ago() {
        let seeds = mainnet_fixed_seeds();
        assert_eq!(seeds.len(), 4);

        let now = SystemTime::now();
        for seed in &seeds {
            let age = now
                .duration_since(seed.last_seen)
                .expect("seed stamped in the past");
            // A little slack on the lower bound for clock granularity.
            assert!(age >= ONE_WEEK - Duration::from_secs(5), "age {age:?}");
            assert!(age < 2 * ONE_WEEK + Duration::from_secs(5), "age {age:?}");
        }
    }

    #[test]
    fn test_mainnet_seed_ports() {
        for seed in mainnet_fixed_seeds() {
            assert_eq!(seed.address.port(), 9538);
        }
    }

    #[test]
    fn test_testnet_table_is_empty() {
        assert!(testnet_fixed_seeds().is_empty());
    }

    #[test]
    fn test_mainnet_dns_seed_hosts() {
        let seeds = mainnet_dns_seeds();
        assert_eq!(seeds.len(), 5);
        assert!(seeds
            .iter()
            .all(|s| s.host.ends_with("connectbusinessnet.com")));
    }
}
