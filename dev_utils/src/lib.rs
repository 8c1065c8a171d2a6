use metro::network::{ConnectionRecord, StationIndex, StationRecord};
use metro::Network;

// Common example data for the demos, tests and benchmarks.

pub const EXAMPLE_STATIONS: [StationRecord<'static>; 27] = [
    ("KR1", "Antakya", "Red Line"),
    ("KR2", "Defne", "Red Line"),
    ("KR3", "Samandağ", "Red Line"),
    ("KR4", "Yayladağı", "Red Line"),
    ("KR5", "Arsuz", "Red Line"),
    ("M1", "Antakya", "Blue Line"),
    ("M2", "Kırıkhan", "Blue Line"),
    ("M3", "Hassa", "Blue Line"),
    ("M4", "Osmaniye", "Blue Line"),
    ("M5", "Reyhanlı", "Blue Line"),
    ("Y1", "İskenderun", "Yellow Line"),
    ("Y2", "Payas", "Yellow Line"),
    ("Y3", "Erzin", "Yellow Line"),
    ("Y4", "Ceyhan", "Yellow Line"),
    ("P1", "Dörtyol", "Pink Line"),
    ("P2", "Hacıpaşa", "Pink Line"),
    ("P3", "Toprakkale", "Pink Line"),
    ("GR1", "Belen", "Grey Line"),
    ("GR2", "Kumlu", "Grey Line"),
    ("GR3", "Payas", "Grey Line"),
    ("GR4", "Yakacık", "Grey Line"),
    ("TR1", "Altınözü", "Turquoise Line"),
    ("TR2", "Yayladağı", "Turquoise Line"),
    ("TR3", "Narlıca", "Turquoise Line"),
    ("TR4", "Şenköy", "Turquoise Line"),
    ("TR5", "Büyükdalyan", "Turquoise Line"),
    ("TR6", "Harbiye", "Turquoise Line"),
];

// Travel times in minutes.
pub const EXAMPLE_CONNECTIONS: [ConnectionRecord<'static>; 30] = [
    ("KR1", "KR2", 5), ("KR2", "KR3", 10), ("KR3", "KR4", 10), ("KR4", "KR5", 15),
    ("M1", "M2", 8), ("M2", "M3", 12), ("M3", "M4", 15), ("M4", "M5", 18),
    ("Y1", "Y2", 7), ("Y2", "Y3", 9), ("Y3", "Y4", 11),
    ("P1", "P2", 6), ("P2", "P3", 8),
    // Transfers between lines.
    ("KR1", "M1", 2), ("KR4", "Y1", 4), ("M4", "P1", 3), ("KR2", "M2", 6), ("Y2", "P2", 5),
    ("GR1", "GR2", 7), ("TR1", "TR2", 9), ("KR5", "GR1", 12), ("M5", "TR1", 14),
    ("GR2", "GR3", 5), ("GR3", "GR4", 6), ("TR2", "TR3", 7), ("TR3", "TR4", 8),
    ("TR4", "TR5", 9), ("TR5", "TR6", 10), ("KR1", "KR4", 20), ("GR1", "GR4", 15),
];

pub fn build_example_network() -> Network {
    Network::from_records(&EXAMPLE_STATIONS, &EXAMPLE_CONNECTIONS).expect("Example network is valid.")
}

pub fn get_example_start_id() -> &'static str { "KR3" }

pub fn get_example_end_id() -> &'static str { "TR6" }

pub fn get_example_scenario() -> (Network, StationIndex, StationIndex) {
    let network = build_example_network();
    let start = network.get_station_idx(get_example_start_id()).unwrap();
    let end = network.get_station_idx(get_example_end_id()).unwrap();
    (network, start, end)
}

/// A random network of `num_stations` stations spread over a few lines. Each line is a chain, and
/// `num_transfers` extra connections join random pairs of stations (possibly creating parallel
/// connections or leaving parts of the network disconnected).
pub fn build_random_network(rng: &mut fastrand::Rng, num_stations: usize, num_transfers: usize, max_travel_time: i64) -> Network {
    const NUM_LINES: usize = 4;
    let mut network = Network::new();
    let ids: Vec<String> = (0..num_stations).map(|i| format!("S{i:04}")).collect();

    for (i, id) in ids.iter().enumerate() {
        let line = format!("Line {}", i % NUM_LINES);
        network.add_station(id, &format!("Station {i}"), &line).unwrap();
    }

    // Chain stations along each line, leaving some gaps.
    for i in NUM_LINES..num_stations {
        if rng.u8(..10) > 0 {
            network.add_connection(&ids[i - NUM_LINES], &ids[i], rng.i64(1..=max_travel_time)).unwrap();
        }
    }

    if num_stations >= 2 {
        for _ in 0..num_transfers {
            let a = rng.usize(..num_stations);
            let b = rng.usize(..num_stations);
            if a != b {
                network.add_connection(&ids[a], &ids[b], rng.i64(1..=max_travel_time)).unwrap();
            }
        }
    }

    network
}
