use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::network::{Network, StationIndex, TravelTime};
use crate::route::{self, FastestRoute, FastestRouteResult, Route, RouteError};

// Field order is the heap order: accumulated time, then station id, then the path's station ids
// compared element by element. Identical paths over parallel connections fall back to push order.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry<'a> {
    travel_time: TravelTime,
    station_id: &'a str,
    // Start to this station inclusive. Ids are unique, so pairs compare exactly like the ids alone.
    path: Vec<(&'a str, StationIndex)>,
    sequence: usize,
    station: StationIndex,
}

impl<'a> FrontierEntry<'a> {
    fn start(network: &'a Network, start: StationIndex) -> Self {
        let station_id = &*network.get_station(start).id;
        Self {
            travel_time: 0,
            station_id,
            path: vec![(station_id, start)],
            sequence: 0,
            station: start,
        }
    }

    fn extend(&self, network: &'a Network, station: StationIndex, travel_time: TravelTime, sequence: usize) -> Self {
        let station_id = &*network.get_station(station).id;
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push((station_id, station));
        Self {
            travel_time: self.travel_time.saturating_add(travel_time),
            station_id,
            path,
            sequence,
            station,
        }
    }
}

/// Finds the route with the least total travel time between two stations.
pub fn fastest_query<'a>(network: &'a Network, start: &str, end: &str) -> FastestRouteResult<'a> {
    let (start, end) = route::resolve_endpoints(network, start, end)?;
    fastest_query_by_idx(network, start, end)
}

// Dijkstra without decrease-key: stale entries stay in the heap and are skipped once their station
// has been settled. Relies on every travel time being positive.
pub fn fastest_query_by_idx(network: &Network, start: StationIndex, end: StationIndex) -> FastestRouteResult {
    route::check_endpoints(network, start, end)?;

    let mut settled = vec![false; network.num_stations()];
    let mut num_settled = 0;
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;
    frontier.push(Reverse(FrontierEntry::start(network, start)));

    while let Some(Reverse(entry)) = frontier.pop() {
        if entry.station == end {
            let stations: Vec<StationIndex> = entry.path.iter().map(|&(_, station)| station).collect();
            log::debug!(
                "Fastest route from {} to {}: {} minutes over {} stops after settling {} stations.",
                network.get_station(start).id,
                entry.station_id,
                entry.travel_time,
                stations.len() - 1,
                num_settled
            );
            return Ok(FastestRoute {
                route: Route::from(stations, network),
                travel_time: entry.travel_time,
            });
        }

        if settled[entry.station as usize] {
            continue;
        }
        settled[entry.station as usize] = true;
        num_settled += 1;

        for adjacency in &network.get_station(entry.station).neighbours {
            if settled[adjacency.station as usize] {
                continue;
            }
            sequence += 1;
            frontier.push(Reverse(entry.extend(network, adjacency.station, adjacency.travel_time, sequence)));
        }
    }

    log::debug!(
        "No route from {} to {}.",
        network.get_station(start).id,
        network.get_station(end).id
    );
    Err(RouteError::NoRouteFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Network {
        Network::from_records(
            &[("A", "Alpha", "X"), ("B", "Beta", "X"), ("C", "Gamma", "Y")],
            &[("A", "B", 5), ("B", "C", 10), ("A", "C", 20)],
        )
        .unwrap()
    }

    fn ids(route: &Route) -> Vec<String> {
        route.stations().map(|station| station.id.to_string()).collect()
    }

    #[test]
    fn prefers_quicker_detour() {
        let network = triangle();
        let fastest = fastest_query(&network, "A", "C").unwrap();
        assert_eq!(ids(&fastest.route), ["A", "B", "C"]);
        assert_eq!(fastest.travel_time, 15);
        assert_eq!(fastest.route.travel_time(), 15);
    }

    #[test]
    fn same_start_and_end() {
        let network = triangle();
        let fastest = fastest_query(&network, "C", "C").unwrap();
        assert_eq!(ids(&fastest.route), ["C"]);
        assert_eq!(fastest.travel_time, 0);
    }

    #[test]
    fn unknown_and_disconnected_stations() {
        let network = Network::from_records(&[("D", "Delta", "X"), ("E", "Epsilon", "Y")], &[]).unwrap();
        assert_eq!(fastest_query(&network, "D", "E").unwrap_err(), RouteError::NoRouteFound);
        assert_eq!(
            fastest_query(&network, "D", "Q").unwrap_err(),
            RouteError::UnknownStation("Q".to_owned())
        );
        assert_eq!(
            fastest_query_by_idx(&network, 5, 0).unwrap_err(),
            RouteError::UnknownStation("#5".to_owned())
        );
    }

    #[test]
    fn uses_quickest_parallel_connection() {
        let mut network = triangle();
        network.add_connection("A", "C", 4).unwrap();
        let fastest = fastest_query(&network, "A", "C").unwrap();
        assert_eq!(ids(&fastest.route), ["A", "C"]);
        assert_eq!(fastest.travel_time, 4);
    }

    #[test]
    fn equal_times_break_ties_by_station_id() {
        // A - M - D and A - B - D both take 2 minutes. B sorts before M, so it is settled first
        // and becomes D's parent.
        let network = Network::from_records(
            &[("A", "A", "X"), ("M", "M", "X"), ("B", "B", "X"), ("D", "D", "X")],
            &[("A", "M", 1), ("A", "B", 1), ("M", "D", 1), ("B", "D", 1)],
        )
        .unwrap();
        for _ in 0..3 {
            let fastest = fastest_query(&network, "A", "D").unwrap();
            assert_eq!(ids(&fastest.route), ["A", "B", "D"]);
            assert_eq!(fastest.travel_time, 2);
        }
    }

    #[test]
    fn equal_times_to_the_same_station_compare_paths() {
        // D is reached at time 3 via C first and via B second. [A, B, D] sorts before [A, C, D].
        let network = Network::from_records(
            &[("A", "A", "X"), ("B", "B", "X"), ("C", "C", "X"), ("D", "D", "X")],
            &[("A", "C", 1), ("A", "B", 2), ("C", "D", 2), ("B", "D", 1)],
        )
        .unwrap();
        let fastest = fastest_query(&network, "A", "D").unwrap();
        assert_eq!(ids(&fastest.route), ["A", "B", "D"]);
        assert_eq!(fastest.travel_time, 3);
    }

    #[test]
    fn paths_compare_by_ids_not_length() {
        // Both reach E at time 4. [A, B, C, E] sorts before [A, B, E] because C < E.
        let network = Network::from_records(
            &[("A", "A", "X"), ("B", "B", "X"), ("C", "C", "X"), ("E", "E", "X")],
            &[("A", "B", 1), ("B", "C", 1), ("C", "E", 2), ("B", "E", 3)],
        )
        .unwrap();
        let fastest = fastest_query(&network, "A", "E").unwrap();
        assert_eq!(ids(&fastest.route), ["A", "B", "C", "E"]);
        assert_eq!(fastest.travel_time, 4);
    }
}
