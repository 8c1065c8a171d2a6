use std::collections::VecDeque;

use crate::network::{Network, StationIndex};
use crate::route::{self, Route, RouteError, RouteResult};
use crate::search_tree::{NodeIndex, SearchTree};

/// Finds the route crossing the fewest connections between two stations, ignoring travel time.
pub fn fewest_stops_query<'a>(network: &'a Network, start: &str, end: &str) -> RouteResult<'a> {
    let (start, end) = route::resolve_endpoints(network, start, end)?;
    fewest_stops_query_by_idx(network, start, end)
}

// Breadth-first search. A station is marked visited when it is dequeued, not when it is queued, so
// it may sit in the queue several times; only its first dequeue counts.
pub fn fewest_stops_query_by_idx(network: &Network, start: StationIndex, end: StationIndex) -> RouteResult {
    route::check_endpoints(network, start, end)?;

    let mut visited = vec![false; network.num_stations()];
    let mut tree = SearchTree::new();
    let mut queue: VecDeque<(StationIndex, Option<NodeIndex>)> = VecDeque::from([(start, None)]);

    while let Some((station, parent)) = queue.pop_front() {
        if station == end {
            let stations = tree.path_to(station, parent);
            log::debug!(
                "Fewest stops from {} to {}: {} stops after expanding {} stations.",
                network.get_station(start).id,
                network.get_station(end).id,
                stations.len() - 1,
                tree.len()
            );
            return Ok(Route::from(stations, network));
        }

        if visited[station as usize] {
            continue;
        }
        visited[station as usize] = true;
        let node = tree.push(station, parent);

        for adjacency in &network.get_station(station).neighbours {
            // Entries for stations already expanded would only be skipped when dequeued.
            if !visited[adjacency.station as usize] {
                queue.push_back((adjacency.station, Some(node)));
            }
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
    fn ignores_travel_time() {
        let network = triangle();
        let route = fewest_stops_query(&network, "A", "C").unwrap();
        assert_eq!(ids(&route), ["A", "C"]);
        assert_eq!(route.num_stops(), 1);
    }

    #[test]
    fn same_start_and_end() {
        let network = triangle();
        let route = fewest_stops_query(&network, "B", "B").unwrap();
        assert_eq!(ids(&route), ["B"]);
        assert_eq!(route.num_stops(), 0);
    }

    #[test]
    fn unknown_stations() {
        let network = triangle();
        assert_eq!(
            fewest_stops_query(&network, "Z", "A").unwrap_err(),
            RouteError::UnknownStation("Z".to_owned())
        );
        assert_eq!(
            fewest_stops_query(&network, "A", "Z").unwrap_err(),
            RouteError::UnknownStation("Z".to_owned())
        );
        assert_eq!(
            fewest_stops_query_by_idx(&network, 0, 3).unwrap_err(),
            RouteError::UnknownStation("#3".to_owned())
        );
    }

    #[test]
    fn disconnected_stations() {
        let network = Network::from_records(&[("D", "Delta", "X"), ("E", "Epsilon", "Y")], &[]).unwrap();
        assert_eq!(fewest_stops_query(&network, "D", "E").unwrap_err(), RouteError::NoRouteFound);
    }

    #[test]
    fn first_discovered_parent_wins() {
        // A - B - D and A - C - D are both two stops; B is queued before C.
        let network = Network::from_records(
            &[("A", "A", "X"), ("B", "B", "X"), ("C", "C", "X"), ("D", "D", "X")],
            &[("A", "B", 9), ("A", "C", 1), ("B", "D", 9), ("C", "D", 1)],
        )
        .unwrap();
        let route = fewest_stops_query(&network, "A", "D").unwrap();
        assert_eq!(ids(&route), ["A", "B", "D"]);
    }

    #[test]
    fn repeated_queries_agree() {
        let network = triangle();
        let first = fewest_stops_query(&network, "A", "C").unwrap();
        let second = fewest_stops_query(&network, "A", "C").unwrap();
        assert_eq!(first.stations, second.stations);
    }
}
