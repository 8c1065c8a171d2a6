use std::fmt::Display;

use crate::network::{Network, Station, StationIndex, TravelTime};
use crate::utils;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Station {0} is not in the network.")]
    UnknownStation(String),
    #[error("No route found.")]
    NoRouteFound,
}

pub type RouteResult<'a> = Result<Route<'a>, RouteError>;
pub type FastestRouteResult<'a> = Result<FastestRoute<'a>, RouteError>;

/// Stations from start to destination inclusive. Never empty.
#[derive(Debug, Clone)]
pub struct Route<'a> {
    pub(crate) stations: Vec<StationIndex>,
    pub(crate) network: &'a Network,
}

/// A route paired with its total travel time along the connections it crossed.
#[derive(Debug, Clone)]
pub struct FastestRoute<'a> {
    pub route: Route<'a>,
    pub travel_time: TravelTime,
}

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: StationIndex,
    pub to: StationIndex,
    pub travel_time: TravelTime,
}

/// Looks up both ends of a query by station id.
pub(crate) fn resolve_endpoints(network: &Network, start: &str, end: &str) -> Result<(StationIndex, StationIndex), RouteError> {
    let lookup = |id: &str| network.get_station_idx(id).ok_or_else(|| RouteError::UnknownStation(id.to_owned()));
    Ok((lookup(start)?, lookup(end)?))
}

/// Rejects arena indices that don't belong to the network.
pub(crate) fn check_endpoints(network: &Network, start: StationIndex, end: StationIndex) -> Result<(), RouteError> {
    for station in [start, end] {
        if station as usize >= network.num_stations() {
            return Err(RouteError::UnknownStation(format!("#{station}")));
        }
    }
    Ok(())
}

impl<'a> Route<'a> {
    pub(crate) fn from(stations: Vec<StationIndex>, network: &'a Network) -> Self {
        debug_assert!(!stations.is_empty(), "A route always contains its start station.");
        Self { stations, network }
    }

    /// Arena indices of the stations, start first.
    pub fn station_indices(&self) -> &[StationIndex] { &self.stations }

    pub fn network(&self) -> &'a Network { self.network }

    /// Number of stations on the route, start and destination included.
    pub fn len(&self) -> usize { self.stations.len() }

    /// Number of connections crossed.
    pub fn num_stops(&self) -> usize { self.stations.len().saturating_sub(1) }

    pub fn stations(&self) -> impl Iterator<Item = &'a Station> + '_ {
        self.stations.iter().map(|&station| self.network.get_station(station))
    }

    pub fn first(&self) -> &'a Station { self.network.get_station(self.stations[0]) }

    pub fn last(&self) -> &'a Station { self.network.get_station(self.stations[self.stations.len() - 1]) }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.stations.windows(2).map(|pair| Segment {
            from: pair[0],
            to: pair[1],
            // Consecutive stations on a route are always adjacent.
            travel_time: self.network.travel_time_between(pair[0], pair[1]).unwrap_or(0),
        })
    }

    /// Total travel time using the quickest connection between each pair of consecutive stations.
    pub fn travel_time(&self) -> TravelTime {
        self.segments()
            .fold(0, |total: TravelTime, segment| total.saturating_add(segment.travel_time))
    }

    fn write_stations(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, station) in self.stations().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{}", station.name)?;
        }
        writeln!(f)
    }
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-----------------------------------------------")?;
        self.write_stations(f)?;
        writeln!(f)?;
        writeln!(f, "Stops: {}.", self.num_stops())?;
        writeln!(f, "-----------------------------------------------")?;
        Ok(())
    }
}

impl Display for FastestRoute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-----------------------------------------------")?;
        self.route.write_stations(f)?;
        writeln!(f)?;
        writeln!(f, "Stops: {}.", self.route.num_stops())?;
        writeln!(f, "Total travel time: {}.", utils::get_minutes_str(self.travel_time))?;
        writeln!(f, "-----------------------------------------------")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Network {
        Network::from_records(
            &[("A", "Alpha", "X"), ("B", "Beta", "X"), ("C", "Gamma", "Y")],
            &[("A", "B", 5), ("B", "C", 10), ("B", "C", 7)],
        )
        .unwrap()
    }

    #[test]
    fn segments_use_quickest_parallel_connection() {
        let network = network();
        let route = Route::from(vec![0, 1, 2], &network);

        let segments: Vec<_> = route.segments().collect();
        assert_eq!(
            segments,
            vec![
                Segment { from: 0, to: 1, travel_time: 5 },
                Segment { from: 1, to: 2, travel_time: 7 },
            ]
        );
        assert_eq!(route.travel_time(), 12);
        assert_eq!(route.len(), 3);
        assert_eq!(route.num_stops(), 2);
        assert_eq!(&*route.first().id, "A");
        assert_eq!(&*route.last().id, "C");
        assert_eq!(route.station_indices(), [0, 1, 2]);
    }

    #[test]
    fn single_station_route() {
        let network = network();
        let route = Route::from(vec![1], &network);

        assert_eq!(route.num_stops(), 0);
        assert_eq!(route.travel_time(), 0);
        assert_eq!(route.segments().count(), 0);
        assert_eq!(route.first().id, route.last().id);
    }

    #[test]
    fn display() {
        let network = network();
        let route = FastestRoute { route: Route::from(vec![0, 1, 2], &network), travel_time: 12 };
        let printed = route.to_string();

        assert!(printed.contains("Alpha → Beta → Gamma\n"));
        assert!(printed.contains("Stops: 2."));
        assert!(printed.contains("Total travel time: 12 minutes."));
        assert!(!route.route.to_string().contains("Total travel time"));
    }
}
