use std::collections::HashMap;

use rgb::RGB8;

use crate::utils;

/// Travel time along a connection, in minutes.
pub type TravelTime = u32;
pub type StationIndex = u32;
pub type LineIndex = u32;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Station {0} must not be empty.")]
    EmptyField(&'static str),
    #[error("Station {0} already exists.")]
    DuplicateStation(String),
    #[error("Station {0} is not in the network.")]
    UnknownStation(String),
    #[error("Station {0} cannot be connected to itself.")]
    SelfLoop(String),
    #[error("Travel time must be a positive number of minutes (got {0}).")]
    NonPositiveTravelTime(i64),
    #[error("Travel time of {0} minutes is too large.")]
    TravelTimeTooLarge(i64),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adjacency {
    pub station: StationIndex,
    pub travel_time: TravelTime,
}

#[derive(Debug)]
pub struct Station {
    pub id: Box<str>,
    pub name: Box<str>,
    pub line: LineIndex,
    // Append-only, in insertion order.
    pub neighbours: Vec<Adjacency>,
}

impl Station {
    fn new(id: &str, name: &str, line: LineIndex) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line,
            neighbours: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct Line {
    pub name: Box<str>,
    pub colour: RGB8,
    pub stations: Vec<StationIndex>,
}

/// Station records `(id, name, line)` and connection records `(id_a, id_b, travel_time)`
/// as supplied when building a network in one go.
pub type StationRecord<'a> = (&'a str, &'a str, &'a str);
pub type ConnectionRecord<'a> = (&'a str, &'a str, i64);

/// An undirected, weighted transit graph. Stations live in an arena and refer to each other
/// by `StationIndex`.
#[derive(Debug, Default)]
pub struct Network {
    stations: Vec<Station>,
    station_index: HashMap<String, StationIndex>,
    lines: Vec<Line>,
    line_index: HashMap<String, LineIndex>,
    num_connections: usize,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from record lists, stopping at the first invalid record.
    pub fn from_records(
        stations: &[StationRecord],
        connections: &[ConnectionRecord],
    ) -> ValidationResult<Self> {
        let mut network = Self::new();
        for &(id, name, line) in stations {
            network.add_station(id, name, line)?;
        }
        for &(id_a, id_b, travel_time) in connections {
            network.add_connection(id_a, id_b, travel_time)?;
        }
        Ok(network)
    }

    pub fn add_station(&mut self, id: &str, name: &str, line: &str) -> ValidationResult<StationIndex> {
        if id.is_empty() {
            return Err(ValidationError::EmptyField("id"));
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if line.is_empty() {
            return Err(ValidationError::EmptyField("line"));
        }
        if self.station_index.contains_key(id) {
            return Err(ValidationError::DuplicateStation(id.to_owned()));
        }

        let station_idx = self.stations.len() as StationIndex;
        let line_idx = match self.line_index.get(line) {
            Some(&line_idx) => line_idx,
            None => {
                let line_idx = self.lines.len() as LineIndex;
                self.lines.push(Line {
                    name: line.into(),
                    colour: utils::line_colour(line),
                    stations: Vec::new(),
                });
                self.line_index.insert(line.to_owned(), line_idx);
                line_idx
            }
        };

        self.stations.push(Station::new(id, name, line_idx));
        self.station_index.insert(id.to_owned(), station_idx);
        self.lines[line_idx as usize].stations.push(station_idx);

        log::debug!("Added station {id} ({name}) on {line}.");
        Ok(station_idx)
    }

    /// Connects two stations in both directions. Adding the same pair twice creates a parallel edge.
    pub fn add_connection(&mut self, id_a: &str, id_b: &str, travel_time: i64) -> ValidationResult<()> {
        let station_a = self
            .get_station_idx(id_a)
            .ok_or_else(|| ValidationError::UnknownStation(id_a.to_owned()))?;
        let station_b = self
            .get_station_idx(id_b)
            .ok_or_else(|| ValidationError::UnknownStation(id_b.to_owned()))?;
        if station_a == station_b {
            return Err(ValidationError::SelfLoop(id_a.to_owned()));
        }
        if travel_time <= 0 {
            return Err(ValidationError::NonPositiveTravelTime(travel_time));
        }
        let travel_time = TravelTime::try_from(travel_time)
            .map_err(|_| ValidationError::TravelTimeTooLarge(travel_time))?;

        self.stations[station_a as usize].neighbours.push(Adjacency { station: station_b, travel_time });
        self.stations[station_b as usize].neighbours.push(Adjacency { station: station_a, travel_time });
        self.num_connections += 1;

        log::debug!("Connected {id_a} and {id_b} ({travel_time} minutes).");
        Ok(())
    }

    /// Case-insensitive lookup by display name. When several stations share a name, the one
    /// registered first is returned.
    pub fn find_station_by_name(&self, name: &str) -> Option<StationIndex> {
        let name = name.to_lowercase();
        self.stations
            .iter()
            .position(|station| station.name.to_lowercase() == name)
            .map(|idx| idx as StationIndex)
    }

    /// Resolves a menu selection: a 1-based station number in registration order, or a display name.
    pub fn resolve_station(&self, input: &str) -> Option<StationIndex> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input.bytes().all(|b| b.is_ascii_digit()) {
            return match input.parse::<usize>() {
                Ok(number) if number >= 1 && number <= self.stations.len() => {
                    Some((number - 1) as StationIndex)
                }
                _ => None,
            };
        }
        self.find_station_by_name(input)
    }

    /// Shortest of the (possibly parallel) connections between two adjacent stations.
    pub fn travel_time_between(&self, from: StationIndex, to: StationIndex) -> Option<TravelTime> {
        self.stations
            .get(from as usize)?
            .neighbours
            .iter()
            .filter(|adjacency| adjacency.station == to)
            .map(|adjacency| adjacency.travel_time)
            .min()
    }

    pub fn get_station(&self, station: StationIndex) -> &Station { &self.stations[station as usize] }

    pub fn get_station_idx(&self, station_id: &str) -> Option<StationIndex> { self.station_index.get(station_id).copied() }

    pub fn get_line(&self, line: LineIndex) -> &Line { &self.lines[line as usize] }

    pub fn get_line_idx(&self, line_name: &str) -> Option<LineIndex> { self.line_index.get(line_name).copied() }

    pub fn stations(&self) -> &[Station] { &self.stations }

    pub fn lines(&self) -> &[Line] { &self.lines }

    pub fn num_stations(&self) -> usize { self.stations.len() }

    pub fn num_lines(&self) -> usize { self.lines.len() }

    pub fn num_connections(&self) -> usize { self.num_connections }

    pub fn print_stats(&self) {
        println!(
            "Network with {} stations, {} lines, and {} connections.",
            self.num_stations(),
            self.num_lines(),
            self.num_connections()
        );
    }
}
