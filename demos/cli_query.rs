use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;

use metro::network::StationIndex;
use metro::{fastest_query_by_idx, fewest_stops_query_by_idx, utils, Network, Route};

use dev_utils::build_example_network;

const STATIONS_PER_ROW: usize = 3;

/// Announces each station of a route in turn. Stands in for an animated map or spoken announcements.
struct ConsoleNarrator {
    pause: Duration,
}

impl ConsoleNarrator {
    fn narrate(&self, route: &Route) {
        let total = route.len();
        for (i, station) in route.stations().enumerate() {
            println!("{}/{total}. station: {}", i + 1, station.name);
            thread::sleep(self.pause);
        }
        println!("Route complete. {total} stations in total.");
    }
}

fn read_line(prompt: &str) -> Result<String, std::io::Error> {
    print!("{prompt}");
    stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn print_stations(network: &Network) {
    println!("Stations:");
    for (row, stations) in network.stations().chunks(STATIONS_PER_ROW).enumerate() {
        let cells: Vec<String> = stations
            .iter()
            .enumerate()
            .map(|(i, station)| {
                let number = row * STATIONS_PER_ROW + i + 1;
                let line = &network.get_line(station.line).name;
                format!("{number:2}. {:<15} ({line})", station.name)
            })
            .collect();
        println!("{}", cells.join("   "));
    }
}

fn print_network(network: &Network) {
    for line in network.lines() {
        let colour = line.colour;
        println!("{} (#{:02x}{:02x}{:02x}):", line.name, colour.r, colour.g, colour.b);
        for &station_idx in &line.stations {
            let station = network.get_station(station_idx);
            let neighbours: Vec<String> = station
                .neighbours
                .iter()
                .map(|adjacency| {
                    format!(
                        "{} ({})",
                        network.get_station(adjacency.station).name,
                        utils::get_minutes_str(adjacency.travel_time)
                    )
                })
                .collect();
            println!("  {} [{}] → {}", station.name, station.id, neighbours.join(", "));
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Station(StationIndex),
    NotFound,
    Quit,
}

fn parse_selection(network: &Network, input: &str) -> Selection {
    if input.trim().eq_ignore_ascii_case("q") {
        return Selection::Quit;
    }
    match network.resolve_station(input) {
        Some(station) => Selection::Station(station),
        None => Selection::NotFound,
    }
}

fn get_station_from_user(network: &Network, prompt: &str) -> Result<Selection, std::io::Error> {
    let selection = parse_selection(network, &read_line(prompt)?);
    if selection == Selection::NotFound {
        println!("Station not found. Enter a number from the list or a station name.");
    }
    Ok(selection)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let network = build_example_network();
    network.print_stats();
    let narrator = ConsoleNarrator { pause: Duration::from_millis(500) };

    loop {
        println!();
        print_stations(&network);
        println!();

        let start = match get_station_from_user(&network, "Start station number or name (q to quit): ")? {
            Selection::Station(station) => station,
            Selection::NotFound => continue,
            Selection::Quit => break,
        };
        let end = match get_station_from_user(&network, "Destination station number or name (q to quit): ")? {
            Selection::Station(station) => station,
            Selection::NotFound => continue,
            Selection::Quit => break,
        };

        println!();
        println!("1. Fastest route");
        println!("2. Fewest stops");
        println!("3. Show the network");
        match read_line("Choice (1-3): ")?.as_str() {
            "1" => match fastest_query_by_idx(&network, start, end) {
                Ok(fastest) => {
                    println!("Fastest route:");
                    println!("{fastest}");
                    narrator.narrate(&fastest.route);
                }
                Err(e) => println!("{e}"),
            },
            "2" => match fewest_stops_query_by_idx(&network, start, end) {
                Ok(route) => {
                    println!("Fewest stops:");
                    println!("{route}");
                    narrator.narrate(&route);
                }
                Err(e) => println!("{e}"),
            },
            "3" => print_network(&network),
            _ => println!("Invalid choice. Enter 1, 2 or 3."),
        }
    }

    Ok(())
}
