use metro::fewest_stops_query;

use dev_utils::{build_example_network, get_example_end_id, get_example_start_id};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let network = build_example_network();
    network.print_stats();

    let route = fewest_stops_query(&network, get_example_start_id(), get_example_end_id())?;
    println!("{route}");
    for segment in route.segments() {
        log::info!(
            "{} → {}: {} minutes",
            network.get_station(segment.from).name,
            network.get_station(segment.to).name,
            segment.travel_time
        );
    }

    Ok(())
}
