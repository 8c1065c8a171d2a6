use metro::fastest_query_by_idx;

use dev_utils::get_example_scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (network, start, end) = get_example_scenario();
    network.print_stats();

    match fastest_query_by_idx(&network, start, end) {
        Ok(fastest) => println!("{fastest}"),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
