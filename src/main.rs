use carbon_choropleth::{load_and_render, AliasTable, DataSource, DEFAULT_CHOROPLETH_CONFIG};
use log::{error, info};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Optional alias CSV as the only argument
    let alias_table = match std::env::args().nth(1) {
        Some(path) => match AliasTable::from_csv_path(&path) {
            Ok(alias_table) => {
                info!("Loaded {} aliases from {}", alias_table.len(), path);
                alias_table
            }
            Err(e) => {
                error!("Failed to load aliases from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AliasTable::default(),
    };

    match load_and_render(
        &DataSource::default_geometry(),
        &DataSource::default_emissions(),
        &DEFAULT_CHOROPLETH_CONFIG,
        &alias_table,
    ) {
        Ok(svg) => println!("{}", svg),
        Err(e) => {
            error!("Error rendering choropleth: {}", e);
            std::process::exit(1);
        }
    }
}
