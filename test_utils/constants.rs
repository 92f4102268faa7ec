pub const TEST_TOPOLOGY_JSON_PATH: &str = "tests/test_data_files/test_topology.json";

pub const TEST_EMISSIONS_JSON_PATH: &str = "tests/test_data_files/test_emissions.json";

pub const TEST_ALIASES_CSV_PATH: &str = "tests/test_data_files/test_aliases.csv";

pub const TOTAL_FOOTPRINT_FIELD: &str = "Total County Carbon Footprint (tCO2e/yr)";
