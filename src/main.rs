use std::env;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use coffee_vending_machine::config_reader::read_machine_config;
use coffee_vending_machine::constants::DEFAULT_CONFIG_PATH;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .expect("Error al inicializar el logger");

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    match read_machine_config(config_path) {
        Ok(mut machine) => {
            if let Err(err) = machine.make_beverages() {
                error!("[MACHINE] Batch run stopped, {:?}", err);
                return;
            }
            for outcome in machine.beverage_log() {
                println!("{}", outcome);
            }
        }
        Err(err) => {
            error!("[READER] Could not load the machine configuration, {:?}", err);
        }
    }
}
