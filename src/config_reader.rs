use log::info;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::beverage::Beverage;
use crate::errors::CoffeeMachineError;
use crate::machine::CoffeeMachine;

// Los mapas del archivo se leen como IndexMap para respetar el orden del
// documento, el menu se recorre en ese orden al preparar las bebidas.
#[derive(Deserialize, Debug)]
struct JsonMachine {
    outlets: u32,
    total_items_quantity: IndexMap<String, u64>,
    beverages: IndexMap<String, IndexMap<String, u64>>,
}

#[derive(Deserialize)]
struct MachineConfiguration {
    machine: JsonMachine,
}

fn read_config_from_file<P: AsRef<Path>>(path: P) -> Result<JsonMachine, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let configuration: MachineConfiguration = serde_json::from_reader(reader)?;
    Ok(configuration.machine)
}

fn get_beverages_from_config(
    json_beverages: IndexMap<String, IndexMap<String, u64>>,
) -> Vec<Beverage> {
    json_beverages
        .into_iter()
        .map(|(name, items_needed)| Beverage::new(name, items_needed.into_iter().collect()))
        .collect()
}

fn get_machine_from_config(json_machine: JsonMachine) -> CoffeeMachine {
    info!(
        "[READER] Machine configuration loaded, {} outlets, {} items and {} beverages",
        json_machine.outlets,
        json_machine.total_items_quantity.len(),
        json_machine.beverages.len()
    );
    CoffeeMachine::new(
        json_machine.outlets,
        json_machine.total_items_quantity.into_iter().collect(),
        get_beverages_from_config(json_machine.beverages),
    )
}

/// Lee el archivo de configuracion y arma la maquina expendedora lista para usar
pub fn read_machine_config<P: AsRef<Path>>(path: P) -> Result<CoffeeMachine, CoffeeMachineError> {
    let result = read_config_from_file(path);
    match result {
        Ok(json_machine) => Ok(get_machine_from_config(json_machine)),
        Err(_) => Err(CoffeeMachineError::FileReaderError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGURATION: &str = r#"{
        "machine": {
            "outlets": 3,
            "total_items_quantity": { "hot_water": 500, "hot_milk": 500 },
            "beverages": {
                "hot_tea": { "hot_water": 200, "hot_milk": 100 },
                "black_tea": { "hot_water": 300, "sugar_syrup": 50 }
            }
        }
    }"#;

    #[test]
    fn should_keep_the_beverages_in_configuration_order() {
        let configuration: MachineConfiguration = serde_json::from_str(CONFIGURATION).unwrap();
        let beverages = get_beverages_from_config(configuration.machine.beverages);
        assert_eq!(2, beverages.len());
        assert_eq!("hot_tea", beverages[0].name);
        assert_eq!("black_tea", beverages[1].name);
    }

    #[test]
    fn should_keep_the_ingredients_of_a_beverage_in_configuration_order() {
        let configuration: MachineConfiguration = serde_json::from_str(CONFIGURATION).unwrap();
        let beverages = get_beverages_from_config(configuration.machine.beverages);
        assert_eq!(
            vec![
                ("hot_water".to_string(), 200),
                ("hot_milk".to_string(), 100),
            ],
            beverages[0].ingredients
        );
    }

    #[test]
    fn should_build_a_machine_that_prepares_the_configured_beverages() {
        let configuration: MachineConfiguration = serde_json::from_str(CONFIGURATION).unwrap();
        let mut machine = get_machine_from_config(configuration.machine);
        assert_eq!(3, machine.outlets());
        machine.make_beverages().unwrap();
        assert_eq!(
            vec![
                "hot_tea is prepared",
                "black_tea cannot be prepared because sugar_syrup is not available",
            ],
            machine.beverage_log()
        );
    }

    #[test]
    fn should_fail_when_the_configuration_file_does_not_exist() {
        let result = read_machine_config("no-such-machine.json");
        assert_eq!(true, result.is_err());
    }
}
