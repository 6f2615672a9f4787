//! Maquina expendedora de cafe. Prepara el menu completo de bebidas.
use std::collections::HashMap;

use log::{debug, info};

use crate::beverage::Beverage;
use crate::errors::CoffeeMachineError;
use crate::inventory::Inventory;

/// Representa a la maquina expendedora.
/// Tiene el inventario de ingredientes, el menu de bebidas, la razon de la
/// ultima falla de cada bebida y el registro de resultados de cada corrida.
/// La cantidad de salidas se guarda de la configuracion pero por ahora no
/// limita la preparacion, las bebidas se preparan de a una.
pub struct CoffeeMachine {
    outlets: u32,
    inventory: Inventory,
    beverages: Vec<Beverage>,
    failure_reasons: HashMap<String, String>,
    beverage_log: Vec<String>,
}

impl CoffeeMachine {
    pub fn new(
        outlets: u32,
        total_items_quantity: HashMap<String, u64>,
        beverages: Vec<Beverage>,
    ) -> CoffeeMachine {
        CoffeeMachine {
            outlets,
            inventory: Inventory::new(total_items_quantity),
            beverages,
            failure_reasons: HashMap::new(),
            beverage_log: Vec::new(),
        }
    }

    /// Chequea que todos los ingredientes de la bebida esten en el
    /// inventario con la cantidad necesaria. No consume nada. Si falla mas
    /// de un ingrediente queda guardada la razon del ultimo que fallo.
    pub fn check_all_items_availability(&mut self, beverage: &Beverage) -> bool {
        let mut all_items_available = true;
        for (item_name, quantity_needed) in &beverage.ingredients {
            match self.inventory.quantity_of(item_name) {
                None => {
                    all_items_available = false;
                    self.failure_reasons.insert(
                        beverage.name.clone(),
                        format!("{} is not available", item_name),
                    );
                }
                Some(remaining) if *quantity_needed > remaining => {
                    debug!(
                        "[MACHINE] Not enough {} for {}, needs {} and there is {}",
                        item_name, beverage.name, quantity_needed, remaining
                    );
                    all_items_available = false;
                    self.inventory.mark_running_low(item_name);
                    self.failure_reasons.insert(
                        beverage.name.clone(),
                        format!("{} is not sufficient", item_name),
                    );
                }
                Some(_) => {}
            }
        }
        all_items_available
    }

    /// Intenta preparar una vez cada bebida del menu, en el orden del menu.
    /// Los ingredientes se consumen unicamente si alcanzan para la bebida
    /// completa, y el resultado de cada intento queda en el log de bebidas.
    /// Que una bebida no se pueda preparar no corta la corrida.
    pub fn make_beverages(&mut self) -> Result<(), CoffeeMachineError> {
        let beverages = self.beverages.clone();
        for beverage in &beverages {
            if self.check_all_items_availability(beverage) {
                for (item_name, quantity_needed) in &beverage.ingredients {
                    self.inventory.take(item_name, *quantity_needed)?;
                }
                info!("[MACHINE] Prepared {}", beverage.name);
                self.log_beverage_success(&beverage.name);
            } else {
                info!("[MACHINE] Could not prepare {}", beverage.name);
                self.log_beverage_failure(&beverage.name)?;
            }
        }
        Ok(())
    }

    /// Recarga un ingrediente del inventario y apaga su alerta de bajo stock
    pub fn refill(&mut self, item_name: &str, quantity: u64) {
        info!("[MACHINE] Refilled {} with {}", item_name, quantity);
        self.inventory.refill(item_name, quantity);
    }

    fn log_beverage_success(&mut self, beverage_name: &str) {
        self.beverage_log
            .push(format!("{} is prepared", beverage_name));
    }

    fn log_beverage_failure(&mut self, beverage_name: &str) -> Result<(), CoffeeMachineError> {
        let reason = self
            .failure_reasons
            .get(beverage_name)
            .ok_or(CoffeeMachineError::MissingFailureReason)?;
        self.beverage_log.push(format!(
            "{} cannot be prepared because {}",
            beverage_name, reason
        ));
        Ok(())
    }

    pub fn beverage_log(&self) -> &[String] {
        &self.beverage_log
    }

    pub fn outlets(&self) -> u32 {
        self.outlets
    }
}
