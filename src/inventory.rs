//! Inventario de ingredientes de la maquina expendedora
use std::collections::HashMap;

use crate::errors::CoffeeMachineError;

/// Stock de ingredientes junto con sus alertas de bajo stock.
/// Las cantidades bajan al consumir y suben al recargar, la alerta de un
/// ingrediente se apaga unicamente con una recarga de ese ingrediente.
pub struct Inventory {
    items: HashMap<String, u64>,
    running_low: HashMap<String, bool>,
}

impl Inventory {
    pub fn new(items: HashMap<String, u64>) -> Inventory {
        Inventory {
            items,
            running_low: HashMap::new(),
        }
    }

    /// Cantidad disponible del ingrediente, `None` si la maquina no lo tiene
    pub fn quantity_of(&self, item_name: &str) -> Option<u64> {
        self.items.get(item_name).copied()
    }

    /// Consume la cantidad pedida del ingrediente. Hay que chequear la
    /// disponibilidad antes de llamarlo, si el ingrediente no existe o no
    /// alcanza se devuelve un error sin tocar el stock.
    pub fn take(&mut self, item_name: &str, quantity: u64) -> Result<(), CoffeeMachineError> {
        let remaining = self
            .items
            .get_mut(item_name)
            .ok_or(CoffeeMachineError::ItemNotInInventory)?;
        if *remaining < quantity {
            return Err(CoffeeMachineError::NotEnoughOfItem);
        }
        *remaining -= quantity;
        Ok(())
    }

    /// Recarga el ingrediente y apaga su alerta de bajo stock, aunque la
    /// nueva cantidad siga sin alcanzar para alguna bebida del menu.
    pub fn refill(&mut self, item_name: &str, quantity: u64) {
        *self.items.entry(item_name.to_string()).or_insert(0) += quantity;
        self.running_low.insert(item_name.to_string(), false);
    }

    /// Marca el ingrediente como bajo de stock
    pub fn mark_running_low(&mut self, item_name: &str) {
        self.running_low.insert(item_name.to_string(), true);
    }

    pub fn is_running_low(&self, item_name: &str) -> bool {
        *self.running_low.get(item_name).unwrap_or(&false)
    }
}
