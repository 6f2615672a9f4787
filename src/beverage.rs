//! Representacion de una bebida del menu

/// Una bebida del menu de la maquina. Los ingredientes mantienen el orden
/// en el que aparecen en la configuracion, ese orden define que razon de
/// falla queda registrada cuando falla mas de un ingrediente.
#[derive(Debug, Clone)]
pub struct Beverage {
    pub name: String,
    pub ingredients: Vec<(String, u64)>,
}

impl Beverage {
    pub fn new(name: String, ingredients: Vec<(String, u64)>) -> Beverage {
        Beverage { name, ingredients }
    }
}
