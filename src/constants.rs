//! Parametros de configuracion de la maquina expendedora

/// Ruta por defecto del archivo de configuracion de la maquina
pub const DEFAULT_CONFIG_PATH: &str = "machine.json";
