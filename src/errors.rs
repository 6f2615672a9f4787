#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeMachineError {
    FileReaderError,
    ItemNotInInventory,
    NotEnoughOfItem,
    MissingFailureReason,
}
