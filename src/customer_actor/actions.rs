/// Custom actions for Customer entities.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// The customer with this exact name plus their vehicles, or `None`
    /// when no customer has that name.
    WithVehicles(String),
}
