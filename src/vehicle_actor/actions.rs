/// Custom actions for Vehicle entities.
#[derive(Debug, Clone)]
pub enum VehicleAction {
    /// Vehicles whose `client` equals the given name exactly (case-sensitive).
    ///
    /// This is the only place the name-based ownership link is resolved, so
    /// swapping it for a foreign key later touches this action alone.
    OwnedBy(String),
}
