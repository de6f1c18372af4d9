//! Case-insensitive substring filtering used by the list views' search box.

use super::{Customer, Product, Quote, Service, Vehicle, WorkOrder};

/// A record that can be matched against a search term.
pub trait Searchable {
    /// Text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Extra match on non-text fields such as the numeric id.
    fn matches_token(&self, _term: &str) -> bool {
        false
    }
}

/// Returns the records whose fields contain `term`, ignoring case.
/// A blank term keeps everything.
pub fn filter<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record.matches_token(&needle)
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), opt(&self.phone)]
    }
}

impl Searchable for Vehicle {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.plate.as_str(), opt(&self.model), opt(&self.client)]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), opt(&self.code), opt(&self.brand)]
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), opt(&self.category)]
    }
}

impl Searchable for Quote {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client.as_str(), self.vehicle.as_str()]
    }

    fn matches_token(&self, term: &str) -> bool {
        self.id.to_string().contains(term.trim_start_matches('#'))
    }
}

impl Searchable for WorkOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client.as_str(), self.vehicle.as_str()]
    }

    fn matches_token(&self, term: &str) -> bool {
        self.id.to_string().contains(term.trim_start_matches('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_search_by_name_or_phone() {
        let mut roberto = Customer::new("Roberto Silva");
        roberto.phone = Some("(11) 99999-1234".into());
        let ana = Customer::new("Ana Júlia Costa");
        let customers = vec![roberto, ana];

        assert_eq!(filter(&customers, "rob").len(), 1);
        assert_eq!(filter(&customers, "9999").len(), 1);
        assert_eq!(filter(&customers, "JÚLIA")[0].name, "Ana Júlia Costa");
        assert_eq!(filter(&customers, "  ").len(), 2);
        assert!(filter(&customers, "zzz").is_empty());
    }

    #[test]
    fn test_work_orders_match_by_id() {
        let mut order = WorkOrder::new("Ana", "Renegade");
        order.id = 17;
        let orders = vec![order];

        assert_eq!(filter(&orders, "#17").len(), 1);
        assert_eq!(filter(&orders, "7").len(), 1);
        assert!(filter(&orders, "8").is_empty());
    }
}
