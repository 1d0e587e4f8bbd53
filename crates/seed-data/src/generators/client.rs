//! Company contact generation.

use fake::{
    Fake,
    faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode},
    faker::company::en::CompanyName,
    faker::phone_number::en::PhoneNumber,
};
use rand::Rng;

/// Storage width of the phone column.
const PHONE_MAX_LEN: usize = 20;

/// Whether a contact buys from the business or supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactType {
    Client,
    Supplier,
}

impl ContactType {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Client => "client",
            ContactType::Supplier => "supplier",
        }
    }
}

/// Generated contact data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_type: ContactType,
}

/// Configuration for contact generation.
#[derive(Debug, Clone)]
pub struct ClientGenConfig {
    /// Probability that a generated contact is a supplier rather than a client.
    pub supplier_probability: f64,
}

impl Default for ClientGenConfig {
    fn default() -> Self {
        Self {
            supplier_probability: 0.5,
        }
    }
}

/// Generates realistic company contacts for seeding.
pub struct ClientGenerator {
    config: ClientGenConfig,
}

impl ClientGenerator {
    /// Creates a new contact generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ClientGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ClientGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single contact.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedClient {
        let name: String = CompanyName().fake_with_rng(rng);
        let email = self.generate_email(&name, rng);
        let phone = self.generate_phone(rng);
        let address = self.generate_address(rng);

        let contact_type = if rng.gen_bool(self.config.supplier_probability) {
            ContactType::Supplier
        } else {
            ContactType::Client
        };

        GeneratedClient {
            name,
            email,
            phone,
            address,
            contact_type,
        }
    }

    /// Generates multiple contacts.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedClient> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generates a contact email from a company name.
    fn generate_email(&self, name: &str, rng: &mut impl Rng) -> String {
        let normalized: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..9999);
        let domains = ["example.com", "mail.com", "biz-post.com", "corp-mail.net"];
        let domain = domains[rng.gen_range(0..domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }

    /// Generates a phone number, truncated to the column width.
    fn generate_phone(&self, rng: &mut impl Rng) -> String {
        // Extension formats can exceed the column width
        let phone: String = PhoneNumber().fake_with_rng(rng);
        truncate_to_width(&phone, PHONE_MAX_LEN)
    }

    /// Generates a street address flattened to a single line.
    fn generate_address(&self, rng: &mut impl Rng) -> String {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);

        // Two-line postal block; the address column is single-line
        let postal = format!("{number} {street}\n{city}, {state} {zip}");
        postal.replace('\n', ", ")
    }
}

impl Default for ClientGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the first `width` characters of `value`.
fn truncate_to_width(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_client() {
        let client_gen = ClientGenerator::new();
        let mut rng = rand::thread_rng();
        let client = client_gen.generate(&mut rng);

        assert!(!client.name.is_empty());
        assert!(client.email.contains('@'));
        assert!(client.phone.chars().count() <= PHONE_MAX_LEN);
        assert!(!client.address.contains('\n'));
        assert!(client.address.contains(", "));
    }

    #[test]
    fn test_generate_batch() {
        let client_gen = ClientGenerator::new();
        let mut rng = rand::thread_rng();
        let clients = client_gen.generate_batch(10, &mut rng);

        assert_eq!(clients.len(), 10);
    }

    #[test]
    fn test_generate_batch_empty() {
        let client_gen = ClientGenerator::new();
        let mut rng = rand::thread_rng();

        assert!(client_gen.generate_batch(0, &mut rng).is_empty());
    }

    #[test]
    fn test_all_fields_populated() {
        let client_gen = ClientGenerator::new();
        let mut rng = rand::thread_rng();

        for client in client_gen.generate_batch(100, &mut rng) {
            assert!(!client.name.is_empty());
            assert!(!client.email.is_empty());
            assert!(!client.phone.is_empty());
            assert!(!client.address.is_empty());
        }
    }

    #[test]
    fn test_contact_type_uniform() {
        let client_gen = ClientGenerator::new();
        let mut rng = rand::thread_rng();
        let clients = client_gen.generate_batch(200, &mut rng);

        let suppliers = clients
            .iter()
            .filter(|c| c.contact_type == ContactType::Supplier)
            .count();

        // With p = 0.5 over 200 draws, both variants show up
        assert!(suppliers > 0);
        assert!(suppliers < clients.len());
    }

    #[test]
    fn test_supplier_probability_extremes() {
        let mut rng = rand::thread_rng();

        let all_suppliers = ClientGenerator::with_config(ClientGenConfig {
            supplier_probability: 1.0,
        });
        assert!(
            all_suppliers
                .generate_batch(20, &mut rng)
                .iter()
                .all(|c| c.contact_type == ContactType::Supplier)
        );

        let all_clients = ClientGenerator::with_config(ClientGenConfig {
            supplier_probability: 0.0,
        });
        assert!(
            all_clients
                .generate_batch(20, &mut rng)
                .iter()
                .all(|c| c.contact_type == ContactType::Client)
        );
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(
            truncate_to_width("+1-555-123-4567 x98765", PHONE_MAX_LEN),
            "+1-555-123-4567 x987"
        );
        assert_eq!(truncate_to_width("555-1234", PHONE_MAX_LEN), "555-1234");
    }

    #[test]
    fn test_contact_type_db_strings() {
        assert_eq!(ContactType::Client.as_str(), "client");
        assert_eq!(ContactType::Supplier.as_str(), "supplier");
    }
}
