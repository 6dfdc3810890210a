//! Account holder identities.
//!
//! Both identity types are plain values: two holders are the same holder
//! exactly when every field, including the identifying number, is equal.

use std::fmt;

/// Common view over anything that can own an account.
pub trait AccountHolder {
    /// Identifying number (national id for people, tax id for companies).
    fn id_number(&self) -> i32;
}

/// A natural person. Owns consumer accounts and can be authorized on
/// commercial ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    first_name: String,
    last_name: String,
    id_number: i32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, id_number: i32) -> Self {
        Person {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id_number,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl AccountHolder for Person {
    fn id_number(&self) -> i32 {
        self.id_number
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A company. Owns commercial accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Company {
    company_name: String,
    tax_id: i32,
}

impl Company {
    pub fn new(company_name: impl Into<String>, tax_id: i32) -> Self {
        Company {
            company_name: company_name.into(),
            tax_id,
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }
}

impl AccountHolder for Company {
    fn id_number(&self) -> i32 {
        self.tax_id
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.company_name)
    }
}

/// Borrowed view of whoever owns an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder<'a> {
    Person(&'a Person),
    Company(&'a Company),
}

impl AccountHolder for Holder<'_> {
    fn id_number(&self) -> i32 {
        match self {
            Holder::Person(p) => p.id_number(),
            Holder::Company(c) => c.id_number(),
        }
    }
}

impl fmt::Display for Holder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Holder::Person(p) => p.fmt(f),
            Holder::Company(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_equality_is_structural() {
        let a = Person::new("Alice", "Smith", 1);
        assert_eq!(a, Person::new("Alice", "Smith", 1));
        assert_ne!(a, Person::new("Alice", "Smith", 2));
        assert_ne!(a, Person::new("Alice", "Jones", 1));
    }

    #[test]
    fn test_company_equality_includes_tax_id() {
        let acme = Company::new("Acme", 10);
        assert_eq!(acme, Company::new("Acme", 10));
        assert_ne!(acme, Company::new("Acme", 11));
    }

    #[test]
    fn test_holder_view_forwards_identity() {
        let person = Person::new("Bob", "Stone", 42);
        let company = Company::new("Globex", 77);

        assert_eq!(Holder::Person(&person).id_number(), 42);
        assert_eq!(Holder::Company(&company).id_number(), 77);
        assert_eq!(Holder::Person(&person).to_string(), "Bob Stone");
        assert_eq!(Holder::Company(&company).to_string(), "Globex");
    }
}
