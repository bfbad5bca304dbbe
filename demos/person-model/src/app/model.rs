//! Domain types and their generated companions

use extractfield::extract_field;

/// A person as stored by the application
#[extract_field]
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Display name
    pub name: String,
    pub age: i32,
}

/// Marker type without data
#[extract_field]
#[derive(Debug, Default)]
pub struct Empty;

extractfield::include_extracted!("app/model/ExtractFieldPerson.rs");
extractfield::include_extracted!("app/model/ExtractFieldEmpty.rs");

impl From<&Person> for ExtractFieldPerson {
    fn from(person: &Person) -> Self {
        let mut extracted = ExtractFieldPerson::default();
        extracted.setThename(Some(person.name.clone()));
        extracted.setTheage(Some(person.age));
        extracted
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn ExtractFieldPerson___from_person___copies_every_field() {
        let person = Person {
            name: "Ada".to_string(),
            age: 36,
        };

        let extracted = ExtractFieldPerson::from(&person);

        assert_eq!(extracted.getThename(), Some(&"Ada".to_string()));
        assert_eq!(extracted.getTheage(), Some(&36));
    }
}
