//! # Principle Catalog
//!
//! The five SOLID principles as a closed enum, in the order the acronym spells
//! them. Each variant knows its acronym, its title and its one-paragraph
//! statement, and can run its own lesson.
//!
//! ```rust
//! use solid_recipe::principles::Principle;
//!
//! let principle: Principle = "ocp".parse().unwrap();
//! assert_eq!(principle, Principle::OpenClosed);
//! assert_eq!(principle.title(), "Open-Closed Principle");
//! ```

use crate::error::RecipeError;
use crate::{
    dependency_inversion, interface_segregation, liskov_substitution, open_closed,
    single_responsibility,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// All principles, in S-O-L-I-D order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn acronym(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "SRP",
            Principle::OpenClosed => "OCP",
            Principle::LiskovSubstitution => "LSP",
            Principle::InterfaceSegregation => "ISP",
            Principle::DependencyInversion => "DIP",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility Principle",
            Principle::OpenClosed => "Open-Closed Principle",
            Principle::LiskovSubstitution => "Liskov Substitution Principle",
            Principle::InterfaceSegregation => "Interface Segregation Principle",
            Principle::DependencyInversion => "Dependency Inversion Principle",
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => {
                "A type should have one, and only one, reason to change. \
                 Everything it does should serve that single responsibility."
            }
            Principle::OpenClosed => {
                "A type should be open for extension but closed for modification. \
                 New behavior is added with new code, not by editing existing code."
            }
            Principle::LiskovSubstitution => {
                "Values of a subtype must be usable wherever the base type is expected \
                 without affecting the correctness of the program."
            }
            Principle::InterfaceSegregation => {
                "No type should be forced to implement operations it does not use. \
                 It should only be required to provide what it needs."
            }
            Principle::DependencyInversion => {
                "High-level modules should not depend on low-level modules; both should \
                 depend on abstractions rather than on concrete implementations."
            }
        }
    }

    /// Runs this principle's lesson and returns its one-line outcome.
    pub fn demonstrate(self) -> String {
        match self {
            Principle::SingleResponsibility => single_responsibility::demonstrate(),
            Principle::OpenClosed => open_closed::demonstrate(),
            Principle::LiskovSubstitution => liskov_substitution::demonstrate(),
            Principle::InterfaceSegregation => interface_segregation::demonstrate(),
            Principle::DependencyInversion => dependency_inversion::demonstrate(),
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.acronym())
    }
}

impl FromStr for Principle {
    type Err = RecipeError;

    /// Accepts the acronym or the name, in any case, with `-`, `_` or spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let principle = match key.as_str() {
            "srp" | "singleresponsibility" => Principle::SingleResponsibility,
            "ocp" | "openclosed" => Principle::OpenClosed,
            "lsp" | "liskovsubstitution" => Principle::LiskovSubstitution,
            "isp" | "interfacesegregation" => Principle::InterfaceSegregation,
            "dip" | "dependencyinversion" => Principle::DependencyInversion,
            _ => return Err(RecipeError::UnknownPrinciple(s.to_string())),
        };
        Ok(principle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_spells_solid() {
        let initials: String = Principle::ALL
            .iter()
            .map(|p| &p.acronym()[..1])
            .collect();
        assert_eq!(initials, "SOLID");
    }

    #[test]
    fn test_parse_acronyms_and_names() {
        assert_eq!("SRP".parse(), Ok(Principle::SingleResponsibility));
        assert_eq!("open-closed".parse(), Ok(Principle::OpenClosed));
        assert_eq!("Liskov Substitution".parse(), Ok(Principle::LiskovSubstitution));
        assert_eq!("interface_segregation".parse(), Ok(Principle::InterfaceSegregation));
        assert_eq!(" dip ".parse(), Ok(Principle::DependencyInversion));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "yagni".parse::<Principle>(),
            Err(RecipeError::UnknownPrinciple("yagni".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Principle::DependencyInversion.to_string(),
            "Dependency Inversion Principle (DIP)"
        );
    }
}
