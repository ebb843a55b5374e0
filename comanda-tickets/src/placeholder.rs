//! Placeholder product names
//!
//! Catalog entries like "Escolha até 2 Sabores" are generic; the kitchen
//! needs the flavors the customer actually picked. The flavor complements
//! replace the name and only the other complements (crust upgrades,
//! extras) stay in the complement list.

use std::sync::LazyLock;

use comanda_printer::to_ascii;
use regex::Regex;

use crate::types::Complement;

static PLACEHOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(escolha|escolher|selecione|choose)\b.*\b(sabor|sabores|flavor|flavors|flavour|flavours)\b",
    )
    .expect("valid placeholder pattern")
});

/// Complement names that never count as a flavor
const NON_FLAVOR_KEYWORDS: &[&str] = &["borda", "massa", "adicional", "extra", "crust"];

/// Separator between substituted flavor names
const FLAVOR_SEPARATOR: &str = " / ";

pub fn is_placeholder_name(name: &str) -> bool {
    PLACEHOLDER_NAME.is_match(&to_ascii(name))
}

fn is_flavor(complement: &Complement) -> bool {
    let folded = to_ascii(&complement.name).to_lowercase();
    !NON_FLAVOR_KEYWORDS.iter().any(|k| folded.contains(k))
}

/// Replace a placeholder name with the chosen flavors
///
/// Returns the name to print and the complements still to list. Names that
/// are not placeholders, or placeholders with no flavor complement, come
/// back unchanged.
pub fn substitute_placeholder(name: &str, complements: &[Complement]) -> (String, Vec<Complement>) {
    if complements.is_empty() || !is_placeholder_name(name) {
        return (name.to_string(), complements.to_vec());
    }

    let (flavors, others): (Vec<&Complement>, Vec<&Complement>) =
        complements.iter().partition(|c| is_flavor(c));
    if flavors.is_empty() {
        return (name.to_string(), complements.to_vec());
    }

    let joined = flavors
        .iter()
        .map(|c| c.name.trim())
        .collect::<Vec<_>>()
        .join(FLAVOR_SEPARATOR);
    (joined, others.into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder_name("Escolha até 2 Sabores"));
        assert!(is_placeholder_name("ESCOLHA SEU SABOR"));
        assert!(is_placeholder_name("Choose your flavors"));
        assert!(!is_placeholder_name("Pizza de Calabresa"));
        assert!(!is_placeholder_name("Sabor da Casa"));
    }

    #[test]
    fn test_substitution_keeps_crust() {
        let complements = vec![Complement::named("Calabresa"), Complement::named("Borda Catupiry")];
        let (name, rest) = substitute_placeholder("Escolha até 2 Sabores", &complements);
        assert_eq!(name, "Calabresa");
        assert_eq!(rest, vec![Complement::named("Borda Catupiry")]);
    }

    #[test]
    fn test_two_flavors_joined() {
        let complements = vec![
            Complement::named("Mussarela"),
            Complement::named("Portuguesa"),
            Complement::named("Massa Fina"),
        ];
        let (name, rest) = substitute_placeholder("Escolha 2 sabores", &complements);
        assert_eq!(name, "Mussarela / Portuguesa");
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_no_flavor_keeps_name() {
        let complements = vec![Complement::named("Borda Cheddar")];
        let (name, rest) = substitute_placeholder("Escolha o sabor", &complements);
        assert_eq!(name, "Escolha o sabor");
        assert_eq!(rest, complements);
    }

    #[test]
    fn test_regular_product_untouched() {
        let complements = vec![Complement::named("Bacon")];
        let (name, rest) = substitute_placeholder("X-Burger", &complements);
        assert_eq!(name, "X-Burger");
        assert_eq!(rest, complements);
    }
}
