//! Normalization of raw definitions into render-ready enums.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use enumsmith_core::{capitalize_first, decapitalize_first, pluralize};
use enumsmith_manifest::EnumDefinition;

use crate::{Error, naming::NamingConvention};

/// A validated, casing-resolved enum ready for rendering.
///
/// Construction through [`NormalizedEnum::from_definition`] is the only
/// way to obtain one, so a value of this type always satisfies the
/// identifier and uniqueness rules.
#[derive(Debug, Clone)]
pub struct NormalizedEnum {
    /// Singular type name (e.g., "Role").
    pub name: String,
    /// Plural form the collection names derive from (e.g., "Roles").
    pub plural: String,
    /// Unexported lookup-set type name (e.g., "roles").
    pub collection_type: String,
    /// Exported collection variable name (e.g., "Roles").
    pub collection_var: String,
    /// Constants in input order.
    pub values: Vec<NormalizedValue>,
    /// Timestamp rendered into the generation header.
    pub generated_at: NaiveDateTime,
}

/// A single validated constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedValue {
    /// Exported constant name (e.g., "Admin").
    pub key: String,
    /// String value of the constant (e.g., "ADMIN").
    pub value: String,
}

impl NormalizedEnum {
    /// Validate a definition and derive all secondary names.
    ///
    /// The timestamp is injected by the caller so that one run stamps
    /// every file identically and rendering stays deterministic.
    ///
    /// Fails on the first violated rule; the caller decides whether to
    /// continue with the remaining definitions.
    pub fn from_definition(
        definition: &EnumDefinition,
        naming: &NamingConvention,
        generated_at: NaiveDateTime,
    ) -> Result<Self, Error> {
        let name = capitalize_first(naming.check_identifier(&definition.name, "name")?);

        let plural = match definition.plural.as_deref().map(str::trim) {
            Some(plural) if !plural.is_empty() => plural.to_string(),
            _ => pluralize(&name),
        };
        let plural = naming.check_identifier(&plural, "plural")?.to_string();
        if plural == name {
            return Err(Error::DuplicateName {
                first: "name",
                second: "plural",
                name: plural,
            });
        }

        let collection_type = decapitalize_first(&plural);
        naming.check_identifier(&collection_type, "collection type")?;
        let collection_var = capitalize_first(&plural);
        naming.check_identifier(&collection_var, "collection variable")?;
        if collection_type == collection_var {
            return Err(Error::DuplicateName {
                first: "collection type",
                second: "collection variable",
                name: collection_var,
            });
        }

        let mut values = Vec::with_capacity(definition.values.len());
        for entry in &definition.values {
            let key = capitalize_first(naming.check_identifier(&entry.key, "key")?);
            let value = entry.value.as_deref().unwrap_or_default().trim();
            let value = if value.is_empty() {
                key.to_uppercase()
            } else {
                value.to_string()
            };
            values.push(NormalizedValue { key, value });
        }

        // Keys first, then values: a definition with both collisions
        // always reports the key.
        let mut seen_keys = HashSet::new();
        for value in &values {
            if !seen_keys.insert(value.key.as_str()) {
                return Err(Error::DuplicateKey {
                    key: value.key.clone(),
                });
            }
        }
        let mut seen_values = HashSet::new();
        for value in &values {
            if !seen_values.insert(value.value.as_str()) {
                return Err(Error::DuplicateValue {
                    value: value.value.clone(),
                });
            }
        }

        Ok(Self {
            name,
            plural,
            collection_type,
            collection_var,
            values,
            generated_at,
        })
    }
}
