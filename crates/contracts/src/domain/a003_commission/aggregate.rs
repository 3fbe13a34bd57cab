use serde::{Deserialize, Serialize};

/// Deal type derived from the product class string.
///
/// `Bnt` is new business, `Vvl` covers every retention-shaped deal
/// (extension, takeover, upsell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealType {
    Bnt,
    Vvl,
}

impl DealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::Bnt => "BNT",
            DealType::Vvl => "VVL",
        }
    }
}

impl std::fmt::Display for DealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the static commission rate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEntry {
    pub code: String,
    pub class: String,
    pub prod: String,
    pub value: f64,
}

/// Shape of a manual commission override key.
///
/// Overrides are persisted as a flat string-keyed map; this type is
/// the single place where those strings are built, so a correction
/// can be as narrow (code + deal type) or as broad (name alone) as
/// intended without ad hoc concatenation elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideKey {
    CodeAndType { code: String, deal_type: DealType },
    CodeOnly { code: String },
    NameAndType { name: String, deal_type: DealType },
    NameOnly { name: String },
}

impl OverrideKey {
    /// Flat map key. Keys are stored uppercase.
    pub fn render(&self) -> String {
        match self {
            OverrideKey::CodeAndType { code, deal_type } => {
                format!("{}#{}", code.to_uppercase(), deal_type)
            }
            OverrideKey::CodeOnly { code } => code.to_uppercase(),
            OverrideKey::NameAndType { name, deal_type } => {
                format!("{}#{}", name.to_uppercase(), deal_type)
            }
            OverrideKey::NameOnly { name } => name.to_uppercase(),
        }
    }

    /// Priority-ordered keys to probe for a (code, name, type) triple.
    ///
    /// Code-specific beats code-global beats name-specific beats
    /// name-global; empty identifiers contribute no keys.
    pub fn lookup_chain(code: &str, name: &str, deal_type: DealType) -> Vec<OverrideKey> {
        let mut chain = Vec::with_capacity(4);
        if !code.is_empty() {
            chain.push(OverrideKey::CodeAndType {
                code: code.to_string(),
                deal_type,
            });
            chain.push(OverrideKey::CodeOnly {
                code: code.to_string(),
            });
        }
        if !name.is_empty() {
            chain.push(OverrideKey::NameAndType {
                name: name.to_string(),
                deal_type,
            });
            chain.push(OverrideKey::NameOnly {
                name: name.to_string(),
            });
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_shapes() {
        let k = OverrideKey::CodeAndType {
            code: "x1".into(),
            deal_type: DealType::Bnt,
        };
        assert_eq!(k.render(), "X1#BNT");
        let k = OverrideKey::NameOnly {
            name: "GigaZuhause 50".into(),
        };
        assert_eq!(k.render(), "GIGAZUHAUSE 50");
    }

    #[test]
    fn lookup_chain_priority_order() {
        let chain: Vec<String> = OverrideKey::lookup_chain("X1", "PROD", DealType::Vvl)
            .iter()
            .map(OverrideKey::render)
            .collect();
        assert_eq!(chain, vec!["X1#VVL", "X1", "PROD#VVL", "PROD"]);
    }

    #[test]
    fn lookup_chain_skips_empty_identifiers() {
        let chain: Vec<String> = OverrideKey::lookup_chain("", "PROD", DealType::Bnt)
            .iter()
            .map(OverrideKey::render)
            .collect();
        assert_eq!(chain, vec!["PROD#BNT", "PROD"]);
        assert!(OverrideKey::lookup_chain("", "", DealType::Bnt).is_empty());
    }
}
