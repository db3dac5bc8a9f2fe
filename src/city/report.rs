use std::fmt;

use crate::text::{banner, ordinal};

use super::City;

const NPC_INDENT: &str = "    ";

impl City {
    /// General details, demographics and marketplace sections.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![banner(&self.name.to_uppercase())];
        lines.push(format!("Region {}", self.region));
        lines.push(format!(
            "{} {}",
            self.alignment,
            self.settlement_type.as_str().to_lowercase()
        ));
        lines.push(self.modifiers.to_string());
        lines.push(format!("Qualities {}", lowercase_list(&self.qualities)));
        if !self.disadvantages.is_empty() {
            lines.push(format!(
                "Disadvantages {}",
                lowercase_list(&self.disadvantages)
            ));
        }
        lines.push(String::new());

        lines.push(banner("DEMOGRAPHICS"));
        lines.push(format!("Government {}", self.government));
        lines.push(format!(
            "Population {} ({})",
            self.population,
            self.demographics.breakdown(
                self.population,
                self.settlement_type.ancestry_breakdown_len()
            )
        ));
        lines.push(String::new());

        lines.push(banner("MARKETPLACE"));
        lines.push(format!(
            "Base Value {} gp; Purchase Limit {} gp; Spellcasting {}",
            self.base_value,
            self.purchase_limit,
            ordinal(i64::from(self.spellcasting))
        ));
        lines
    }

    /// `NPCs` followed by one indented line per entry. Empty when there are
    /// no NPCs to list.
    pub fn npc_lines(&self) -> Vec<String> {
        if self.npcs.is_empty() {
            return Vec::new();
        }
        let mut lines = vec!["NPCs".to_string()];
        lines.extend(self.npcs.iter().map(|npc| format!("{NPC_INDENT}{npc}")));
        lines
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_lines().join("\n"))
    }
}

fn lowercase_list<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
