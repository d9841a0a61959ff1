//! Account display formatting
//!
//! Formats the server's view-model for one-shot terminal output: the
//! section tree, the bare section list, and a rank check result.

use crate::client::ViewModel;
use crate::models::PlayerRank;

/// Format the grouped accounts as a section tree
pub fn format_account_tree(view: &ViewModel) -> String {
    if view.accounts_by_section.is_empty() {
        return "No saved accounts.\n\nRun 'ranktrack account save' to add one.".to_string();
    }

    // Align rank summaries across the whole tree
    let label_width = view
        .accounts_by_section
        .values()
        .flatten()
        .map(|a| a.label().chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();

    for (i, (name, accounts)) in view.accounts_by_section.iter().enumerate() {
        // Section header
        output.push_str(&format!("{} ({})\n", name, accounts.len()));

        if accounts.is_empty() {
            output.push_str("  (no accounts)\n");
        } else {
            for (j, account) in accounts.iter().enumerate() {
                let is_last = j == accounts.len() - 1;
                let prefix = if is_last { "└── " } else { "├── " };

                output.push_str(&format!(
                    "  {}{:<label_width$}  {}\n",
                    prefix,
                    account.label(),
                    account.rank_summary(),
                ));
            }
        }

        // Blank line between sections (except after last)
        if i < view.accounts_by_section.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format the section list with account counts
pub fn format_section_list(view: &ViewModel) -> String {
    if view.sections.is_empty() {
        return "No sections found.".to_string();
    }

    let mut output = String::new();
    for section in &view.sections {
        let count = view
            .accounts_by_section
            .get(&section.name)
            .map_or(0, Vec::len);
        let noun = if count == 1 { "account" } else { "accounts" };
        output.push_str(&format!("  {} ({} {})\n", section.name, count, noun));
    }
    output
}

/// Format a rank check result
pub fn format_player_rank(rank: &PlayerRank) -> String {
    format!(
        "{}\nRank: {}\nRank Rating (RR): {}\n",
        rank.player_name,
        rank.rank_text(),
        rank.rr
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Section};
    use std::collections::BTreeMap;

    fn sample_view() -> ViewModel {
        let mut amy = Account::new("Amy", "111", "na");
        amy.rank = Some("Gold 2".to_string());
        amy.rr = 45;
        amy.section = "Alpha".to_string();

        let bob = Account::new("Bob", "222", "eu");

        let mut accounts_by_section = BTreeMap::new();
        accounts_by_section.insert("Alpha".to_string(), vec![amy, bob]);
        accounts_by_section.insert("Default".to_string(), Vec::new());

        ViewModel {
            sections: vec![Section::new("Alpha"), Section::new("Default")],
            accounts_by_section,
        }
    }

    #[test]
    fn test_format_account_tree() {
        let output = format_account_tree(&sample_view());

        assert!(output.contains("Alpha (2)"));
        assert!(output.contains("├── Amy#111 (NA)"));
        assert!(output.contains("└── Bob#222 (EU)"));
        assert!(output.contains("Gold 2 - 45 RR"));
        assert!(output.contains("No rank data"));
        assert!(output.contains("Default (0)"));
        assert!(output.contains("  (no accounts)"));
    }

    #[test]
    fn test_format_account_tree_empty() {
        let output = format_account_tree(&ViewModel::default());
        assert!(output.starts_with("No saved accounts."));
        assert!(output.contains("ranktrack account save"));
    }

    #[test]
    fn test_format_section_list_counts() {
        let output = format_section_list(&sample_view());
        assert!(output.contains("Alpha (2 accounts)"));
        assert!(output.contains("Default (0 accounts)"));
    }

    #[test]
    fn test_format_section_list_singular() {
        let mut view = sample_view();
        view.accounts_by_section
            .get_mut("Alpha")
            .unwrap()
            .truncate(1);
        let output = format_section_list(&view);
        assert!(output.contains("Alpha (1 account)"));
    }

    #[test]
    fn test_format_player_rank() {
        let rank = PlayerRank {
            player_name: "Amy#111".to_string(),
            rank: Some("Gold 2".to_string()),
            rr: 45,
        };
        let output = format_player_rank(&rank);
        assert_eq!(output, "Amy#111\nRank: Gold 2\nRank Rating (RR): 45\n");
    }

    #[test]
    fn test_format_player_rank_unranked() {
        let rank = PlayerRank {
            player_name: "Bob#222".to_string(),
            rank: None,
            rr: 0,
        };
        let output = format_player_rank(&rank);
        assert!(output.contains("Rank: N/A"));
    }
}
