use console::style;

use crate::draft::PetitionDraft;
use crate::wallet::WalletSession;

pub fn print_banner() {
    println!();
    println!("  {}", style("DecentralizeIt").cyan().bold());
    println!(
        "  {}",
        style("Petitions with transparent, verifiable signatures").dim()
    );
    println!();
}

pub fn print_step(current: usize, total: usize, title: &str, hint: &str) {
    println!();
    println!(
        "  {} {}",
        style(format!("[{current}/{total}]")).cyan().bold(),
        style(title).white().bold()
    );
    println!("  {}", style(hint).dim());
    println!("  {}", style("─".repeat(50)).dim());
}

pub fn print_advisory(text: &str) {
    println!("  {} {}", style("!").yellow().bold(), style(text).yellow());
}

pub fn print_error(text: &str) {
    println!("  {} {}", style("✗").red().bold(), text);
}

pub fn print_session(session: &WalletSession) {
    match session {
        WalletSession::Connected(account) => println!(
            "  {} wallet {} ({})",
            style("✓").green().bold(),
            style("connected").green(),
            style(account.short()).dim()
        ),
        other => println!(
            "  {} wallet {}",
            style("›").cyan(),
            other.status_label()
        ),
    }
}

pub fn print_review(draft: &PetitionDraft) {
    println!();
    println!("  {}", style("Draft summary").white().bold());
    println!("    › Title:     {}", draft.title());
    println!(
        "    › Category:  {}",
        draft
            .category()
            .map_or_else(|| "—".to_string(), |c| c.to_string())
    );
    println!("    › Recipient: {}", draft.recipient());
    println!(
        "    › Target:    {}",
        draft
            .target()
            .map_or_else(|| "—".to_string(), |t| format!("{t} signatures"))
    );
    if let Some(deadline) = draft.deadline() {
        println!("    › Deadline:  {deadline}");
    }
    if let Some(location) = draft.location() {
        println!("    › Location:  {location}");
    }
    if !draft.tag_list().is_empty() {
        println!("    › Tags:      {}", draft.tag_list().join(", "));
    }
    if !draft.description().is_empty() {
        println!("    › Story:     {}", draft.description());
    }
    println!();
}
