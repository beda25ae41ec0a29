use std::sync::Arc;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select};

use super::view::{
    print_advisory, print_banner, print_error, print_review, print_session, print_step,
};
use crate::config::Config;
use crate::draft::{Category, DraftField};
use crate::error::PublishError;
use crate::publish::SimulatedLedger;
use crate::wallet::{SimulatedWallet, WalletSession};
use crate::wizard::{PetitionDraftWizard, WizardStep};

/// Interactive petition authoring over the simulated collaborators.
pub async fn run(config: &Config) -> Result<()> {
    print_banner();

    let wallet = Arc::new(SimulatedWallet::available());
    let mut ledger = SimulatedLedger::new().with_latency(config.simulator_latency());
    for _ in 0..config.publish.simulator.fail_first {
        ledger = ledger.fail_next(PublishError::Failed("simulated node failure".into()));
    }

    let mut wizard = PetitionDraftWizard::open_with_timeouts(
        wallet,
        Arc::new(ledger),
        config.wizard_timeouts(),
    )
    .await;
    print_session(wizard.session());

    loop {
        let step = wizard.step();
        print_step(step.number(), WizardStep::total(), step.title(), step.hint());

        match step {
            WizardStep::Basics => {
                prompt_field(&mut wizard, DraftField::Title, "Petition title", false)?;
                prompt_category(&mut wizard)?;
                prompt_field(&mut wizard, DraftField::Recipient, "Who must act", false)?;
            }
            WizardStep::Details => {
                prompt_field(&mut wizard, DraftField::Description, "Your story", true)?;
                prompt_field(&mut wizard, DraftField::Location, "Location (optional)", true)?;
            }
            WizardStep::Settings => {
                prompt_field(&mut wizard, DraftField::Target, "Signature target", false)?;
                prompt_field(
                    &mut wizard,
                    DraftField::Deadline,
                    "Deadline YYYY-MM-DD (optional)",
                    true,
                )?;
                prompt_field(
                    &mut wizard,
                    DraftField::Tags,
                    "Tags, comma-separated (optional)",
                    true,
                )?;
            }
            WizardStep::Review => {
                if review_and_publish(&mut wizard).await? {
                    return Ok(());
                }
                // Author chose to edit: step back into the form.
                wizard.retreat();
                continue;
            }
        }
        wizard.advance();
    }
}

fn prompt_field(
    wizard: &mut PetitionDraftWizard,
    field: DraftField,
    prompt: &str,
    allow_empty: bool,
) -> Result<()> {
    loop {
        let value: String = Input::new()
            .with_prompt(format!("  {prompt}"))
            .allow_empty(allow_empty)
            .interact_text()?;
        match wizard.update_field(field, &value) {
            Ok(()) => return Ok(()),
            Err(err) => print_error(&err.to_string()),
        }
    }
}

fn prompt_category(wizard: &mut PetitionDraftWizard) -> Result<()> {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    let chosen = Select::new()
        .with_prompt("  Category")
        .items(&names)
        .default(0)
        .interact()?;
    wizard.update_field(DraftField::Category, names[chosen])?;
    Ok(())
}

/// Review step: summary, wallet gate, publish with retry. Returns `true`
/// when the petition was published (or the author discarded the draft),
/// `false` to go back and edit.
async fn review_and_publish(wizard: &mut PetitionDraftWizard) -> Result<bool> {
    print_review(wizard.draft());
    print_session(wizard.session());

    // Wallet gate: the publish action stays disabled until connected.
    while !wizard.session().is_connected() {
        if matches!(wizard.session(), WalletSession::Unavailable) {
            if let Some(advisory) = wizard.wallet_advisory() {
                print_advisory(advisory);
            } else {
                print_advisory("No wallet provider detected. Please install a wallet to continue.");
            }
            return Ok(true);
        }
        let connect = Confirm::new()
            .with_prompt("  Connect your wallet to publish?")
            .default(true)
            .interact()?;
        if !connect {
            return Ok(false);
        }
        wizard.request_wallet_connection().await;
        if let Some(advisory) = wizard.wallet_advisory() {
            print_advisory(advisory);
        }
    }
    print_session(wizard.session());

    let action = Select::new()
        .with_prompt("  Ready to publish")
        .items(&["Publish now", "Go back and edit", "Discard draft"])
        .default(0)
        .interact()?;
    match action {
        1 => return Ok(false),
        2 => {
            println!("  {}", style("Draft discarded.").dim());
            return Ok(true);
        }
        _ => {}
    }

    loop {
        println!(
            "  {} {}",
            style("⏳").cyan(),
            style("Publishing to the verification ledger...").white()
        );
        match wizard.confirm_and_publish().await {
            Ok(attempt) => {
                if let Some(confirmation) = attempt.confirmation_id() {
                    println!();
                    println!(
                        "  {} {}",
                        style("✓").green().bold(),
                        style("Petition published").green().bold()
                    );
                    println!(
                        "    › Confirmation: {}",
                        style(confirmation.as_str()).green()
                    );
                    return Ok(true);
                }
                if let Some(message) = attempt.error_message() {
                    print_advisory(message);
                    let retry = Confirm::new()
                        .with_prompt("  Retry publishing?")
                        .default(true)
                        .interact()?;
                    if !retry {
                        return Ok(false);
                    }
                    continue;
                }
                return Ok(true);
            }
            Err(err) => {
                print_error(&err.to_string());
                return Ok(false);
            }
        }
    }
}
