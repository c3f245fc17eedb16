use std::{env, path::PathBuf, process};

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use safar_core::{
    catalog::Catalog,
    config::ConfigManager,
    draft::{AgentDueInfo, PaymentMethod, ServiceOption, TransactionType, AMOUNT_FIELD},
    init,
    wizard::{StepRole, SubmissionContext, WizardSession},
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_base = env::var_os("SAFAR_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".safar"));
    let config = ConfigManager::new(config_base)?.load()?;

    let mut catalog = Catalog::demo();
    if catalog.invoices.is_empty() && config.relax_invoice_requirement {
        catalog = catalog.with_fallback_invoices();
    }

    let context = SubmissionContext {
        recorded_by: "cli-operator".into(),
        branch_id: config.branch_id.clone(),
    };

    println!("{}", "New transaction".bold().underline());
    let mut session = WizardSession::new();

    loop {
        let steps = session.steps();
        let step = &steps[session.current_step() - 1];
        println!();
        println!(
            "{} {}",
            format!("Step {} of {}:", step.number, steps.len()).cyan().bold(),
            step.title.bold()
        );
        println!("{}", step.description.dimmed());

        if step.role == StepRole::Confirmation {
            if confirm_and_submit(&mut session, &catalog, &context)? {
                return Ok(());
            }
            // user backed out of confirmation
            session.retreat();
            continue;
        }

        prompt_step(&mut session, &catalog, step.role)?;

        let outcome = session.advance(&catalog);
        for (field, message) in &outcome.errors {
            println!("{} {}", format!("[{field}]").red().bold(), message.red());
        }
    }
}

fn prompt_step(
    session: &mut WizardSession,
    catalog: &Catalog,
    role: StepRole,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = ColorfulTheme::default();
    match role {
        StepRole::TypeSelection => {
            let labels = ["Credit (money in)", "Debit (money out)", "Transfer"];
            let choice = Select::with_theme(&theme)
                .with_prompt("Transaction type")
                .items(&labels)
                .default(0)
                .interact()?;
            let value = match choice {
                0 => TransactionType::Credit,
                1 => TransactionType::Debit,
                _ => TransactionType::Transfer,
            };
            session.store_mut().set_transaction_type(value);
        }
        StepRole::CategorySelection => {
            let labels: Vec<&str> = catalog
                .categories
                .iter()
                .map(|category| category.name.as_str())
                .collect();
            if labels.is_empty() {
                let slug: String = Input::with_theme(&theme)
                    .with_prompt("Category slug")
                    .interact_text()?;
                session.store_mut().set_category(slug);
            } else {
                let choice = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let slug = catalog.categories[choice].slug.clone();
                session.store_mut().set_category(slug);
            }
        }
        StepRole::PartySelection => {
            let labels: Vec<String> = catalog
                .parties
                .iter()
                .map(|party| format!("{} ({})", party.name, party.kind.backend_tag()))
                .collect();
            let choice = Select::with_theme(&theme)
                .with_prompt("Party")
                .items(&labels)
                .default(0)
                .interact()?;
            let party = catalog.parties[choice].clone();
            let is_agent = party.kind == safar_core::draft::PartyKind::Agent;
            session.store_mut().select_party(party);
            if is_agent {
                // stands in for the due-balance fetch the web app performs
                session.store_mut().set_agent_due_info(Some(AgentDueInfo {
                    total_due: 125_000.0,
                    haj_due: 85_000.0,
                    umrah_due: 40_000.0,
                    total_deposit: 60_000.0,
                    fetched_on: chrono::Local::now().date_naive(),
                }));
            }
        }
        StepRole::DebitAccountSelection | StepRole::CreditAccountSelection => {
            let labels: Vec<String> = catalog
                .accounts
                .iter()
                .map(|account| format!("{} — balance {:.2}", account.name, account.balance))
                .collect();
            let choice = Select::with_theme(&theme)
                .with_prompt(role.title())
                .items(&labels)
                .default(0)
                .interact()?;
            let account = catalog.accounts[choice].to_ref();
            if role == StepRole::DebitAccountSelection {
                session.store_mut().select_debit_account(account);
            } else {
                session.store_mut().select_credit_account(account);
            }
        }
        StepRole::AgentBalance => {
            if let Some(due) = &session.draft().agent_due_info {
                println!(
                    "  Total due {:.2} | Hajj {:.2} | Umrah {:.2} | Deposits {:.2}",
                    due.total_due, due.haj_due, due.umrah_due, due.total_deposit
                );
            }
            let labels = ["Hajj", "Umrah", "Others"];
            let choice = Select::with_theme(&theme)
                .with_prompt("Apply this credit to")
                .items(&labels)
                .default(0)
                .interact()?;
            let option = match choice {
                0 => ServiceOption::Hajj,
                1 => ServiceOption::Umrah,
                _ => ServiceOption::Others,
            };
            session.store_mut().set_selected_option(option);
        }
        StepRole::InvoiceSelection => {
            let mut labels: Vec<String> = catalog
                .invoices
                .iter()
                .map(|invoice| format!("{} — {:.2}", invoice.invoice_number, invoice.amount))
                .collect();
            if !catalog.requires_invoice() {
                labels.push("Skip (no live invoice)".into());
            }
            if labels.is_empty() {
                return Ok(());
            }
            let choice = Select::with_theme(&theme)
                .with_prompt("Invoice")
                .items(&labels)
                .default(0)
                .interact()?;
            let selection = catalog.invoices.get(choice).map(|invoice| invoice.id.clone());
            session.store_mut().select_invoice(selection);
        }
        StepRole::PaymentMethod => {
            let methods = [
                PaymentMethod::Cash,
                PaymentMethod::BankTransfer,
                PaymentMethod::Cheque,
                PaymentMethod::MobileBanking,
                PaymentMethod::Others,
            ];
            let labels: Vec<&str> = methods.iter().map(|method| method.slug()).collect();
            let choice = Select::with_theme(&theme)
                .with_prompt("Payment method")
                .items(&labels)
                .default(0)
                .interact()?;
            let method = methods[choice];
            session.store_mut().set_payment_method(method);

            let amount: String = Input::with_theme(&theme)
                .with_prompt("Amount")
                .interact_text()?;
            session.store_mut().set_payment_detail(AMOUNT_FIELD, amount);

            for field in method.required_fields() {
                let value: String = Input::with_theme(&theme)
                    .with_prompt(field.replace('_', " "))
                    .interact_text()?;
                session.store_mut().set_payment_detail(*field, value);
            }

            if !catalog.accounts.is_empty() {
                let labels: Vec<&str> = catalog
                    .accounts
                    .iter()
                    .map(|account| account.name.as_str())
                    .collect();
                let choice = Select::with_theme(&theme)
                    .with_prompt("Business account")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                session
                    .store_mut()
                    .select_source_account(catalog.accounts[choice].to_ref());
            }
        }
        StepRole::TransferDetails => {
            let amount: String = Input::with_theme(&theme)
                .with_prompt("Transfer amount")
                .interact_text()?;
            session.store_mut().set_transfer_amount(amount);

            let reference: String = Input::with_theme(&theme)
                .with_prompt("Reference (optional)")
                .allow_empty(true)
                .interact_text()?;
            if !reference.trim().is_empty() {
                session.store_mut().set_transfer_reference(reference);
            }

            if !catalog.staff.is_empty() {
                let labels: Vec<&str> = catalog
                    .staff
                    .iter()
                    .map(|staff| staff.name.as_str())
                    .collect();
                let choice = Select::with_theme(&theme)
                    .with_prompt("Approved by")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                session
                    .store_mut()
                    .set_account_manager(Some(catalog.staff[choice].clone()));
            }
        }
        StepRole::Confirmation => {}
    }
    Ok(())
}

fn confirm_and_submit(
    session: &mut WizardSession,
    catalog: &Catalog,
    context: &SubmissionContext,
) -> Result<bool, Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(session.draft())?);
    let go = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Submit this transaction?")
        .interact()?;
    if !go {
        return Ok(false);
    }

    let payload = session.begin_submission(catalog, context)?;
    println!();
    println!("{}", "Submission payload".green().bold());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    // No backend in the demo driver; treat assembly as acceptance.
    session.record_outcome(Ok(()));
    println!("{}", "Transaction recorded.".green());
    Ok(true)
}
