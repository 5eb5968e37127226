// 🎬 Action Handlers
// Ask for one value, apply it to the selected record (or the registry), confirm.
//
// Per-record handlers assume the loop has selected someone. If not, the
// session error propagates: that is a broken transition, not operator input.

use crate::console::{Flow, InputStatus, Prompt};
use crate::entities::Record;
use crate::error::RosterError;
use crate::session::Session;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Numeric answers must be at least this
const MINIMUM_AMOUNT: f64 = 0.0;

/// Ask for a non-negative amount; `None` when the operator cancelled
fn ask_amount(prompt: &mut dyn Prompt, question: &str) -> Result<Option<f64>> {
    match prompt.number(question, MINIMUM_AMOUNT)? {
        (InputStatus::Success, amount) => Ok(Some(amount)),
        (InputStatus::Cancelled, _) => {
            prompt.success("Cancelled")?;
            Ok(None)
        }
    }
}

/// Report an update the record refused; nothing about it changed
fn refuse(prompt: &mut dyn Prompt, record: &Record, err: RosterError) -> Result<Flow> {
    warn!(id = record.id(), %err, "refused update");
    prompt.say(&format!("{} was not changed: {}", record, err))?;
    Ok(Flow::Continue)
}

// ============================================================================
// PER-RECORD ACTIONS
// ============================================================================

pub fn eat(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    let Some(pounds) = ask_amount(prompt, "How much did they eat")? else {
        return Ok(Flow::Continue);
    };

    let record = session.current_mut()?;
    let before = record.weight();
    if let Err(err) = record.eat(pounds) {
        return refuse(prompt, record, err);
    }
    debug!(id = record.id(), before, after = record.weight(), "eat");

    let message = format!("{} Is Now {} pounds!", record, record.weight());
    prompt.success(&message)?;
    Ok(Flow::Continue)
}

pub fn exercise(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    let Some(minutes) = ask_amount(prompt, "How much time did they spend")? else {
        return Ok(Flow::Continue);
    };

    let record = session.current_mut()?;
    let before = record.weight();
    if let Err(err) = record.exercise(minutes) {
        return refuse(prompt, record, err);
    }
    debug!(id = record.id(), minutes, before, after = record.weight(), "exercise");

    let message = format!("{} Is Now {} pounds!", record, record.weight());
    prompt.success(&message)?;
    Ok(Flow::Continue)
}

pub fn promote(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    let Some(increase) = ask_amount(prompt, "How much would you like to promote them by")? else {
        return Ok(Flow::Continue);
    };

    let record = session.current_mut()?;
    let before = record.pay_rate();
    if let Err(err) = record.promote(increase) {
        return refuse(prompt, record, err);
    }
    debug!(id = record.id(), before, after = record.pay_rate(), "promote");

    let message = format!("{}'s Wage Is Now ${:.2}/hour", record, record.pay_rate());
    prompt.success(&message)?;
    Ok(Flow::Continue)
}

/// Prints the paycheck as returned (net for insured records) and the new savings
pub fn pay(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    let Some(hours) = ask_amount(prompt, "How many hours did they work")? else {
        return Ok(Flow::Continue);
    };

    let record = session.current_mut()?;
    let paycheck = match record.calculate_paycheck(hours) {
        Ok(paycheck) => paycheck,
        Err(err) => return refuse(prompt, record, err),
    };
    debug!(id = record.id(), hours, paycheck, savings = record.savings(), "paycheck");

    let paid = format!("{} Got Paid ${:.2}!", record, paycheck);
    let savings = format!("{} Now Has ${:.2} In Savings!", record, record.savings());
    prompt.success(&paid)?;
    prompt.success(&savings)?;
    Ok(Flow::Continue)
}

/// On confirmation, removes the record and leaves the per-record menu
pub fn delete(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    let name = session
        .selected_name()
        .ok_or(RosterError::NothingSelected)?
        .to_string();
    let (status, sure) = prompt.confirm(&format!("Are you sure you want to delete {}", name))?;

    if status == InputStatus::Success && sure {
        session.remove_current()?;
        session.deselect();
        prompt.success(&format!("Deleted {}", name))?;
        Ok(Flow::Exit)
    } else {
        prompt.success("Cancelled")?;
        Ok(Flow::Continue)
    }
}

// ============================================================================
// REGISTRY ACTIONS
// ============================================================================

pub fn add_person(session: &mut Session, prompt: &mut dyn Prompt) -> Result<Flow> {
    let (status, name) = prompt.text("What is the person's name?")?;
    if status == InputStatus::Cancelled {
        prompt.success("Cancelled")?;
        return Ok(Flow::Continue);
    }

    let (status, insured) = prompt.confirm(&format!("Does {} have insurance?", name))?;
    if status == InputStatus::Cancelled {
        prompt.success("Cancelled")?;
        return Ok(Flow::Continue);
    }

    let mut record = session.new_record(&name, insured);

    if let Record::Insured(person) = &mut record {
        let plans: Vec<String> = session.plans().names().map(str::to_string).collect();
        for plan in plans {
            let (status, has_plan) = prompt.confirm(&format!("Does {} have {}", name, plan))?;
            if status == InputStatus::Cancelled {
                prompt.success("Cancelled")?;
                return Ok(Flow::Continue);
            }
            if has_plan {
                person.edit_insurance_status(&plan, true)?;
            }
        }
    }

    session.add(record);
    info!(total = session.len(), "roster grew");
    prompt.success(&format!("Added Person: {}", name))?;
    Ok(Flow::Continue)
}

// ============================================================================
// TESTS
// ============================================================================
