// 🧍 Person Records - Base and insured variants
//
// "Name is IDENTITY for the operator, UUID is IDENTITY for the logs"
//
// A Person tracks weight, savings and pay rate. An InsuredPerson is a Person
// plus enrollment in the plan-rate table. Record is the tagged variant the
// session stores; paycheck dispatch is an explicit match on it.

use crate::entities::insurance::{Enrollment, PlanTable};
use crate::error::RosterError;
use std::fmt;
use std::sync::Arc;

/// Every full block of this many minutes burns one pound
pub const MINUTES_PER_POUND: f64 = 20.0;

/// Pass `value` through if finite, otherwise refuse the update
fn finite(field: &'static str, value: f64) -> Result<f64, RosterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RosterError::NonFinite { field })
    }
}

// ============================================================================
// STARTING VALUES
// ============================================================================

/// Values a freshly added person starts with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartingValues {
    pub weight: f64,
    pub savings: f64,
    pub pay_rate: f64,
}

impl Default for StartingValues {
    fn default() -> Self {
        StartingValues {
            weight: 8.0,
            savings: 100.0,
            pay_rate: 9.25,
        }
    }
}

// ============================================================================
// PERSON
// ============================================================================

/// Person - one tracked individual
///
/// Fields are private: the only way to change a person is through
/// eat / exercise / promote / calculate_paycheck. Each one refuses an
/// update that would leave a field non-finite, and changes nothing then.
#[derive(Debug, Clone)]
pub struct Person {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// Display name, fixed at construction
    name: String,

    /// Pounds, unbounded (may go negative)
    weight: f64,

    savings: f64,

    /// Currency per hour
    pay_rate: f64,
}

impl Person {
    /// Create a person with the standard starting values
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_starting(name, &StartingValues::default())
    }

    pub fn with_starting(name: impl Into<String>, start: &StartingValues) -> Self {
        Person {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            weight: start.weight,
            savings: start.savings,
            pay_rate: start.pay_rate,
        }
    }

    pub fn eat(&mut self, pounds: f64) -> Result<(), RosterError> {
        self.weight = finite("weight", self.weight + pounds)?;
        Ok(())
    }

    /// Burn one pound per full 20 minutes; the remainder is lost
    pub fn exercise(&mut self, minutes: f64) -> Result<(), RosterError> {
        let burned = (minutes / MINUTES_PER_POUND).floor();
        self.weight = finite("weight", self.weight - burned)?;
        Ok(())
    }

    pub fn promote(&mut self, increase: f64) -> Result<(), RosterError> {
        self.pay_rate = finite("pay rate", self.pay_rate + increase)?;
        Ok(())
    }

    /// Pay for `hours` at the current rate, credited to savings
    pub fn calculate_paycheck(&mut self, hours: f64) -> Result<f64, RosterError> {
        let pay = finite("paycheck", self.pay_rate * hours)?;
        self.savings = finite("savings", self.savings + pay)?;
        Ok(pay)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn pay_rate(&self) -> f64 {
        self.pay_rate
    }

    /// Long diagnostic form
    ///
    /// Example: `Person(Id=…, Name=Ada, Weight=8, Savings=100, PayRate=9.25)`
    pub fn describe(&self) -> String {
        format!(
            "Person(Id={}, Name={}, Weight={}, Savings={}, PayRate={})",
            self.id, self.name, self.weight, self.savings, self.pay_rate
        )
    }
}

/// Short form: the name alone
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// INSURED PERSON
// ============================================================================

/// InsuredPerson - a Person enrolled (or not) in each plan of the plan table
#[derive(Debug, Clone)]
pub struct InsuredPerson {
    person: Person,
    insurance: Enrollment,
}

impl InsuredPerson {
    /// Create an insured person on the given plan table, enrolled in nothing
    pub fn new(name: impl Into<String>, plans: Arc<PlanTable>) -> Self {
        Self::with_starting(name, &StartingValues::default(), plans)
    }

    pub fn with_starting(
        name: impl Into<String>,
        start: &StartingValues,
        plans: Arc<PlanTable>,
    ) -> Self {
        InsuredPerson {
            person: Person::with_starting(name, start),
            insurance: Enrollment::new(plans),
        }
    }

    pub fn eat(&mut self, pounds: f64) -> Result<(), RosterError> {
        self.person.eat(pounds)
    }

    pub fn exercise(&mut self, minutes: f64) -> Result<(), RosterError> {
        self.person.exercise(minutes)
    }

    pub fn promote(&mut self, increase: f64) -> Result<(), RosterError> {
        self.person.promote(increase)
    }

    /// Opt in or out of a plan. Unknown plans are rejected and nothing changes.
    pub fn edit_insurance_status(&mut self, plan: &str, enrolled: bool) -> Result<(), RosterError> {
        self.insurance.set(plan, enrolled)
    }

    pub fn is_enrolled(&self, plan: &str) -> Option<bool> {
        self.insurance.is_enrolled(plan)
    }

    /// `(plan, enrolled)` pairs in plan-table order
    pub fn insurance_status(&self) -> impl Iterator<Item = (&str, bool)> {
        self.insurance.entries()
    }

    /// Sum of rates for every enrolled plan
    pub fn total_deduction(&self) -> f64 {
        self.insurance.total_cost()
    }

    /// Net paycheck for `hours`.
    ///
    /// Savings are credited with the gross pay; the plan deduction only
    /// lowers the returned figure.
    pub fn calculate_paycheck(&mut self, hours: f64) -> Result<f64, RosterError> {
        let gross = self.person.calculate_paycheck(hours)?;
        Ok(gross - self.total_deduction())
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Long diagnostic form, including enrollment
    pub fn describe(&self) -> String {
        let p = &self.person;
        format!(
            "InsuredPerson(Id={}, Name={}, Weight={}, Savings={}, PayRate={}, Insurances={})",
            p.id, p.name, p.weight, p.savings, p.pay_rate, self.insurance
        )
    }
}

impl fmt::Display for InsuredPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A stored record: either variant, same action surface
#[derive(Debug, Clone)]
pub enum Record {
    Basic(Person),
    Insured(InsuredPerson),
}

impl Record {
    fn person(&self) -> &Person {
        match self {
            Record::Basic(person) => person,
            Record::Insured(insured) => &insured.person,
        }
    }

    pub fn eat(&mut self, pounds: f64) -> Result<(), RosterError> {
        match self {
            Record::Basic(person) => person.eat(pounds),
            Record::Insured(insured) => insured.eat(pounds),
        }
    }

    pub fn exercise(&mut self, minutes: f64) -> Result<(), RosterError> {
        match self {
            Record::Basic(person) => person.exercise(minutes),
            Record::Insured(insured) => insured.exercise(minutes),
        }
    }

    pub fn promote(&mut self, increase: f64) -> Result<(), RosterError> {
        match self {
            Record::Basic(person) => person.promote(increase),
            Record::Insured(insured) => insured.promote(increase),
        }
    }

    /// Gross pay for basic records, net of plan costs for insured ones.
    /// Both credit the gross amount to savings.
    pub fn calculate_paycheck(&mut self, hours: f64) -> Result<f64, RosterError> {
        match self {
            Record::Basic(person) => person.calculate_paycheck(hours),
            Record::Insured(insured) => insured.calculate_paycheck(hours),
        }
    }

    pub fn id(&self) -> &str {
        self.person().id()
    }

    pub fn name(&self) -> &str {
        self.person().name()
    }

    pub fn weight(&self) -> f64 {
        self.person().weight()
    }

    pub fn savings(&self) -> f64 {
        self.person().savings()
    }

    pub fn pay_rate(&self) -> f64 {
        self.person().pay_rate()
    }

    pub fn is_insured(&self) -> bool {
        matches!(self, Record::Insured(_))
    }

    pub fn as_insured(&self) -> Option<&InsuredPerson> {
        match self {
            Record::Insured(insured) => Some(insured),
            Record::Basic(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Record::Basic(person) => person.describe(),
            Record::Insured(insured) => insured.describe(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.person(), f)
    }
}

impl From<Person> for Record {
    fn from(person: Person) -> Self {
        Record::Basic(person)
    }
}

impl From<InsuredPerson> for Record {
    fn from(insured: InsuredPerson) -> Self {
        Record::Insured(insured)
    }
}

// ============================================================================
// TESTS
// ============================================================================
