use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::service::sum_charges;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    first_name: String,
    last_name: String,
    #[serde(default)]
    salary: f64,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary: 0.0,
        }
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.set_salary(salary);
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"<last>, <first>"`
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Stored as given. Negative amounts are accepted.
    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    /// Raises salary by `percent` (5.0 means 5%). Zero or negative
    /// percentages leave the salary untouched.
    pub fn raise_salary(&mut self, percent: f64) {
        if percent > 0.0 {
            let previous = self.salary;
            self.salary *= 1.0 + percent / 100.0;
            debug!(
                employee = %self.full_name(),
                percent,
                previous,
                salary = self.salary,
                "Salary raised"
            );
        } else {
            debug!(employee = %self.full_name(), percent, "Non-positive raise ignored");
        }
    }

    /// Plain sum of every charge. No discount is applied.
    pub fn balance_due<'a, I>(&self, services: I) -> f64
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        sum_charges(services)
    }
}
