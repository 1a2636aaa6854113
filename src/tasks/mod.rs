//! Commands that work on tasks.
use color_eyre::{Result, eyre::eyre};

use crate::api::rest::{self, DurationUnit};

pub mod add;
pub mod edit;
pub mod list;
pub mod state;
pub mod view;

/// Priority as shown in the Todoist UI, where 1 is the most urgent.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    /// p1
    #[value(name = "1")]
    Urgent,
    /// p2
    #[value(name = "2")]
    VeryHigh,
    /// p3
    #[value(name = "3")]
    High,
    /// p4
    #[value(name = "4")]
    Normal,
}

impl From<Priority> for rest::Priority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Urgent => rest::Priority::Urgent,
            Priority::VeryHigh => rest::Priority::VeryHigh,
            Priority::High => rest::Priority::High,
            Priority::Normal => rest::Priority::Normal,
        }
    }
}

/// Parses durations given as `<amount>:<unit>`, e.g. `30:minute` or `2:day`.
pub(crate) fn parse_duration(s: &str) -> Result<(u32, DurationUnit)> {
    let (amount, unit) = s.split_once(':').ok_or_else(|| {
        eyre!("Invalid duration format. Use '<amount>:<unit>' format (e.g., '30:minute' or '2:day').")
    })?;
    let amount: u32 = amount
        .parse()
        .map_err(|_| eyre!("Invalid duration amount. Must be a positive integer."))?;
    if amount == 0 {
        return Err(eyre!("Duration amount must be greater than zero."));
    }
    let unit = unit
        .parse()
        .map_err(|_| eyre!("Invalid duration unit. Use 'minute' or 'day'."))?;
    Ok((amount, unit))
}
