//! Demo register configuration

use crate::lifecycle::{SeedData, SystemSettings};
use crate::session_actor::CheckoutPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Order session demo configuration
#[derive(Debug, Parser)]
#[command(name = "order-session", about = "Point-of-sale order session demo", long_about = None)]
pub struct Config {
    /// Seed data file (menu items, members, coupons, payment methods). Uses the built-in fixture when absent.
    #[arg(long, env = "POS_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Request queue capacity of each actor
    #[arg(long, env = "POS_CHANNEL_CAPACITY", default_value_t = 32)]
    pub channel_capacity: usize,

    /// Percentage of the amount paid credited to members as points
    #[arg(long, env = "POS_POINTS_ACCRUAL_PERCENT", default_value_t = 1)]
    pub points_accrual_percent: u64,

    /// Number of registers checking out concurrently in the demo
    #[arg(long, env = "POS_REGISTERS", default_value_t = 2)]
    pub registers: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Actor settings for these options, with payment methods and category names from `seed`.
    pub fn system_settings(&self, seed: &SeedData) -> SystemSettings {
        SystemSettings {
            channel_capacity: self.channel_capacity,
            payment_methods: seed.accepted_payment_methods(),
            categories: seed.categories.clone(),
            policy: CheckoutPolicy {
                points_accrual_percent: self.points_accrual_percent,
            },
        }
    }
}
