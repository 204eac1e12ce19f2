// ABOUTME: Per-call execution context handed to every tool
// ABOUTME: Carries the upstream providers and the calendar date used for defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::providers::{SavantProvider, StatsApiProvider};

/// Context for a single tool invocation
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// MLB Stats API provider
    pub stats_api: Arc<dyn StatsApiProvider>,
    /// Baseball Savant provider
    pub savant: Arc<dyn SavantProvider>,
    /// Date treated as "today" for defaulted parameters
    pub today: NaiveDate,
}

impl ToolExecutionContext {
    /// Context dated today (UTC)
    #[must_use]
    pub fn new(stats_api: Arc<dyn StatsApiProvider>, savant: Arc<dyn SavantProvider>) -> Self {
        Self {
            stats_api,
            savant,
            today: Utc::now().date_naive(),
        }
    }

    /// Override the reference date
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Season year used when a tool's `season` argument is omitted
    #[must_use]
    pub fn current_season(&self) -> i32 {
        self.today.year()
    }

    /// The day before `today`
    #[must_use]
    pub fn yesterday(&self) -> NaiveDate {
        self.today - Duration::days(1)
    }
}
