//! List criteria built from raw request parameters.
//!
//! Every parameter is optional and `"todos"` means "no filter". Values that
//! cannot be understood also impose no constraint; listing never fails on
//! its inputs.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use models::service_record::{business_offset, Model};

/// Wildcard value the UI sends for "all".
pub const ALL_SENTINEL: &str = "todos";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveState {
    #[default]
    Any,
    ActiveOnly,
    InactiveOnly,
}

impl ActiveState {
    /// `ativos` / `inativos`; anything else is `Any`.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("ativos") => ActiveState::ActiveOnly,
            Some("inativos") => ActiveState::InactiveOnly,
            _ => ActiveState::Any,
        }
    }

    fn admits(self, active: bool) -> bool {
        match self {
            ActiveState::Any => true,
            ActiveState::ActiveOnly => active,
            ActiveState::InactiveOnly => !active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaidState {
    #[default]
    Any,
    PaidOnly,
    UnpaidOnly,
}

impl PaidState {
    /// `pagos` / `nao_pagos`; anything else is `Any`.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("pagos") => PaidState::PaidOnly,
            Some("nao_pagos") => PaidState::UnpaidOnly,
            _ => PaidState::Any,
        }
    }

    fn admits(self, paid: bool) -> bool {
        match self {
            PaidState::Any => true,
            PaidState::PaidOnly => paid,
            PaidState::UnpaidOnly => !paid,
        }
    }
}

/// Conjunction of optional predicates over service records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCriteria {
    pub client_type: Option<String>,
    /// Inclusive lower bound.
    pub date_start: Option<DateTime<FixedOffset>>,
    /// Inclusive upper bound.
    pub date_end: Option<DateTime<FixedOffset>>,
    pub active: ActiveState,
    pub paid: PaidState,
}

impl RecordCriteria {
    pub fn client_type(mut self, raw: Option<&str>) -> Self {
        self.client_type = raw
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
            .map(str::to_string);
        self
    }

    /// `YYYY-MM-DD`, taken as 00:00:00 in the business offset.
    pub fn date_start(mut self, raw: Option<&str>) -> Self {
        self.date_start = raw.and_then(|d| day_bound(d, NaiveTime::from_hms_opt(0, 0, 0)?));
        self
    }

    /// `YYYY-MM-DD`, taken as 23:59:59 in the business offset.
    pub fn date_end(mut self, raw: Option<&str>) -> Self {
        self.date_end = raw.and_then(|d| day_bound(d, NaiveTime::from_hms_opt(23, 59, 59)?));
        self
    }

    pub fn status(mut self, raw: Option<&str>) -> Self {
        self.active = ActiveState::from_param(raw);
        self
    }

    pub fn paid(mut self, raw: Option<&str>) -> Self {
        self.paid = PaidState::from_param(raw);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == RecordCriteria::default()
    }

    pub fn matches(&self, record: &Model) -> bool {
        if let Some(ct) = &self.client_type {
            if record.client_type != *ct {
                return false;
            }
        }
        if let Some(start) = self.date_start {
            if record.created_at < start {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if record.created_at > end {
                return false;
            }
        }
        self.active.admits(record.active) && self.paid.admits(record.paid)
    }
}

fn day_bound(raw: &str, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()?;
    business_offset().from_local_datetime(&date.and_time(time)).single()
}
