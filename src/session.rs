//! The interactive loop: pick filters, show reports, page through raw data, maybe restart.

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::config::{City, DatasetConfig};
use crate::console::Console;
use crate::error::BikeshareResult;
use crate::filters::{DayFilter, FilterCriteria, MonthFilter};
use crate::ingestion::IngestionOptions;
use crate::paginate::view_raw_data;
use crate::reports::ReportKind;
use crate::trips;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const CITY_PROMPT: &str = "Enter the city you want to view, Chicago, New York City, or Washington:";
const MONTH_PROMPT: &str = "Enter the month you want to filter with, from January to June, or all:";
const DAY_PROMPT: &str = "Enter the day of the week you want to filter with, from Monday to Sunday, or all:";
const RETRY: &str = "I'm sorry, your input does not work.  Please try again.";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Filtering,
    Reporting(FilterCriteria),
    Done,
}

/// What happened over a whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Reporting phases that ran (including ones that found no trips).
    pub iterations: usize,
    /// Reporting phases that printed all four reports.
    pub completed_reports: usize,
}

pub struct Session<'c, R, W> {
    config: &'c DatasetConfig,
    console: Console<R, W>,
    ingestion: IngestionOptions,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(config: &'c DatasetConfig, console: Console<R, W>, ingestion: IngestionOptions) -> Self {
        Self {
            config,
            console,
            ingestion,
        }
    }

    /// Run until the user declines to restart or input ends.
    ///
    /// A missing data file ends the session with [`crate::BikeshareError::DataSourceNotFound`].
    pub fn run(&mut self) -> BikeshareResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut state = State::Filtering;

        loop {
            state = match state {
                State::Filtering => match self.collect_filters()? {
                    Some(criteria) => State::Reporting(criteria),
                    None => State::Done,
                },
                State::Reporting(criteria) => {
                    summary.iterations += 1;
                    if self.report(&criteria)? {
                        summary.completed_reports += 1;
                    }
                    match self.console.ask(RESTART_PROMPT)? {
                        Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => State::Filtering,
                        _ => State::Done,
                    }
                }
                State::Done => break,
            };
        }

        log::debug!(
            "session finished: iterations={} completed_reports={}",
            summary.iterations,
            summary.completed_reports
        );
        Ok(summary)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// `None` when input ends before all three answers are in.
    fn collect_filters(&mut self) -> BikeshareResult<Option<FilterCriteria>> {
        self.console.say(GREETING)?;
        let Some(city) = self.prompt_until(CITY_PROMPT, City::parse)? else {
            return Ok(None);
        };
        let Some(month) = self.prompt_until(MONTH_PROMPT, MonthFilter::parse)? else {
            return Ok(None);
        };
        let Some(day) = self.prompt_until(DAY_PROMPT, DayFilter::parse)? else {
            return Ok(None);
        };
        self.console.separator()?;

        let criteria = FilterCriteria::new(city, month, day);
        log::info!("selected {criteria}");
        Ok(Some(criteria))
    }

    fn prompt_until<T>(&mut self, prompt: &str, parse: fn(&str) -> Option<T>) -> BikeshareResult<Option<T>> {
        loop {
            let Some(answer) = self.console.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => {
                    log::debug!("rejected input {answer:?}");
                    self.console.say(RETRY)?;
                }
            }
        }
    }

    /// Returns whether all four reports were printed.
    fn report(&mut self, criteria: &FilterCriteria) -> BikeshareResult<bool> {
        let table = trips::load(self.config, criteria, &self.ingestion)?;
        if table.is_empty() {
            self.console.say(&format!(
                "No trips match the selected filters ({}, month: {}, day: {}).",
                criteria.city, criteria.month, criteria.day
            ))?;
            self.console.separator()?;
            return Ok(false);
        }

        for kind in ReportKind::ALL {
            self.console.say(&format!("\n{}\n", kind.heading()))?;
            let started = Instant::now();
            let text = match kind.render(&table, criteria) {
                Ok(text) => text,
                Err(e) => {
                    log::error!("{kind:?} report failed: {e}");
                    self.console.say(&format!("Unable to finish the reports: {e}"))?;
                    self.console.separator()?;
                    return Ok(false);
                }
            };
            for line in text.lines() {
                self.console.say(line)?;
            }
            let elapsed = started.elapsed();
            log::debug!("{kind:?} report took {elapsed:?}");
            self.console.print(&format!("\nThis took {} seconds.", elapsed.as_secs_f64()))?;
            self.console.separator()?;
        }

        view_raw_data(&mut self.console, &table.data, self.config.page_size)?;
        Ok(true)
    }
}
