//! Simulated form submission.
//!
//! Nothing leaves the machine: a submission waits for an artificial delay and
//! then reports success. While it waits, the form's [`FormGate`] is held, and
//! a second submission of the same form is refused instead of queued. The
//! gate is released when the [`InFlight`] guard drops, including on panic.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default artificial latency for the contact form.
pub const CONTACT_DELAY: Duration = Duration::from_millis(2000);
/// Default artificial latency for the newsletter signup.
pub const NEWSLETTER_DELAY: Duration = Duration::from_millis(1000);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A {0} submission is already in progress")]
    InFlight(FormKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
        })
    }
}

/// At most one in-flight submission for one form.
#[derive(Debug)]
pub struct FormGate {
    kind: FormKind,
    busy: AtomicBool,
}

impl FormGate {
    pub const fn new(kind: FormKind) -> Self {
        Self {
            kind,
            busy: AtomicBool::new(false),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn try_begin(&self) -> Result<InFlight<'_>, SubmitError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight { gate: self })
            .map_err(|_| SubmitError::InFlight(self.kind))
    }
}

/// Held for the duration of one submission.
#[derive(Debug)]
pub struct InFlight<'a> {
    gate: &'a FormGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub form: FormKind,
    pub elapsed: Duration,
}

/// Hold the gate for `delay`, then resolve. Inputs are validated by the caller.
pub fn simulate(gate: &FormGate, delay: Duration) -> Result<Receipt, SubmitError> {
    let _in_flight = gate.try_begin()?;
    let started = Instant::now();
    tracing::debug!(form = %gate.kind(), ?delay, "simulating submission");
    std::thread::sleep(delay);
    Ok(Receipt {
        form: gate.kind(),
        elapsed: started.elapsed(),
    })
}
