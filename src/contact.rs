use std::{
    collections::BTreeMap,
    sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use regex::Regex;
use thiserror::Error;

use crate::reveal::Timers;

/// How long the simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success state is shown before the form goes back to idle.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    Subject,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("Invalid email format")]
    InvalidEmail,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    /// Drops the error for a field the user is editing again.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = BTreeMap::new();
        if self.full_name.trim().is_empty() {
            errors.insert(Field::FullName, FieldError::Required(Field::FullName));
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::Required(Field::Email));
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, FieldError::Required(Field::Message));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error,
}

impl FormStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Status after the user presses submit with the given form contents.
    pub fn on_submit(self, form: &ContactForm) -> Result<Self, FormErrors> {
        if self.is_busy() {
            return Ok(self);
        }
        form.validate().map(|_| Self::Submitting)
    }

    /// Status after the simulated delivery completes. Delivery always succeeds.
    pub fn on_delivered(self) -> Self {
        match self {
            Self::Submitting => Self::Submitted,
            other => other,
        }
    }

    pub fn on_reset(self) -> Self {
        match self {
            Self::Submitted | Self::Error => Self::Idle,
            other => other,
        }
    }
}

/// The one delayed step of a submission that may be pending at a time.
///
/// Scheduling replaces the previous step. Whatever is still pending is
/// cancelled by [`PendingStep::cancel`], which the form calls on unmount.
pub struct PendingStep<T: Timers> {
    timers: T,
    handle: Mutex<Option<T::Handle>>,
}

impl<T: Timers> PendingStep<T> {
    pub fn new(timers: T) -> Self {
        Self {
            timers,
            handle: Mutex::new(None),
        }
    }

    /// Runs `task` after `delay`, or right away if the host refuses to schedule it.
    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + Send + 'static) {
        self.cancel();
        let slot = Arc::new(Mutex::new(Some(task)));
        let fired = Arc::clone(&slot);
        let handle = self.timers.schedule(
            delay,
            Box::new(move || {
                if let Some(task) = take_task(&fired) {
                    task();
                }
            }),
        );
        match handle {
            // a host that ran the task inline has nothing left to cancel
            Some(_) if has_run(&slot) => {}
            Some(handle) => *self.lock() = Some(handle),
            None => {
                log::warn!("could not schedule contact form step, running it now");
                if let Some(task) = take_task(&slot) {
                    task();
                }
            }
        }
    }

    pub fn cancel(&self) {
        let handle = self.lock().take();
        if let Some(handle) = handle {
            self.timers.cancel(handle);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T::Handle>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn take_task<F>(slot: &Mutex<Option<F>>) -> Option<F> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).take()
}

fn has_run<F>(slot: &Mutex<Option<F>>) -> bool {
    slot.lock().unwrap_or_else(PoisonError::into_inner).is_none()
}
