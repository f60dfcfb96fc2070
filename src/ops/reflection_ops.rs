use std::io::Write;

use crate::model::reflection::{ReflectionAnswers, ReflectionField};

/// Error type for reflection submission
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("could not write reflection: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize reflection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receives a snapshot of the reflection answers on save
pub trait ReflectionSink {
    fn submit(&mut self, answers: &ReflectionAnswers) -> Result<(), SinkError>;
}

/// Discards every submission
#[derive(Debug, Default)]
pub struct NullSink;

impl ReflectionSink for NullSink {
    fn submit(&mut self, _answers: &ReflectionAnswers) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Keeps every submitted snapshot in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub saved: Vec<ReflectionAnswers>,
}

impl ReflectionSink for MemorySink {
    fn submit(&mut self, answers: &ReflectionAnswers) -> Result<(), SinkError> {
        self.saved.push(answers.clone());
        Ok(())
    }
}

/// Writes each submission as one JSON object per line
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        JsonSink { out }
    }
}

impl<W: Write> ReflectionSink for JsonSink<W> {
    fn submit(&mut self, answers: &ReflectionAnswers) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.out, answers)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// The weekly reflection questionnaire
#[derive(Debug, Clone, Default)]
pub struct ReflectionForm {
    answers: ReflectionAnswers,
}

impl ReflectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &ReflectionAnswers {
        &self.answers
    }

    pub fn update_field(&mut self, field: ReflectionField, value: &str) {
        *self.answers.get_mut(field) = value.to_string();
    }

    pub fn snapshot(&self) -> ReflectionAnswers {
        self.answers.clone()
    }

    /// Hand the current answers to `sink`. The form keeps its answers either way.
    pub fn save(&self, sink: &mut dyn ReflectionSink) -> Result<(), SinkError> {
        sink.submit(&self.answers)?;
        tracing::debug!("reflection submitted");
        Ok(())
    }
}
