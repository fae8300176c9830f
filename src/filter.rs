use std::collections::VecDeque;

use tracing::debug;

use crate::config::ResampleConfig;
use crate::data::{ClassSchema, Record};
use crate::errors::ResampleError;
use crate::resample::{ResampleStats, resample};

/// Batch lifecycle states for [`ResampleFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BatchState {
    /// Buffering the first batch; resampling runs at batch-finished.
    AwaitingFirstBatch,
    /// Buffering a later batch; records stream straight through.
    Buffering,
    /// A finished batch's output queue is exposed for draining.
    ReadyToStream,
}

/// Streaming filter that resamples the first completed batch and passes
/// every later batch through unchanged.
///
/// The full training batch must be seen before any output is produced: feed
/// records with [`input`](Self::input), then signal
/// [`batch_finished`](Self::batch_finished) and drain the FIFO queue with
/// [`pop_output`](Self::pop_output). Only the first batch is ever resampled;
/// the first-batch-done flag is permanent for the filter's lifetime.
pub struct ResampleFilter {
    config: ResampleConfig,
    schema: Option<ClassSchema>,
    state: BatchState,
    first_batch_done: bool,
    buffer: Vec<Record>,
    output: VecDeque<Record>,
    last_stats: Option<ResampleStats>,
}

impl ResampleFilter {
    /// Create a filter, rejecting invalid configurations eagerly.
    pub fn new(config: ResampleConfig) -> Result<Self, ResampleError> {
        config.validate()?;
        Ok(Self {
            config,
            schema: None,
            state: BatchState::AwaitingFirstBatch,
            first_batch_done: false,
            buffer: Vec::new(),
            output: VecDeque::new(),
            last_stats: None,
        })
    }

    /// Establish the class schema. Must happen before any `input` or
    /// `batch_finished` call.
    pub fn set_schema(&mut self, schema: ClassSchema) {
        self.schema = Some(schema);
    }

    /// Feed one record into the current batch.
    ///
    /// Returns `true` when the record is immediately available on the output
    /// queue (every batch after the first), `false` while it is being
    /// buffered for resampling.
    pub fn input(&mut self, record: Record) -> Result<bool, ResampleError> {
        let schema = self.schema.ok_or(ResampleError::SchemaNotEstablished)?;
        if let Some(class) = record.class
            && !schema.contains(class)
        {
            return Err(ResampleError::ClassOutOfRange {
                class,
                classes: schema.classes,
            });
        }
        if self.state == BatchState::ReadyToStream {
            self.start_batch();
        }
        match self.state {
            BatchState::AwaitingFirstBatch => {
                self.buffer.push(record);
                Ok(false)
            }
            BatchState::Buffering => {
                self.output.push_back(record);
                Ok(true)
            }
            BatchState::ReadyToStream => unreachable!("start_batch leaves ReadyToStream"),
        }
    }

    /// Signal that the current batch is complete.
    ///
    /// The first time this runs, the buffered records are resampled and the
    /// result becomes the output queue. Every later time is a pass-through
    /// no-op. Returns whether output is pending.
    pub fn batch_finished(&mut self) -> Result<bool, ResampleError> {
        let schema = self.schema.ok_or(ResampleError::SchemaNotEstablished)?;
        if !self.first_batch_done {
            let (sampled, stats) = resample(&self.buffer, schema, &self.config);
            debug!(
                seed = self.config.seed,
                input = stats.input_len,
                output = stats.output_len,
                "first batch resampled"
            );
            self.output = sampled.into();
            self.last_stats = Some(stats);
            self.first_batch_done = true;
        }
        self.buffer.clear();
        self.state = BatchState::ReadyToStream;
        Ok(!self.output.is_empty())
    }

    /// Signal the start of a new batch, discarding any undrained output.
    ///
    /// `input` arms this transition implicitly after a finished batch, so
    /// calling it is only required to abandon a batch mid-stream.
    pub fn begin_batch(&mut self) {
        self.start_batch();
    }

    /// Drain the next pending record, FIFO.
    pub fn pop_output(&mut self) -> Option<Record> {
        self.output.pop_front()
    }

    /// Number of records currently pending on the output queue.
    pub fn pending_output(&self) -> usize {
        self.output.len()
    }

    /// Returns `true` once the first batch has been completed and resampled.
    pub fn is_first_batch_done(&self) -> bool {
        self.first_batch_done
    }

    /// Telemetry from the first-batch resampling pass, once it has run.
    pub fn last_stats(&self) -> Option<&ResampleStats> {
        self.last_stats.as_ref()
    }

    /// The established class schema, if any.
    pub fn schema(&self) -> Option<ClassSchema> {
        self.schema
    }

    /// The filter's immutable configuration.
    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    fn start_batch(&mut self) {
        self.buffer.clear();
        self.output.clear();
        self.state = if self.first_batch_done {
            BatchState::Buffering
        } else {
            BatchState::AwaitingFirstBatch
        };
    }
}
