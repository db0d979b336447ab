//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+agogos@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Telemetry payload types for the Agogos telemetry collector
//!
//! This module provides the batch structures handed between pipeline
//! components: one batch type per signal, each carrying its records plus
//! batch-level metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Batch of spans flowing through a traces pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracesData {
    /// Batch ID
    pub id: Uuid,

    /// Batch timestamp
    pub timestamp: DateTime<Utc>,

    /// Spans in this batch
    pub spans: Vec<SpanData>,

    /// Batch metadata
    pub metadata: HashMap<String, String>,
}

impl TracesData {
    /// Create a new batch from a set of spans
    pub fn new(spans: Vec<SpanData>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            spans,
            metadata: HashMap::new(),
        }
    }

    /// Number of spans in this batch
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether this batch carries no spans
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// A single span record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanData {
    /// Trace ID
    pub trace_id: String,

    /// Span ID
    pub span_id: String,

    /// Parent span ID
    pub parent_span_id: Option<String>,

    /// Span name
    pub name: String,

    /// Span start time
    pub start_time: DateTime<Utc>,

    /// Span end time
    pub end_time: Option<DateTime<Utc>>,

    /// Span attributes
    pub attributes: HashMap<String, String>,
}

/// Batch of metric points flowing through a metrics pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsData {
    /// Batch ID
    pub id: Uuid,

    /// Batch timestamp
    pub timestamp: DateTime<Utc>,

    /// Metric points in this batch
    pub points: Vec<MetricPoint>,

    /// Batch metadata
    pub metadata: HashMap<String, String>,
}

impl MetricsData {
    /// Create a new batch from a set of metric points
    pub fn new(points: Vec<MetricPoint>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            points,
            metadata: HashMap::new(),
        }
    }

    /// Number of metric points in this batch
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this batch carries no metric points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A single metric point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Metric name
    pub name: String,

    /// Metric description
    pub description: Option<String>,

    /// Metric unit
    pub unit: Option<String>,

    /// Metric value
    pub value: MetricValue,

    /// Metric labels
    pub labels: HashMap<String, String>,

    /// Point timestamp
    pub timestamp: DateTime<Utc>,
}

/// Metric values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MetricValue {
    /// Monotonic counter value
    Counter(f64),

    /// Point-in-time gauge value
    Gauge(f64),

    /// Histogram summary
    Histogram {
        /// Number of recorded observations
        count: u64,

        /// Sum of recorded observations
        sum: f64,
    },
}

/// Batch of log records flowing through a logs pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsData {
    /// Batch ID
    pub id: Uuid,

    /// Batch timestamp
    pub timestamp: DateTime<Utc>,

    /// Log records in this batch
    pub records: Vec<LogRecord>,

    /// Batch metadata
    pub metadata: HashMap<String, String>,
}

impl LogsData {
    /// Create a new batch from a set of log records
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            records,
            metadata: HashMap::new(),
        }
    }

    /// Number of log records in this batch
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this batch carries no log records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A single log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Record timestamp
    pub timestamp: DateTime<Utc>,

    /// Record severity
    pub severity: LogSeverity,

    /// Record body
    pub body: String,

    /// Record attributes
    pub attributes: HashMap<String, String>,
}

/// Log severities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}
