//! psem-lids: LID resolution and retrieval for ANSI C12.18/C12.19 meters.
//!
//! A LID (logical identifier) is a 32-bit value naming one quantity or
//! configuration item on a meter. This crate decomposes LIDs into a wire
//! type, a description and classification flags (in the [`lid`] module),
//! names the well known ones (in [`catalog`]), and reads and writes their
//! values over any [`connection::TableService`] (with [`LidRetriever`] and
//! [`LidWriter`]).

pub mod calendar;

pub mod catalog;
pub use catalog::Catalog;

pub mod connection;

mod error;
pub use error::LidError;

pub mod event;

#[macro_use]
mod fmt;
pub use fmt::{LogItem, LogOutput, Loggable, Logger};

pub mod lid;
pub use lid::{DataType, DeviceFamily, Lid, LidFlags, MeasurementUnit};

pub mod reader;

pub mod retriever;
pub use retriever::{LidRetriever, PLACEHOLDER_LID};

pub mod value;
pub use value::{LidReading, LidValue, MeterTime, ScalarValue};

pub mod writer;
pub use writer::LidWriter;

#[cfg(test)]
mod tests;
