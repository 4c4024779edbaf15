//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based remote backend using
//! `aws-sdk-dynamodb`. Holidays live in a single table, one item per
//! holiday, with `PK = SK = HOLIDAY#<id>`.

mod connector;
mod conversions;
mod error;
mod keys;
mod repository;

pub use connector::DynamoDbConnector;
pub use repository::DynamoDbRepository;
