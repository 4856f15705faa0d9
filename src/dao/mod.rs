/// Score record models shared by the store and the service layer.
pub mod models;
/// Allow-listed filter and ordering clauses for score listings.
pub mod query;
/// Score persistence backends.
pub mod score_store;
/// Storage abstraction layer for database operations.
pub mod storage;
