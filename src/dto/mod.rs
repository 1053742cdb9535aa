// Create-request bodies. None of them model an `id`: the store assigns
// primary keys, and an id a client sends anyway is dropped during
// deserialization.
pub mod catalog;
pub mod customers;
pub mod orders;
pub mod reviews;
