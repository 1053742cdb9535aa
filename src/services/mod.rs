// Data-access layer. Every function is one SQL statement against the pool:
// list returns every row, create inserts and echoes the stored row, delete
// reports whether a row went away. Constraint failures come back as
// AppError::ConstraintViolation via the shared From<sqlx::Error>.
pub mod catalog_service;
pub mod customer_service;
pub mod order_service;
pub mod review_service;
