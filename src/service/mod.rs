//! CrudService and the request validator it applies.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::StudentValidator;
