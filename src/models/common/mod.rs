pub mod criteria;
pub mod error_code;
pub mod pagination;
pub mod response;

pub use criteria::{Criteria, Scope};
pub use error_code::ErrorCode;
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
