mod meta;
pub use self::meta::{ErrorBody, ErrorDetail, PaginationLinks, PaginationMeta, ResponseBody, ResponseMeta};
