use crate::services::AccountServiceError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Typed result of the account service operations
pub type ServiceResult<T = ()> = std::result::Result<T, AccountServiceError>;
