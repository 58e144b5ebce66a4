pub mod auth;
pub mod dashboard;
pub mod dict;
pub mod lead;
pub mod notification;
pub mod pool;
pub mod reports;
pub mod settings;

pub use auth::{ChangePasswordRequest, LoginData, LoginRequest, MeData, UserProfile};
pub use dict::{DictItemsData, DictOption};
pub use lead::{Lead, LeadDetailData, LeadListData, LeadListQuery};
pub use pool::{PoolLead, PoolListData, PoolTransfer};
pub use settings::{CustomField, CustomFieldsData, Department, OrgData, OrgUser, Role};
